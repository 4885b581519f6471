use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// Plain 302 used both for the root redirect and the post/redirect/get
/// dance after a form submission.
pub fn redirect_response(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
