use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad form input, etc.) or the applications API.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    /// The applications API rejected a call and told us why.
    ApiError(String),
    XlsxError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<astra::Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::ApiError(msg) => write!(f, "Application API Error: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
