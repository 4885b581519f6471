use crate::domain::{ApplicantRecord, ShortlistStatus};
use crate::errors::ServerError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

/// The applications API as this console sees it. Injected into the
/// router so tests can script responses without a network.
pub trait ApplicationApi: Send + Sync {
    /// `POST {base}/status/{id}/update` with `{ "status": "Accepted" }`.
    fn update_status(&self, id: &str, status: ShortlistStatus) -> Result<StatusAck, ServerError>;

    /// `GET {base}/{job_id}/applicants` — the full list for the job this
    /// console is managing.
    fn fetch_applicants(&self) -> Result<Vec<ApplicantRecord>, ServerError>;
}

/// Acknowledgement shape of a status update.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusAck {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
struct StatusUpdateBody {
    status: ShortlistStatus,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Deserialize)]
struct ApplicantsEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    applications: Vec<ApplicantRecord>,
}

pub struct HttpApplicationApi {
    base_url: String,
    job_id: String,
    session_token: String,
    client: Client,
}

impl HttpApplicationApi {
    pub fn new(
        endpoint: &str,
        job_id: String,
        session_token: String,
    ) -> Result<Self, ServerError> {
        let base = Url::parse(endpoint).map_err(|e| {
            ServerError::BadRequest(format!("Invalid application API endpoint '{endpoint}': {e}"))
        })?;

        Ok(Self {
            base_url: base.as_str().trim_end_matches('/').to_string(),
            job_id,
            session_token,
            client: Client::new(),
        })
    }

    // The API authenticates with the admin's session cookie, so every
    // request goes out credentialed.
    fn cookie(&self) -> String {
        format!("token={}", self.session_token)
    }
}

impl ApplicationApi for HttpApplicationApi {
    fn update_status(&self, id: &str, status: ShortlistStatus) -> Result<StatusAck, ServerError> {
        let url = format!("{}/status/{}/update", self.base_url, id);

        let resp = self
            .client
            .post(url)
            .header("Cookie", self.cookie())
            .json(&StatusUpdateBody { status })
            .send()
            .map_err(|e| ServerError::ApiError(format!("Status update request failed: {e}")))?;

        if resp.status().is_success() {
            let ack: StatusAck = resp
                .json()
                .map_err(|e| ServerError::ApiError(format!("Malformed acknowledgement: {e}")))?;
            return Ok(ack);
        }

        // Error responses are expected to carry { "message": ... }. Anything
        // else is treated as a server fault rather than a user-facing notice.
        let body: ApiErrorBody = resp.json().map_err(|_| ServerError::InternalError)?;
        Err(ServerError::ApiError(body.message))
    }

    fn fetch_applicants(&self) -> Result<Vec<ApplicantRecord>, ServerError> {
        let url = format!("{}/{}/applicants", self.base_url, self.job_id);

        let resp = self
            .client
            .get(url)
            .header("Cookie", self.cookie())
            .send()
            .map_err(|e| ServerError::ApiError(format!("Applicant fetch failed: {e}")))?;

        if !resp.status().is_success() {
            let body: ApiErrorBody = resp.json().map_err(|_| ServerError::InternalError)?;
            return Err(ServerError::ApiError(body.message));
        }

        let envelope: ApplicantsEnvelope = resp
            .json()
            .map_err(|e| ServerError::ApiError(format!("Malformed applicant list: {e}")))?;

        if !envelope.success {
            return Err(ServerError::ApiError(
                envelope
                    .message
                    .unwrap_or_else(|| "Applicant fetch was rejected".to_string()),
            ));
        }

        Ok(envelope.applications)
    }
}
