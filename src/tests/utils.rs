use crate::api::{ApplicationApi, StatusAck};
use crate::domain::{ApplicantRecord, ShortlistStatus};
use crate::errors::ServerError;
use crate::router::AppState;
use crate::store::ApplicantStore;
use astra::Body;
use http::Method;
use serde_json::json;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// What the scripted API should answer to a status update.
#[derive(Debug, Clone)]
pub enum UpdateScript {
    Ack { success: bool, message: String },
    Fail(String),
}

impl UpdateScript {
    pub fn ok(message: &str) -> Self {
        UpdateScript::Ack {
            success: true,
            message: message.to_string(),
        }
    }
}

/// In-memory stand-in for the applications API: records every update call
/// and serves a canned applicant list on fetch.
pub struct ScriptedApi {
    pub update_script: UpdateScript,
    pub updates: Mutex<Vec<(String, ShortlistStatus)>>,
    pub fetchable: Vec<ApplicantRecord>,
}

impl ScriptedApi {
    pub fn new(update_script: UpdateScript, fetchable: Vec<ApplicantRecord>) -> Self {
        Self {
            update_script,
            updates: Mutex::new(Vec::new()),
            fetchable,
        }
    }
}

impl ApplicationApi for ScriptedApi {
    fn update_status(&self, id: &str, status: ShortlistStatus) -> Result<StatusAck, ServerError> {
        self.updates
            .lock()
            .expect("updates lock")
            .push((id.to_string(), status));

        match &self.update_script {
            UpdateScript::Ack { success, message } => Ok(StatusAck {
                success: *success,
                message: message.clone(),
            }),
            UpdateScript::Fail(message) => Err(ServerError::ApiError(message.clone())),
        }
    }

    fn fetch_applicants(&self) -> Result<Vec<ApplicantRecord>, ServerError> {
        Ok(self.fetchable.clone())
    }
}

/// Three applicants exercising the wire shape: camelCase names, missing
/// profile, and a status that is only correct up to case.
pub fn sample_records() -> Vec<ApplicantRecord> {
    serde_json::from_value(json!([
        {
            "_id": "app-1",
            "status": "pending",
            "applicant": {
                "fullname": "Ada Lovelace",
                "email": "ada@example.com",
                "phoneNumber": "555-0100",
                "createdAt": "2024-08-12T09:30:00Z",
                "profile": {
                    "resume": "https://cdn.example.com/ada.pdf",
                    "resumeOriginalName": "ada-cv.pdf"
                }
            }
        },
        {
            "_id": "app-2",
            "status": "accepted",
            "applicant": {
                "fullname": "Grace Hopper",
                "email": "grace@example.com",
                "phoneNumber": "555-0101",
                "createdAt": "2024-08-13T14:00:00Z"
            }
        },
        {
            "_id": "app-3",
            "status": "Rejected",
            "applicant": {
                "fullname": "Alan Turing",
                "email": "alan@example.com"
            }
        }
    ]))
    .expect("sample records deserialize")
}

pub fn make_state(
    records: Vec<ApplicantRecord>,
    script: UpdateScript,
    fetchable: Vec<ApplicantRecord>,
) -> (AppState, Arc<ScriptedApi>) {
    let api = Arc::new(ScriptedApi::new(script, fetchable));
    let state = AppState {
        store: ApplicantStore::with_records(records),
        api: api.clone(),
    };
    (state, api)
}

pub fn get(path: &str) -> astra::Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, form: &str) -> astra::Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn read_body(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("response body is utf-8");
    body
}

pub fn location(resp: &astra::Response) -> String {
    resp.headers()
        .get("Location")
        .expect("Location header present")
        .to_str()
        .expect("Location header is ascii")
        .to_string()
}
