use crate::api::ApplicationApi;
use crate::domain::shortlist::{filter_applicants, ShortlistStatus, StatusCounts, StatusFilter};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, redirect_response};
use crate::spreadsheets::export_applicants_xlsx;
use crate::store::{self, ApplicantStore};
use crate::templates::components::{Flash, FlashTone};
use crate::templates::pages::{applicants_page, ApplicantsVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;
use url::form_urlencoded;

/// Everything a request handler needs: the applicant snapshot plus the
/// injected applications API client.
#[derive(Clone)]
pub struct AppState {
    pub store: ApplicantStore,
    pub api: Arc<dyn ApplicationApi>,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => redirect_response("/applicants"),

        ("GET", "/applicants") => applicants_table(state, query.as_deref()),

        ("GET", "/applicants/export") => export_applicants(state, query.as_deref()),

        ("POST", "/applicants/refresh") => refresh_applicants(state, req),

        // POST /applicants/{id}/status
        ("POST", p) => match status_route_id(p) {
            Some(id) => {
                let id = id.to_string();
                update_status(state, &id, req)
            }
            None => Err(ServerError::NotFound),
        },

        _ => Err(ServerError::NotFound),
    }
}

fn status_route_id(path: &str) -> Option<&str> {
    path.strip_prefix("/applicants/")
        .and_then(|rest| rest.strip_suffix("/status"))
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

/// GET /applicants — snapshot, filter, tally, render.
fn applicants_table(state: &AppState, query: Option<&str>) -> ResultResp {
    let params = parse_pairs(query.unwrap_or(""));
    let filter = StatusFilter::parse(params.get("status").map(String::as_str));
    let flash = flash_from_params(&params);

    let records = state.store.snapshot()?;
    let applicants = filter_applicants(&records, filter);
    let counts = StatusCounts::tally(&applicants);

    html_response(applicants_page(&ApplicantsVm {
        filter,
        counts,
        applicants,
        flash,
    }))
}

/// POST /applicants/{id}/status — forward the transition to the API and
/// come back with a flash. The snapshot is deliberately left untouched:
/// the table shows the new status only after a refresh.
fn update_status(state: &AppState, id: &str, req: Request) -> ResultResp {
    let form = read_form(req)?;

    let status = form
        .get("status")
        .and_then(|value| ShortlistStatus::parse(value))
        .ok_or_else(|| ServerError::BadRequest("Unknown shortlist status".to_string()))?;
    let filter = StatusFilter::parse(form.get("filter").map(String::as_str));

    match state.api.update_status(id, status) {
        Ok(ack) if ack.success => {
            redirect_response(&back_to_table(filter, Some((FlashTone::Success, &ack.message))))
        }
        // Unacknowledged but not an error: redirect with no notice.
        Ok(_) => redirect_response(&back_to_table(filter, None)),
        Err(ServerError::ApiError(message)) => {
            redirect_response(&back_to_table(filter, Some((FlashTone::Error, &message))))
        }
        Err(other) => Err(other),
    }
}

/// POST /applicants/refresh — the one operation that replaces the snapshot.
fn refresh_applicants(state: &AppState, req: Request) -> ResultResp {
    let form = read_form(req)?;
    let filter = StatusFilter::parse(form.get("filter").map(String::as_str));

    match store::refresh(&state.store, state.api.as_ref()) {
        Ok(count) => {
            let message = format!("Loaded {count} applicants");
            redirect_response(&back_to_table(filter, Some((FlashTone::Success, &message))))
        }
        Err(ServerError::ApiError(message)) => {
            redirect_response(&back_to_table(filter, Some((FlashTone::Error, &message))))
        }
        Err(other) => Err(other),
    }
}

/// GET /applicants/export — the filtered view as an XLSX download.
fn export_applicants(state: &AppState, query: Option<&str>) -> ResultResp {
    let params = parse_pairs(query.unwrap_or(""));
    let filter = StatusFilter::parse(params.get("status").map(String::as_str));

    let records = state.store.snapshot()?;
    let applicants = filter_applicants(&records, filter);

    export_applicants_xlsx(&applicants, filter)
}

fn back_to_table(filter: StatusFilter, flash: Option<(FlashTone, &str)>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("status", filter.as_str());
    if let Some((tone, message)) = flash {
        query.append_pair("notice", message);
        query.append_pair("tone", tone.as_str());
    }
    format!("/applicants?{}", query.finish())
}

fn flash_from_params(params: &HashMap<String, String>) -> Option<Flash> {
    let message = params.get("notice")?;
    let tone = FlashTone::parse(params.get("tone").map(String::as_str).unwrap_or(""))?;
    Some(Flash {
        tone,
        message: message.clone(),
    })
}

fn parse_pairs(input: &str) -> HashMap<String, String> {
    form_urlencoded::parse(input.as_bytes())
        .into_owned()
        .collect()
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    Ok(parse_pairs(&body))
}
