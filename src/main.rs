use crate::api::HttpApplicationApi;
use crate::responses::html_error_response;
use crate::router::{handle, AppState};
use crate::store::ApplicantStore;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod api;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod store;
mod templates;


struct Config {
    bind_addr: SocketAddr,
    api_endpoint: String,
    job_id: String,
    session_token: String,
}

fn load_config() -> Result<Config, String> {
    let api_endpoint = std::env::var("APPLICATION_API_END_POINT")
        .map_err(|_| "APPLICATION_API_END_POINT is not set".to_string())?;
    let job_id = std::env::var("JOB_ID").map_err(|_| "JOB_ID is not set".to_string())?;
    let session_token = std::env::var("ADMIN_SESSION_TOKEN")
        .map_err(|_| "ADMIN_SESSION_TOKEN is not set".to_string())?;

    let bind_addr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .map_err(|e| format!("Invalid BIND_ADDR: {e}"))?;

    Ok(Config {
        bind_addr,
        api_endpoint,
        job_id,
        session_token,
    })
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let api = match HttpApplicationApi::new(
        &config.api_endpoint,
        config.job_id,
        config.session_token,
    ) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let state = AppState {
        store: ApplicantStore::new(),
        api,
    };

    // Warm the snapshot so the first page load has data. Not fatal if the
    // API is down; the Refresh button retries.
    match store::refresh(&state.store, state.api.as_ref()) {
        Ok(count) => println!("Loaded {count} applicants"),
        Err(e) => eprintln!("⚠️ Initial applicant fetch failed: {e}"),
    }

    println!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
