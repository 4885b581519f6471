use crate::domain::ShortlistStatus;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{location, make_state, post_form, sample_records, UpdateScript};

#[test]
fn successful_update_flashes_server_message() {
    let (state, api) = make_state(sample_records(), UpdateScript::ok("Updated"), Vec::new());

    let req = post_form("/applicants/app-1/status", "status=Accepted&filter=pending");
    let resp = handle(req, &state).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    let loc = location(&resp);
    assert!(loc.starts_with("/applicants?"));
    assert!(loc.contains("status=pending"), "active filter survives: {loc}");
    assert!(loc.contains("notice=Updated"));
    assert!(loc.contains("tone=success"));

    // The API saw exactly one credentialed update.
    let updates = api.updates.lock().unwrap();
    assert_eq!(*updates, vec![("app-1".to_string(), ShortlistStatus::Accepted)]);

    // No optimistic mutation: the snapshot still says pending until a refresh.
    let snapshot = state.store.snapshot().unwrap();
    assert_eq!(snapshot[0].status.as_deref(), Some("pending"));
}

#[test]
fn api_rejection_flashes_error_message() {
    let (state, _) = make_state(
        sample_records(),
        UpdateScript::Fail("Status already updated".to_string()),
        Vec::new(),
    );

    let req = post_form("/applicants/app-2/status", "status=Rejected&filter=all");
    let resp = handle(req, &state).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    let loc = location(&resp);
    assert!(loc.contains("tone=error"));
    assert!(loc.contains("notice=Status+already+updated"));
}

#[test]
fn unacknowledged_update_redirects_without_notice() {
    let script = UpdateScript::Ack {
        success: false,
        message: "ignored".to_string(),
    };
    let (state, _) = make_state(sample_records(), script, Vec::new());

    let req = post_form("/applicants/app-1/status", "status=Accepted&filter=all");
    let resp = handle(req, &state).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    let loc = location(&resp);
    assert!(!loc.contains("notice="), "no flash when success is false: {loc}");
}

#[test]
fn status_value_must_match_the_action_menu_exactly() {
    let (state, api) = make_state(sample_records(), UpdateScript::ok("Updated"), Vec::new());

    // The menu posts display case; anything else is a bad request.
    let req = post_form("/applicants/app-1/status", "status=accepted&filter=all");
    let result = handle(req, &state);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert!(api.updates.lock().unwrap().is_empty());
}

#[test]
fn status_route_requires_an_id() {
    let (state, _) = make_state(sample_records(), UpdateScript::ok("Updated"), Vec::new());

    let req = post_form("/applicants//status", "status=Accepted&filter=all");
    let result = handle(req, &state);

    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn refresh_replaces_the_snapshot() {
    let (state, _) = make_state(Vec::new(), UpdateScript::ok("Updated"), sample_records());

    let resp = handle(post_form("/applicants/refresh", "filter=all"), &state)
        .expect("Handler failed");

    assert_eq!(resp.status(), 302);
    let loc = location(&resp);
    assert!(loc.contains("notice=Loaded+3+applicants"));
    assert!(loc.contains("tone=success"));

    assert_eq!(state.store.snapshot().unwrap().len(), 3);
}
