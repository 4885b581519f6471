use crate::router::handle;
use crate::tests::utils::{get, make_state, sample_records, UpdateScript};
use std::io::Read;

#[test]
fn export_returns_an_xlsx_attachment() {
    let (state, _) = make_state(sample_records(), UpdateScript::ok("Updated"), Vec::new());

    let resp = handle(get("/applicants/export?status=accepted"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("applicants_accepted.xlsx"));

    let mut buffer = Vec::new();
    resp.into_body()
        .reader()
        .read_to_end(&mut buffer)
        .expect("workbook bytes");
    assert!(!buffer.is_empty());
    // XLSX is a zip container.
    assert_eq!(&buffer[..2], b"PK");
}
