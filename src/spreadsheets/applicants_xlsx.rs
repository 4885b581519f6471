use crate::domain::shortlist::StatusFilter;
use crate::domain::ApplicantRecord;
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use rust_xlsxwriter::Workbook;

/// Export the filtered applicant view, same columns and placeholders as
/// the HTML table.
pub fn export_applicants_xlsx(
    applicants: &[&ApplicantRecord],
    filter: StatusFilter,
) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = ["FullName", "Email", "Contact", "Resume", "Status", "Date"];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, record) in applicants.iter().enumerate() {
        let r = (i + 1) as u32;

        let resume = record
            .resume()
            .and_then(|info| info.resume.as_deref())
            .unwrap_or("NA");

        let status = match record.status.as_deref() {
            Some("accepted") => "Accepted",
            Some("rejected") => "Rejected",
            _ => "Pending",
        };

        let applied = record.applied_on();
        let cells = [
            record.fullname(),
            record.email(),
            record.phone_number(),
            resume,
            status,
            applied.as_str(),
        ];

        for (col, value) in cells.iter().enumerate() {
            worksheet.write_string(r, col as u16, *value).map_err(|e| {
                ServerError::XlsxError(format!("Failed to write row {r}: {e}"))
            })?;
        }
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, &format!("applicants_{}.xlsx", filter.as_str()))
}
