pub mod applicants_xlsx;

pub use applicants_xlsx::export_applicants_xlsx;
