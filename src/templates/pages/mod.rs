pub mod applicants;

pub use applicants::{applicants_page, ApplicantsVm};
