pub mod applicant;
pub mod shortlist;

pub use applicant::{ApplicantProfile, ApplicantRecord, ResumeInfo};
pub use shortlist::{filter_applicants, ShortlistStatus, StatusCounts, StatusFilter};
