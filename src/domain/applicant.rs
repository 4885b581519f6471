use chrono::{DateTime, Utc};
use serde::Deserialize;

// record
//  ├── _id
//  ├── status            ("pending" | "accepted" | "rejected" by convention)
//  └── applicant
//       ├── fullname
//       ├── email
//       ├── phoneNumber
//       ├── createdAt
//       └── profile
//            ├── resume
//            └── resumeOriginalName

/// One job application as the applications API serves it. Every nested
/// field can be missing on the wire, so everything is optional and the
/// templates decide the placeholder.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicantRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: Option<String>,
    pub applicant: Option<ApplicantProfile>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub profile: Option<ResumeInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInfo {
    pub resume: Option<String>,
    pub resume_original_name: Option<String>,
}

impl ApplicantRecord {
    pub fn fullname(&self) -> &str {
        self.applicant
            .as_ref()
            .and_then(|a| a.fullname.as_deref())
            .unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.applicant
            .as_ref()
            .and_then(|a| a.email.as_deref())
            .unwrap_or("")
    }

    pub fn phone_number(&self) -> &str {
        self.applicant
            .as_ref()
            .and_then(|a| a.phone_number.as_deref())
            .unwrap_or("")
    }

    pub fn resume(&self) -> Option<&ResumeInfo> {
        self.applicant
            .as_ref()
            .and_then(|a| a.profile.as_ref())
            .filter(|p| p.resume.is_some())
    }

    /// Creation timestamp truncated to its date portion, e.g. "2024-08-12".
    pub fn applied_on(&self) -> String {
        self.applicant
            .as_ref()
            .and_then(|a| a.created_at)
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}
