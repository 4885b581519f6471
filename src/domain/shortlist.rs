use crate::domain::applicant::ApplicantRecord;
use serde::Serialize;
use std::fmt;

/// The two terminal transitions an admin can apply from the table.
/// Serialized in display case because that is what the applications
/// API expects in the update body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShortlistStatus {
    Accepted,
    Rejected,
}

pub const SHORTLISTING_STATUSES: [ShortlistStatus; 2] =
    [ShortlistStatus::Accepted, ShortlistStatus::Rejected];

impl ShortlistStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortlistStatus::Accepted => "Accepted",
            ShortlistStatus::Rejected => "Rejected",
        }
    }

    /// Exact-match parse of the form value posted by the action menu.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Accepted" => Some(ShortlistStatus::Accepted),
            "Rejected" => Some(ShortlistStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ShortlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The status filter selected in the table header. Request-scoped:
/// parsed from the query string on every page load, defaulting to All.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Accepted,
    Rejected,
    Pending,
}

pub const STATUS_FILTERS: [StatusFilter; 4] = [
    StatusFilter::All,
    StatusFilter::Accepted,
    StatusFilter::Rejected,
    StatusFilter::Pending,
];

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Accepted => "accepted",
            StatusFilter::Rejected => "rejected",
            StatusFilter::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Accepted => "Accepted",
            StatusFilter::Rejected => "Rejected",
            StatusFilter::Pending => "Pending",
        }
    }

    /// Unrecognized or missing values fall back to All rather than erroring,
    /// so a stale bookmark still renders the full table.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("accepted") => StatusFilter::Accepted,
            Some("rejected") => StatusFilter::Rejected,
            Some("pending") => StatusFilter::Pending,
            _ => StatusFilter::All,
        }
    }
}

/// Order-preserving filter over the applicant list.
///
/// Matching is case-insensitive ("Rejected" passes the rejected filter),
/// while the counts below are exact-case. Both behaviors come straight
/// from the product and are intentionally kept distinct.
pub fn filter_applicants(records: &[ApplicantRecord], filter: StatusFilter) -> Vec<&ApplicantRecord> {
    records
        .iter()
        .filter(|record| match filter {
            StatusFilter::All => true,
            _ => record
                .status
                .as_deref()
                .map(|s| s.eq_ignore_ascii_case(filter.as_str()))
                .unwrap_or(false),
        })
        .collect()
}

/// Per-status totals over the filtered view, recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl StatusCounts {
    /// Exact-case tally: a record whose status is "Rejected" lands in no
    /// bucket even though the table still paints it with a badge.
    pub fn tally(records: &[&ApplicantRecord]) -> Self {
        let count = |wanted: &str| {
            records
                .iter()
                .filter(|r| r.status.as_deref() == Some(wanted))
                .count()
        };

        StatusCounts {
            pending: count("pending"),
            accepted: count("accepted"),
            rejected: count("rejected"),
        }
    }
}
