use maud::{html, Markup};

/// Colored status label for a table row. Anything that is not exactly
/// "accepted" or "rejected" — including a missing status — is shown as
/// Pending, even though the count line only tallies the literal value.
pub fn status_badge(status: Option<&str>) -> Markup {
    match status {
        Some("accepted") => html! {
            span style="color: #10b981; font-weight: 500;" { "Accepted" }
        },
        Some("rejected") => html! {
            span style="color: #dc2626; font-weight: 500;" { "Rejected" }
        },
        _ => html! {
            span style="color: #d97706; font-weight: 500;" { "Pending" }
        },
    }
}
