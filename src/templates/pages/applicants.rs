use crate::domain::shortlist::{StatusCounts, StatusFilter, SHORTLISTING_STATUSES, STATUS_FILTERS};
use crate::domain::ApplicantRecord;
use crate::templates::components::{flash_banner, status_badge, Flash};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ApplicantsVm<'a> {
    pub filter: StatusFilter,
    pub counts: StatusCounts,
    pub applicants: Vec<&'a ApplicantRecord>,
    pub flash: Option<Flash>,
}

const TH: &str = "padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;";
const TD: &str = "padding: 8px; border-bottom: 1px solid #f3f4f6;";

pub fn applicants_page(vm: &ApplicantsVm) -> Markup {
    desktop_layout(
        "Applicants",
        html! {
            main class="container" {
                h1 { "Applicants" }

                @if let Some(flash) = &vm.flash {
                    (flash_banner(flash))
                }

                span style="color: #6b7280;" {
                    "Pending Applicants: " (vm.counts.pending)
                    " | Accepted Applicants: " (vm.counts.accepted)
                    " | Rejected Applicants: " (vm.counts.rejected)
                }

                div style="display: flex; justify-content: space-between; align-items: center; margin: 1rem 0;" {
                    form action="/applicants" method="get" style="display: flex; gap: 8px; align-items: center; margin: 0;" {
                        label for="status" { "Filter By Status" }
                        select id="status" name="status" style="padding: 6px; border-radius: 4px; border: 1px solid #ccc;" {
                            @for filter in STATUS_FILTERS {
                                option value=(filter.as_str()) selected[filter == vm.filter] { (filter.label()) }
                            }
                        }
                        button type="submit" style="padding: 6px 12px; background: #3b82f6; color: white; border: none; border-radius: 4px; cursor: pointer;" { "Apply" }
                    }

                    div style="display: flex; gap: 10px; align-items: center;" {
                        form action="/applicants/refresh" method="post" style="margin: 0;" {
                            input type="hidden" name="filter" value=(vm.filter.as_str());
                            button type="submit" style="padding: 6px 12px; background: #10b981; color: white; border: none; border-radius: 4px; cursor: pointer;" { "Refresh" }
                        }
                        a href=(format!("/applicants/export?status={}", vm.filter.as_str())) { "Export XLSX" }
                    }
                }

                div class="card" {
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                            caption style="caption-side: bottom; color: #9ca3af; padding: 8px;" {
                                "A list of your recent applied users"
                            }
                            thead {
                                tr {
                                    th style=(TH) { "FullName" }
                                    th style=(TH) { "Email" }
                                    th style=(TH) { "Contact" }
                                    th style=(TH) { "Resume" }
                                    th style=(TH) { "Status" }
                                    th style=(TH) { "Date" }
                                    th style=(format!("{TH} text-align: right;")) { "Action" }
                                }
                            }
                            tbody {
                                @if vm.applicants.is_empty() {
                                    tr {
                                        td colspan="7" style=(TD) { "No applicants available" }
                                    }
                                } @else {
                                    @for record in &vm.applicants {
                                        (applicant_row(record, vm.filter))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn applicant_row(record: &ApplicantRecord, filter: StatusFilter) -> Markup {
    html! {
        tr {
            td style=(TD) { (record.fullname()) }
            td style=(TD) { (record.email()) }
            td style=(TD) { (record.phone_number()) }
            td style=(TD) {
                @match record.resume().and_then(|info| info.resume.as_deref()) {
                    Some(url) => {
                        a style="color: #2563eb;" href=(url) target="_blank" rel="noopener noreferrer" {
                            @match record.resume().and_then(|info| info.resume_original_name.as_deref()) {
                                Some(name) => (name),
                                None => (url),
                            }
                        }
                    }
                    None => {
                        span { "NA" }
                    }
                }
            }
            td style=(TD) { (status_badge(record.status.as_deref())) }
            td style=(TD) { (record.applied_on()) }
            td style=(format!("{TD} text-align: right;")) {
                details style="position: relative; display: inline-block;" {
                    summary style="cursor: pointer; list-style: none; padding: 0 6px;" { "\u{22EF}" }
                    div style="position: absolute; right: 0; background: white; border: 1px solid #e5e7eb; border-radius: 6px; box-shadow: 0 2px 8px rgba(0,0,0,0.08); padding: 8px; min-width: 8rem; z-index: 10;" {
                        @for status in SHORTLISTING_STATUSES {
                            form action=(format!("/applicants/{}/status", record.id)) method="post" style="margin: 4px 0;" {
                                input type="hidden" name="status" value=(status.as_str());
                                input type="hidden" name="filter" value=(filter.as_str());
                                button type="submit" style="background: none; border: none; cursor: pointer; padding: 2px 4px; font-size: 0.95em;" {
                                    (status.as_str())
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
