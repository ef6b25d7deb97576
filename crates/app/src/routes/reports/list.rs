use api_client::{HttpApi, ProtocolApi};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPlus, LdSearch, LdSend};
use dioxus_free_icons::Icon;
use shared_types::{ReportStatus, ViolationReport};
use shared_ui::{use_toast, Badge, BadgeVariant, PageActions, PageHeader, PageTitle, ToastOptions};

use crate::auth::{use_drafts, use_session};
use crate::routes::Route;

/// Case-insensitive match across the fields inspectors search by:
/// report number, plate, and location.
fn matches_search(report: &ViolationReport, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    report
        .number
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
        .contains(&term)
        || report.plate.to_lowercase().contains(&term)
        || report.location.to_lowercase().contains(&term)
}

#[component]
pub fn ReportListPage() -> Element {
    let drafts = use_drafts();
    let session = use_session();
    let api = use_context::<HttpApi>();
    let toast = use_toast();

    let mut search = use_signal(String::new);
    let reports = use_signal({
        let drafts = drafts.clone();
        move || drafts.list()
    });
    let mut dispatching = use_signal(|| false);

    let employee_id = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.employee_id)
        .unwrap_or(0);

    let has_submitted = reports.read().iter().any(|r| r.is_submitted());

    // Forward already-protocoled reports to the official document registry.
    let handle_dispatch = move |_| {
        if dispatching() || employee_id == 0 {
            return;
        }
        let api = api.clone();
        spawn(async move {
            dispatching.set(true);
            match api.dispatch_reports(employee_id).await {
                Ok(()) => toast.success(
                    "Reports forwarded to the document registry.".to_string(),
                    ToastOptions::new(),
                ),
                Err(e) => toast.error(e.friendly_message(), ToastOptions::new()),
            }
            dispatching.set(false);
        });
    };

    let filtered: Vec<ViolationReport> = reports
        .read()
        .iter()
        .filter(|r| matches_search(r, search.read().trim()))
        .cloned()
        .collect();

    rsx! {
        PageHeader {
            PageTitle { "Violation Reports" }
            PageActions {
                if has_submitted {
                    button {
                        class: "header-action",
                        disabled: dispatching(),
                        onclick: handle_dispatch,
                        Icon::<LdSend> { icon: LdSend, width: 18, height: 18 }
                    }
                }
                button {
                    class: "header-action",
                    onclick: move |_| {
                        navigator().push(Route::ReportCreate {});
                    },
                    Icon::<LdPlus> { icon: LdPlus, width: 18, height: 18 }
                    span { "New" }
                }
            }
        }
        div { class: "page-body",
            div { class: "search-box",
                Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search by number, plate or location...",
                    value: search(),
                    oninput: move |e: FormEvent| search.set(e.value()),
                }
            }

            if filtered.is_empty() {
                div { class: "list-empty",
                    p { "No reports found." }
                }
            } else {
                div { class: "report-list",
                    for report in filtered {
                        {
                            let id = report.id.to_string();
                            let display_number = report.display_number();
                            let variant = match report.status {
                                ReportStatus::Draft => BadgeVariant::Pending,
                                ReportStatus::Submitted => BadgeVariant::Success,
                            };
                            rsx! {
                                div {
                                    class: "report-row",
                                    onclick: move |_| {
                                        navigator().push(Route::ReportDetail { id: id.clone() });
                                    },
                                    div { class: "report-row-main",
                                        span { class: "report-row-number", "{display_number}" }
                                        span { class: "report-row-detail",
                                            if report.plate.is_empty() {
                                                "{report.date} {report.time}"
                                            } else {
                                                "{report.plate} · {report.date} {report.time}"
                                            }
                                        }
                                        if !report.location.is_empty() {
                                            span { class: "report-row-location", "{report.location}" }
                                        }
                                    }
                                    Badge { variant: variant, "{report.status}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(plate: &str, location: &str, number: Option<&str>) -> ViolationReport {
        let mut report = ViolationReport::new("2025-10-03".into(), "14:30".into());
        report.plate = plate.to_string();
        report.location = location.to_string();
        report.number = number.map(str::to_string);
        report
    }

    #[test]
    fn empty_term_matches_everything() {
        let report = report_with("", "", None);
        assert!(matches_search(&report, ""));
    }

    #[test]
    fn matches_plate_case_insensitively() {
        let report = report_with("ABC1D23", "", None);
        assert!(matches_search(&report, "abc1"));
        assert!(!matches_search(&report, "xyz"));
    }

    #[test]
    fn matches_number_and_location() {
        let report = report_with("", "Terminal Rodoviario", Some("2025099"));
        assert!(matches_search(&report, "2025"));
        assert!(matches_search(&report, "rodovia"));
    }
}
