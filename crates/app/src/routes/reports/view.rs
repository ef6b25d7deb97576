use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdPaperclip, LdPencil};
use dioxus_free_icons::Icon;
use shared_types::{ReportStatus, ViolationReport};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, PageActions, PageHeader, PageTitle};
use uuid::Uuid;

use crate::auth::use_drafts;
use crate::routes::Route;

fn display(value: &str) -> String {
    if value.is_empty() {
        "Not provided".to_string()
    } else {
        value.to_string()
    }
}

#[component]
fn ViewRow(label: String, value: String) -> Element {
    rsx! {
        p { class: "view-row",
            strong { class: "view-row-label", "{label}: " }
            span { "{value}" }
        }
    }
}

/// Read-only view of a stored report.
#[component]
pub fn ReportViewPage(id: String) -> Element {
    let drafts = use_drafts();

    let report: Option<ViolationReport> = Uuid::parse_str(&id)
        .ok()
        .and_then(|parsed| drafts.get(parsed));

    let Some(report) = report else {
        return rsx! {
            PageHeader {
                PageTitle { "Report" }
            }
            div { class: "page-body",
                div { class: "list-empty",
                    p { "This report no longer exists on this device." }
                }
            }
        };
    };

    let edit_id = report.id.to_string();
    let display_number = report.display_number();
    let variant = match report.status {
        ReportStatus::Draft => BadgeVariant::Pending,
        ReportStatus::Submitted => BadgeVariant::Success,
    };

    rsx! {
        PageHeader {
            button {
                class: "header-action",
                onclick: move |_| {
                    navigator().push(Route::ReportList {});
                },
                Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 18, height: 18 }
            }
            PageTitle { "Report {display_number}" }
            PageActions {
                button {
                    class: "header-action",
                    onclick: move |_| {
                        navigator().push(Route::ReportEdit { id: edit_id.clone() });
                    },
                    Icon::<LdPencil> { icon: LdPencil, width: 18, height: 18 }
                    span { "Edit" }
                }
            }
        }
        div { class: "page-body view-sections",
            Card {
                CardHeader {
                    CardTitle { "General" }
                }
                CardContent {
                    div { class: "view-status-row",
                        Badge { variant: variant, "{report.status}" }
                    }
                    ViewRow { label: "Service order", value: display(&report.service_order) }
                    ViewRow { label: "Date/Time", value: format!("{} at {}", report.date, report.time) }
                    ViewRow { label: "Operator", value: display(&report.operator_name) }
                    ViewRow { label: "Service sigla", value: display(&report.operator_sigla) }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Vehicle" }
                }
                CardContent {
                    ViewRow { label: "Fleet number", value: display(&report.fleet_number) }
                    ViewRow { label: "Plate", value: display(&report.plate) }
                    ViewRow { label: "Model", value: display(&report.model) }
                    ViewRow { label: "Color", value: display(&report.color) }
                    ViewRow {
                        label: "Year",
                        value: if report.year > 0 { report.year.to_string() } else { "Not provided".to_string() },
                    }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Agent" }
                }
                CardContent {
                    ViewRow { label: "Name", value: display(&report.agent_name) }
                    ViewRow { label: "Registration", value: display(&report.agent_registration) }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Line" }
                }
                CardContent {
                    ViewRow { label: "Code", value: display(&report.line_code) }
                    ViewRow { label: "Name", value: display(&report.line_name) }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Location" }
                }
                CardContent {
                    ViewRow { label: "Administrative region", value: display(&report.locality_description) }
                    ViewRow { label: "Location", value: display(&report.location) }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Violation" }
                }
                CardContent {
                    ViewRow { label: "Narrative", value: display(&report.narrative) }
                    if !report.attachment_names.is_empty() {
                        div { class: "view-attachments",
                            Icon::<LdPaperclip> { icon: LdPaperclip, width: 16, height: 16 }
                            span { {report.attachment_names.join(", ")} }
                        }
                    }
                }
            }
        }
    }
}
