use api_client::{HttpApi, ProtocolApi};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use shared_ui::{use_toast, Badge, BadgeVariant, Card, PageHeader, PageTitle, ToastOptions};

use crate::auth::use_session;
use crate::routes::Route;

/// Category menu. Only the STPC domain is live; the other categories are
/// placeholders the way the field teams expect to see them listed.
const CATEGORIES: &[(&str, bool)] = &[
    ("Violation Reports - STPC", true),
    ("Taxi", false),
    ("STIP", false),
    ("Unlicensed Transport", false),
];

#[component]
pub fn DashboardPage() -> Element {
    let session = use_session();
    let api = use_context::<HttpApi>();
    let toast = use_toast();

    let greeting = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.full_name.clone())
        .unwrap_or_default();
    let user_id = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.user_id)
        .unwrap_or(0);

    // Reports protocoled but not yet forwarded to the document registry.
    let pending = use_resource(move || {
        let api = api.clone();
        async move {
            if user_id == 0 {
                return None;
            }
            api.pending_report_count(user_id).await.ok()
        }
    });
    let pending_count = pending.read().as_ref().cloned().flatten().unwrap_or(0);

    rsx! {
        PageHeader {
            PageTitle { "Inspection" }
        }
        div { class: "page-body",
            p { class: "dashboard-greeting", "Hello, {greeting}" }

            if pending_count > 0 {
                div { class: "dashboard-pending",
                    Badge { variant: BadgeVariant::Pending,
                        "{pending_count} report(s) awaiting dispatch"
                    }
                }
            }

            div { class: "dashboard-grid",
                for (title, available) in CATEGORIES.iter().copied() {
                    Card { class: "dashboard-card".to_string(),
                        div {
                            class: if available { "dashboard-card-body" } else { "dashboard-card-body unavailable" },
                            onclick: move |_| {
                                if available {
                                    navigator().push(Route::ReportList {});
                                } else {
                                    toast.info(
                                        "This module is under development.".to_string(),
                                        ToastOptions::new(),
                                    );
                                }
                            },
                            Icon::<LdFileText> { icon: LdFileText, width: 28, height: 28 }
                            span { class: "dashboard-card-title", "{title}" }
                            if !available {
                                Badge { variant: BadgeVariant::Neutral, "Soon" }
                            }
                        }
                    }
                }
            }
        }
    }
}
