pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod reports;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdLayoutDashboard, LdUserCheck};
use dioxus_free_icons::Icon;

use crate::auth::{use_drafts, use_session};

use dashboard::DashboardPage;
use login::LoginPage;
use not_found::NotFoundPage;
use profile::ProfilePage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppShell)]
    #[route("/")]
    Dashboard {},
    #[route("/reports")]
    ReportList {},
    #[route("/reports/new")]
    ReportCreate {},
    #[route("/reports/:id")]
    ReportDetail { id: String },
    #[route("/reports/:id/edit")]
    ReportEdit { id: String },
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Redirects to the login screen when no session is live or persisted.
#[component]
fn AuthGuard() -> Element {
    let mut session = use_session();
    let drafts = use_drafts();

    // One-time restore of a persisted session into the live signal.
    {
        let drafts = drafts.clone();
        use_hook(move || {
            let mut session = session;
            session.restore(&drafts);
        });
    }

    if session.is_authenticated() {
        rsx! { Outlet::<Route> {} }
    } else {
        navigator().push(Route::Login {});
        rsx! {
            div { class: "guard-loading",
                p { "Redirecting to login..." }
            }
        }
    }
}

/// Authenticated shell: page content above a fixed bottom navigation bar.
#[component]
fn AppShell() -> Element {
    let route: Route = use_route();

    let nav_class = |active: bool| {
        if active {
            "bottom-nav-item active".to_string()
        } else {
            "bottom-nav-item".to_string()
        }
    };

    rsx! {
        div { class: "app-shell",
            div { class: "app-content",
                Outlet::<Route> {}
            }
            nav { class: "bottom-nav",
                Link {
                    to: Route::Dashboard {},
                    class: nav_class(matches!(route, Route::Dashboard {})),
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 20, height: 20 }
                    span { "Home" }
                }
                Link {
                    to: Route::ReportList {},
                    class: nav_class(matches!(
                        route,
                        Route::ReportList {}
                            | Route::ReportCreate {}
                            | Route::ReportDetail { .. }
                            | Route::ReportEdit { .. }
                    )),
                    Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                    span { "Reports" }
                }
                Link {
                    to: Route::Profile {},
                    class: nav_class(matches!(route, Route::Profile {})),
                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 }
                    span { "Profile" }
                }
            }
        }
    }
}

#[component]
fn Login() -> Element {
    LoginPage()
}

#[component]
fn Dashboard() -> Element {
    DashboardPage()
}

#[component]
fn ReportList() -> Element {
    reports::list::ReportListPage()
}

#[component]
fn ReportCreate() -> Element {
    rsx! { reports::form::ReportFormPage { audit_id: None } }
}

#[component]
fn ReportDetail(id: String) -> Element {
    rsx! { reports::view::ReportViewPage { id: id } }
}

#[component]
fn ReportEdit(id: String) -> Element {
    rsx! { reports::form::ReportFormPage { audit_id: Some(id) } }
}

#[component]
fn Profile() -> Element {
    ProfilePage()
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    rsx! { NotFoundPage { route: route } }
}
