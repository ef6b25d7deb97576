use api_client::HttpApi;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::auth::{sign_in_flow, use_drafts, use_session};
use crate::routes::Route;

/// Login screen: username + password against the municipal credential
/// service. Failures surface with the taxonomy-specific messages the API
/// client produces (bad credentials, forbidden, timeout, connection).
#[component]
pub fn LoginPage() -> Element {
    let mut session = use_session();
    let drafts = use_drafts();
    let api = use_context::<HttpApi>();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        if username.read().trim().is_empty() || password.read().is_empty() {
            error_msg.set(Some("Enter your username and password.".to_string()));
            return;
        }
        let api = api.clone();
        let drafts = drafts.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            let user_input = username.read().trim().to_string();
            let pass_input = password.read().clone();
            match sign_in_flow(&api, &user_input, &pass_input).await {
                Ok(user) => {
                    session.sign_in(&drafts, user);
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => {
                    error_msg.set(Some(e.friendly_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card".to_string(),
                CardHeader {
                    CardTitle { "Transit Inspection" }
                    CardDescription { "Sign in with your inspector credentials" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    form { onsubmit: handle_login,
                        div { class: "auth-fields",
                            Input {
                                label: "Username",
                                value: username(),
                                placeholder: "username",
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                            Input {
                                label: "Password",
                                input_type: "password",
                                value: password(),
                                placeholder: "password",
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
