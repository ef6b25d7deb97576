use api_client::{HttpApi, ProtocolApi};
use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, PageHeader,
    PageTitle, Separator, ToastOptions,
};

use crate::auth::{use_drafts, use_session};
use crate::routes::Route;

const MIN_PASSWORD_LEN: usize = 6;

#[component]
pub fn ProfilePage() -> Element {
    let mut session = use_session();
    let drafts = use_drafts();
    let api = use_context::<HttpApi>();
    let toast = use_toast();

    let user = session.current_user.read().as_ref().cloned();

    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut changing = use_signal(|| false);

    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();

    let handle_change_password = {
        let username = username.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if changing() {
                return;
            }
            let new_pass = new_password.read().clone();
            if new_pass.len() < MIN_PASSWORD_LEN {
                toast.error(
                    format!("The new password needs at least {MIN_PASSWORD_LEN} characters."),
                    ToastOptions::new(),
                );
                return;
            }
            if new_pass != *confirm_password.read() {
                toast.error("The passwords do not match.".to_string(), ToastOptions::new());
                return;
            }
            let api = api.clone();
            let username = username.clone();
            spawn(async move {
                changing.set(true);
                match api.update_password(&username, &new_pass).await {
                    Ok(()) => {
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                        toast.success("Password updated.".to_string(), ToastOptions::new());
                    }
                    Err(e) => toast.error(e.friendly_message(), ToastOptions::new()),
                }
                changing.set(false);
            });
        }
    };

    let handle_sign_out = {
        let drafts = drafts.clone();
        move |_| {
            session.sign_out(&drafts);
            navigator().push(Route::Login {});
        }
    };

    rsx! {
        PageHeader {
            PageTitle { "Profile" }
        }
        div { class: "page-body view-sections",
            if let Some(user) = user {
                Card {
                    CardHeader {
                        CardTitle { "Inspector" }
                    }
                    CardContent {
                        div { class: "profile-identity",
                            div { class: "profile-avatar", {user.initials()} }
                            div { class: "profile-identity-text",
                                span { class: "profile-name", "{user.full_name}" }
                                span { class: "profile-username", "{user.username}" }
                            }
                        }
                        p { class: "view-row",
                            strong { class: "view-row-label", "Employee id: " }
                            span { "{user.employee_id}" }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Change password" }
                }
                CardContent {
                    form { onsubmit: handle_change_password,
                        div { class: "auth-fields",
                            Input {
                                label: "New password",
                                input_type: "password",
                                value: new_password(),
                                on_input: move |e: FormEvent| new_password.set(e.value()),
                            }
                            Input {
                                label: "Confirm new password",
                                input_type: "password",
                                value: confirm_password(),
                                on_input: move |e: FormEvent| confirm_password.set(e.value()),
                            }
                            button {
                                r#type: "submit",
                                class: "auth-submit",
                                disabled: changing(),
                                if changing() { "Updating..." } else { "Update Password" }
                            }
                        }
                    }
                }
            }

            Separator {}

            Button {
                variant: ButtonVariant::Secondary,
                onclick: handle_sign_out,
                "Sign Out"
            }
        }
    }
}
