use crate::auth::use_auth;
use crate::routes::{dashboard_home, Route};
use crate::session::{complete_login, BrowserTokenStore, LoginOutcome};
use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardFooter, CardHeader, Input, ToastOptions,
};
use std::collections::HashMap;

/// Email/password sign-in. Visitors who already have a session are sent to
/// their dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if !auth.is_restored() {
            return;
        }
        let role = auth.current_user.read().as_ref().map(|u| u.role);
        if let Some(role) = role {
            navigator().replace(dashboard_home(role));
        }
    });

    // Held until the stored session has been checked, so a late restore
    // cannot race a fresh sign-in.
    let busy = move || loading() || !auth.is_restored();

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        if loading() || !auth.is_restored() {
            return;
        }
        loading.set(true);
        notice.set(None);
        field_errors.set(HashMap::new());

        let result = server::api::login(email(), password()).await;
        match complete_login(result, &BrowserTokenStore) {
            LoginOutcome::Navigate { user, destination } => {
                auth.set_user(user);
                let target = destination
                    .parse::<Route>()
                    .unwrap_or(Route::Home {});
                navigator().push(target);
            }
            LoginOutcome::Failed {
                notice: message,
                field_errors: errors,
            } => {
                toast.error(message.clone(), ToastOptions::new());
                notice.set(Some(message));
                field_errors.set(errors);
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-brand",
                span { class: "auth-brand-name", "CareDesk" }
                span { class: "auth-brand-tagline", "Patients, clinicians and pharmacy in one place" }
            }
            Card { class: "auth-card",
                CardHeader {
                    title: "Sign In",
                    description: "Use the account issued by your clinic",
                }
                CardContent {
                    if let Some(message) = notice() {
                        div { class: "auth-error", role: "alert", "{message}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            name: "email",
                            label: "Email",
                            input_type: "email",
                            autocomplete: "username",
                            placeholder: "name@clinic.org",
                            value: email(),
                            disabled: busy(),
                            error: field_errors().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            name: "password",
                            label: "Password",
                            input_type: "password",
                            autocomplete: "current-password",
                            placeholder: "Enter your password",
                            value: password(),
                            disabled: busy(),
                            error: field_errors().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            class: "auth-submit",
                            button_type: "submit",
                            loading: loading(),
                            disabled: !auth.is_restored(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
                CardFooter {
                    p { class: "auth-footnote",
                        "Accounts are issued by your clinic administrator."
                    }
                }
            }
        }
    }
}
