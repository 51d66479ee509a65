use crate::api::ApiClient;
use crate::types::UserIdentity;
use crate::ui::{AuthState, Route};
use crate::views::shared::LabeledInput;
use dioxus::prelude::*;

#[component]
pub fn LoginView(
    auth: AuthState,
    route: Signal<Route>,
    notice: Signal<Option<String>>,
) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let mut submit_login = move || {
        if submitting() {
            return;
        }
        error.set(None);
        submitting.set(true);
        let user = username();
        let pass = password();
        spawn(async move {
            let client = ApiClient::from_env();
            match client.login(&user, &pass).await {
                Ok(token) => {
                    let mut notice = notice;
                    notice.set(None);
                    auth.login(UserIdentity { username: user }, token);
                    let mut route = route;
                    route.set(Route::Dialogue);
                }
                Err(err) => error.set(Some(err.detail_or("Login failed."))),
            }
            let mut submitting = submitting;
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "auth-card",
            h2 { class: "panel-title", "Welcome Back" }
            p { class: "auth-intro", "Sign in to forge dialogue for your games." }
            if let Some(message) = notice() {
                div { class: "info-banner", "{message}" }
            }
            div { class: "auth-form",
                LabeledInput {
                    id: "login-username",
                    label: "Username",
                    input_type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                LabeledInput {
                    id: "login-password",
                    label: "Password",
                    input_type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "auth-error", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    disabled: submitting(),
                    onclick: move |_| submit_login(),
                    if submitting() { "Signing in..." } else { "Login" }
                }
            }
            p { class: "auth-footer",
                "Need an account? "
                button {
                    class: "link-button",
                    onclick: move |_| {
                        let mut route = route;
                        route.set(Route::Signup);
                    },
                    "Sign up"
                }
            }
        }
    }
}
