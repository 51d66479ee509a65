use crate::api::ApiClient;
use crate::ui::Route;
use crate::views::shared::LabeledInput;
use dioxus::prelude::*;

#[component]
pub fn SignupView(route: Signal<Route>, notice: Signal<Option<String>>) -> Element {
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let mut submit_signup = move || {
        if submitting() {
            return;
        }
        // The only client-side check; everything else is the server's call.
        if password() != confirm() {
            error.set(Some("Passwords do not match.".to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);
        let user = username();
        let mail = email();
        let pass = password();
        spawn(async move {
            let client = ApiClient::from_env();
            match client.signup(&user, &mail, &pass).await {
                Ok(()) => {
                    let mut notice = notice;
                    notice.set(Some("Signup successful! Please log in.".to_string()));
                    let mut route = route;
                    route.set(Route::Login);
                }
                Err(err) => error.set(Some(err.detail_or("Signup failed."))),
            }
            let mut submitting = submitting;
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "auth-card",
            h2 { class: "panel-title", "Create an Account" }
            p { class: "auth-intro", "Save your characters and mint API tokens." }
            div { class: "auth-form",
                LabeledInput {
                    id: "signup-username",
                    label: "Username",
                    input_type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                LabeledInput {
                    id: "signup-email",
                    label: "Email",
                    input_type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                LabeledInput {
                    id: "signup-password",
                    label: "Password",
                    input_type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                LabeledInput {
                    id: "signup-confirm",
                    label: "Confirm Password",
                    input_type: "password",
                    placeholder: "Repeat password",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "auth-error", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    disabled: submitting(),
                    onclick: move |_| submit_signup(),
                    if submitting() { "Creating account..." } else { "Sign Up" }
                }
            }
            p { class: "auth-footer",
                "Already registered? "
                button {
                    class: "link-button",
                    onclick: move |_| {
                        let mut route = route;
                        route.set(Route::Login);
                    },
                    "Log in"
                }
            }
        }
    }
}
