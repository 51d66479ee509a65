use crate::api::ApiClient;
use crate::ui::AuthState;
use crate::views::shared::copy_to_clipboard;
use dioxus::prelude::*;

#[component]
pub fn TokenView(auth: AuthState) -> Element {
    let mut api_token = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut minting = use_signal(|| false);

    let mut mint_token = move || {
        if minting() {
            return;
        }
        let Some(bearer) = auth.bearer_token() else {
            error.set(Some("Your session has expired. Please log in again.".to_string()));
            return;
        };
        error.set(None);
        minting.set(true);
        spawn(async move {
            let client = ApiClient::from_env();
            match client.generate_api_token(&bearer).await {
                Ok(token) => {
                    let mut api_token = api_token;
                    api_token.set(token);
                }
                Err(err) => error.set(Some(err.detail_or("Failed to generate API token."))),
            }
            let mut minting = minting;
            minting.set(false);
        });
    };

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "API Token" }
            p { class: "text-muted",
                "Mint a long-lived token for calling the dialogue API from your game's build pipeline."
            }
            div { class: "token-actions",
                button {
                    class: "btn btn-primary",
                    disabled: minting(),
                    onclick: move |_| mint_token(),
                    if minting() { "Generating..." } else { "Generate New API Token" }
                }
            }
            if let Some(message) = error() {
                p { class: "auth-error", "{message}" }
            }
            if !api_token().is_empty() {
                div { class: "token-display", "{api_token}" }
                div { class: "token-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| copy_to_clipboard(api_token()),
                        "Copy"
                    }
                }
                p { class: "text-muted", "Copy it now; it won't be shown again." }
            }
        }
    }
}
