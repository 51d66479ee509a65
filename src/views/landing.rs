use crate::ui::{AuthState, Route};
use dioxus::prelude::*;

#[component]
pub fn LandingView(auth: AuthState, route: Signal<Route>) -> Element {
    let authenticated = auth.is_authenticated();
    let mut route = route;

    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Forge natural dialogue for your game's characters" }
            p { class: "hero-subtitle",
                "Describe a scene, sketch the cast, and get a ready-to-use script back in \
                 seconds. Fill in the form or bring your own JSON."
            }
            div { class: "hero-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| route.set(Route::Dialogue),
                    "Open the Generator"
                }
                if !authenticated {
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| route.set(Route::Signup),
                        "Create an Account"
                    }
                }
            }
        }
    }
}
