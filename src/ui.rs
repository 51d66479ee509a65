use crate::session::{self, Session, SessionJar};
use crate::theme::THEME_CSS;
use crate::types::UserIdentity;
use crate::views::dialogue::Capabilities;
use crate::views::{DialogueView, LandingView, LoginView, SignupView, TokenView};
use dioxus::prelude::*;

const FORGE_CSS: Asset = asset!("/assets/forge.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Dialogue,
    Login,
    Signup,
    Token,
}

impl Route {
    /// Pages that need a signed-in session.
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Token)
    }
}

/// The page actually rendered for a requested route. Protected pages fall
/// back to the login screen while signed out.
pub fn resolve_route(requested: Route, authenticated: bool) -> Route {
    if requested.requires_auth() && !authenticated {
        Route::Login
    } else {
        requested
    }
}

// ============================================
// Auth State
// ============================================

#[derive(Clone, Copy)]
pub struct AuthState {
    session: Signal<Session>,
}

impl PartialEq for AuthState {
    fn eq(&self, _: &Self) -> bool {
        false
    }
}

fn use_auth_state() -> AuthState {
    AuthState {
        session: use_signal(session::restore),
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn username(&self) -> Option<String> {
        self.session
            .with(|s| s.user.as_ref().map(|u| u.username.clone()))
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.session.with(|s| s.token.clone())
    }

    /// Flips the in-memory session immediately; the jar write is best
    /// effort and only matters for later launches.
    pub fn login(&self, user: UserIdentity, token: String) {
        let jar = SessionJar::default_location();
        if let Err(err) = session::persist(&jar, &user, &token) {
            tracing::warn!("failed to persist session: {err}");
        }
        let mut session = self.session;
        session.set(Session {
            user: Some(user),
            token: Some(token),
        });
    }

    pub fn logout(&self) {
        let jar = SessionJar::default_location();
        if let Err(err) = session::discard(&jar) {
            tracing::warn!("failed to clear stored session: {err}");
        }
        let mut session = self.session;
        session.set(Session::default());
    }
}

// ============================================
// App Shell
// ============================================

#[component]
pub fn App() -> Element {
    let auth = use_auth_state();
    let route = use_signal(|| Route::Home);
    let signup_notice = use_signal(|| Option::<String>::None);

    rsx! {
        ThemeStyles {}
        div { class: "app-shell",
            NavBar { auth, route }
            main { class: "app-main",
                PageView { auth, route, signup_notice }
            }
        }
    }
}

#[component]
fn ThemeStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: FORGE_CSS }
        style { dangerous_inner_html: "{THEME_CSS}" }
    }
}

#[component]
fn PageView(
    auth: AuthState,
    route: Signal<Route>,
    signup_notice: Signal<Option<String>>,
) -> Element {
    let resolved = resolve_route(route(), auth.is_authenticated());

    let page = match resolved {
        Route::Home => rsx! {
            LandingView { auth, route }
        },
        Route::Dialogue => rsx! {
            DialogueView { capabilities: Capabilities::full() }
        },
        Route::Login => rsx! {
            LoginView { auth, route, notice: signup_notice }
        },
        Route::Signup => rsx! {
            SignupView { route, notice: signup_notice }
        },
        Route::Token => rsx! {
            TokenView { auth }
        },
    };

    rsx! {
        {page}
    }
}

#[component]
fn NavBar(auth: AuthState, route: Signal<Route>) -> Element {
    let authenticated = auth.is_authenticated();
    let username = auth.username();

    rsx! {
        nav { class: "navbar",
            button {
                class: "nav-brand",
                onclick: move |_| {
                    let mut route = route;
                    route.set(Route::Home);
                },
                "DIALOGUE FORGE"
            }
            div { class: "nav-links",
                NavLink { route, target: Route::Home, label: "Home" }
                NavLink { route, target: Route::Dialogue, label: "Generator" }
                if authenticated {
                    NavLink { route, target: Route::Token, label: "API Token" }
                }
            }
            div { class: "nav-actions",
                if authenticated {
                    if let Some(name) = username {
                        span { class: "nav-user", "Welcome, {name}" }
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            auth.logout();
                            let mut route = route;
                            route.set(Route::Home);
                        },
                        "Logout"
                    }
                } else {
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            let mut route = route;
                            route.set(Route::Login);
                        },
                        "Login"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let mut route = route;
                            route.set(Route::Signup);
                        },
                        "Sign Up"
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(route: Signal<Route>, target: Route, label: &'static str) -> Element {
    let mut route = route;
    let class = if route() == target {
        "nav-link active"
    } else {
        "nav-link"
    };
    rsx! {
        button { class: class, onclick: move |_| route.set(target), "{label}" }
    }
}
