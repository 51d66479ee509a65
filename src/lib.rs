//! Dialogue Forge - a desktop front-end for an NPC dialogue generation API.
//!
//! The crate is split into a UI layer built with Dioxus (`ui`, `views`) and a
//! set of plain modules that hold everything testable without a renderer:
//! form state (`form`), request composition (`compose`), the HTTP client
//! (`api`), durable sessions (`session`) and script export (`export`).

pub mod api;
pub mod compose;
pub mod export;
pub mod form;
pub mod session;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
