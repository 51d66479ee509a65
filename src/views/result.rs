use crate::export::{self, ExportError};
use crate::views::shared::copy_to_clipboard;
use dioxus::prelude::*;
use std::path::PathBuf;

/// What the output pane shows, in strict precedence order: an in-flight
/// submission always wins, then a reported error, then a held script, and
/// only an idle empty pane falls through to the placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultState {
    Loading,
    Error(String),
    Ready {
        dialogue: String,
        info: Option<String>,
    },
    Placeholder,
}

pub fn resolve_result(
    pending: bool,
    error: Option<&str>,
    dialogue: &str,
    info: Option<&str>,
) -> ResultState {
    if pending {
        return ResultState::Loading;
    }
    if let Some(message) = error {
        return ResultState::Error(message.to_string());
    }
    if !dialogue.is_empty() {
        return ResultState::Ready {
            dialogue: dialogue.to_string(),
            info: info.map(|line| line.to_string()),
        };
    }
    ResultState::Placeholder
}

#[component]
pub fn ResultPane(
    pending: bool,
    error: Option<String>,
    dialogue: String,
    info: Option<String>,
    can_export: bool,
) -> Element {
    let state = resolve_result(pending, error.as_deref(), &dialogue, info.as_deref());

    let body = match state {
        ResultState::Loading => rsx! {
            div { class: "loading-overlay",
                div { class: "spinner" }
                p { "Generating dialogue..." }
                p { class: "loading-note", "This might take a moment." }
            }
        },
        ResultState::Error(message) => rsx! {
            div { class: "error-message", "{message}" }
        },
        ResultState::Ready { dialogue, info } => rsx! {
            ReadyPane { dialogue, info, can_export }
        },
        ResultState::Placeholder => rsx! {
            div { class: "placeholder", "Your generated dialogue will appear here." }
        },
    };

    rsx! {
        div { class: "result-display", {body} }
    }
}

#[component]
fn ReadyPane(dialogue: String, info: Option<String>, can_export: bool) -> Element {
    // Lives only as long as this result stays on screen.
    let export_note = use_signal(|| Option::<String>::None);
    let txt_source = dialogue.clone();
    let pdf_source = dialogue.clone();
    let copy_source = dialogue.clone();

    rsx! {
        textarea { class: "result-text", readonly: true, value: "{dialogue}" }
        if let Some(line) = info {
            div { class: "info-message", "{line}" }
        }
        if can_export {
            div { class: "result-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| note_export(export_note, export::write_txt(&txt_source)),
                    "Download TXT"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| note_export(export_note, export::write_pdf(&pdf_source)),
                    "Download PDF"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| copy_to_clipboard(copy_source.clone()),
                    "Copy"
                }
            }
            if let Some(note) = export_note() {
                p { class: "export-note", "{note}" }
            }
        }
    }
}

fn note_export(mut note: Signal<Option<String>>, outcome: Result<PathBuf, ExportError>) {
    match outcome {
        Ok(path) => note.set(Some(format!("Saved to {}", path.display()))),
        Err(err) => {
            tracing::warn!("export failed: {err}");
            note.set(Some(format!("Export failed: {err}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_wins_over_everything() {
        let state = resolve_result(true, Some("boom"), "SCRIPT", Some("Model: x"));
        assert_eq!(state, ResultState::Loading);
        assert_eq!(resolve_result(true, None, "SCRIPT", None), ResultState::Loading);
        assert_eq!(resolve_result(true, None, "", None), ResultState::Loading);
    }

    #[test]
    fn error_wins_over_a_held_script() {
        let state = resolve_result(false, Some("boom"), "SCRIPT", None);
        assert_eq!(state, ResultState::Error("boom".into()));
    }

    #[test]
    fn held_script_shows_with_its_info_line() {
        let state = resolve_result(false, None, "SCRIPT", Some("Model: x"));
        assert_eq!(state, ResultState::Ready {
            dialogue: "SCRIPT".into(),
            info: Some("Model: x".into()),
        });
    }

    #[test]
    fn idle_and_empty_is_the_placeholder() {
        assert_eq!(resolve_result(false, None, "", None), ResultState::Placeholder);
    }
}
