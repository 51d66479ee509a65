use crate::types::{DialogueLength, DialogueResponse};
use dioxus::prelude::*;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const INFO_TIME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute padding:zero] [period case:upper]"
);

/// Renders the server's RFC 3339 timestamp in local time. Unparseable
/// input is shown verbatim rather than dropped.
pub fn format_timestamp(raw: &str) -> String {
    let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) else {
        return raw.to_string();
    };
    let mut datetime = parsed;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime
        .format(INFO_TIME_FORMAT)
        .unwrap_or_else(|_| raw.to_string())
}

/// The metadata line shown under a generated script.
pub fn response_info(response: &DialogueResponse) -> String {
    format!(
        "Model: {} | Generated: {}",
        response.model_used,
        format_timestamp(&response.timestamp)
    )
}

/// Copies `text` on platforms with a clipboard.
pub fn copy_to_clipboard(text: String) {
    spawn(async move {
        #[cfg(any(feature = "desktop", feature = "mobile"))]
        {
            if let Ok(mut clipboard) = arboard::Clipboard::new() {
                let _ = clipboard.set_text(text);
            }
        }
    });
}

#[component]
pub fn ContextInput(value: String, oninput: EventHandler<FormEvent>) -> Element {
    rsx! {
        div { class: "field-group",
            label { class: "field-label", for: "game-context", "Game Context" }
            textarea {
                id: "game-context",
                placeholder: "Describe the scene, the stakes, the location...",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

#[component]
pub fn LengthSelector(value: DialogueLength, onchange: EventHandler<DialogueLength>) -> Element {
    rsx! {
        div { class: "field-group",
            label { class: "field-label", for: "dialogue-length", "Dialogue Length" }
            select {
                id: "dialogue-length",
                value: value.as_str(),
                onchange: move |evt: FormEvent| onchange.call(DialogueLength::from_value(&evt.value())),
                for choice in DialogueLength::ALL {
                    option { value: choice.as_str(), "{choice.label()}" }
                }
            }
        }
    }
}

#[component]
pub fn LabeledInput(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "field-group",
            label { class: "field-label", for: id, "{label}" }
            input {
                id: id,
                r#type: input_type,
                placeholder: placeholder,
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
