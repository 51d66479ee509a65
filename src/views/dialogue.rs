use crate::api::{ApiClient, ApiError};
use crate::compose::{self, PayloadMode, UploadError, UploadedDocument};
use crate::form::DialogueForm;
use crate::types::{CharacterField, DialogueLength};
use crate::views::result::ResultPane;
use crate::views::shared::{ContextInput, LengthSelector, response_info};
use dioxus::html::HasFileData;
use dioxus::prelude::*;

/// Which optional surfaces the workflow exposes. The dialogue page itself
/// is the same either way; capabilities only add the JSON upload mode and
/// the export actions on top of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub json_upload: bool,
    pub export: bool,
}

impl Capabilities {
    pub const fn full() -> Self {
        Self {
            json_upload: true,
            export: true,
        }
    }
}

#[component]
pub fn DialogueView(capabilities: Capabilities) -> Element {
    let state = use_generation_state();
    let pending = state.pending();
    let mode = state.mode();

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "NPC Dialogue Generator" }
            if capabilities.json_upload {
                ModeToggle { state }
            }
            div { class: "dialogue-grid",
                div { class: "form-column",
                    if matches!(mode, PayloadMode::JsonFile) {
                        UploadBox { state }
                    } else {
                        ContextInput {
                            value: state.context(),
                            oninput: move |evt: FormEvent| state.set_context(evt.value()),
                        }
                        CharacterEditor { form: state.form }
                        LengthSelector {
                            value: state.dialogue_length(),
                            onchange: move |length| state.set_dialogue_length(length),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: pending,
                        onclick: move |_| state.submit(),
                        if pending { "Generating..." } else { "Generate Dialogue" }
                    }
                }
                div { class: "output-column",
                    ResultPane {
                        pending,
                        error: state.error(),
                        dialogue: state.dialogue(),
                        info: state.info(),
                        can_export: capabilities.export,
                    }
                }
            }
        }
    }
}

#[component]
fn ModeToggle(state: GenerationState) -> Element {
    let mode = state.mode();

    rsx! {
        div { class: "mode-toggle",
            button {
                class: format_args!(
                    "mode-option {}",
                    if matches!(mode, PayloadMode::Form) { "active" } else { "" }
                ),
                r#type: "button",
                onclick: move |_| state.set_mode(PayloadMode::Form),
                "Form Fields"
            }
            button {
                class: format_args!(
                    "mode-option {}",
                    if matches!(mode, PayloadMode::JsonFile) { "active" } else { "" }
                ),
                r#type: "button",
                onclick: move |_| state.set_mode(PayloadMode::JsonFile),
                "Upload JSON"
            }
        }
    }
}

#[component]
fn CharacterEditor(form: Signal<DialogueForm>) -> Element {
    let mut form = form;
    let characters = form.with(|f| f.characters.clone());
    let removable = characters.len() > 1;

    rsx! {
        div { class: "field-group",
            span { class: "field-label", "Characters" }
            div { class: "character-list",
                for index in 0..characters.len() {
                    div { key: "{index}", class: "character-card",
                        h3 { "Character {index + 1}" }
                        if removable {
                            button {
                                class: "character-remove",
                                title: "Remove character",
                                onclick: move |_| form.with_mut(|f| f.remove_character(index)),
                                "✕"
                            }
                        }
                        div { class: "character-fields",
                            CharacterFieldInput {
                                form,
                                index,
                                field: CharacterField::Name,
                                placeholder: "Name",
                            }
                            CharacterFieldInput {
                                form,
                                index,
                                field: CharacterField::Personality,
                                placeholder: "Personality (e.g. Grumpy)",
                            }
                            CharacterFieldInput {
                                form,
                                index,
                                field: CharacterField::Occupation,
                                placeholder: "Occupation (e.g. Wizard)",
                            }
                            CharacterFieldInput {
                                form,
                                index,
                                field: CharacterField::Relationship,
                                placeholder: "Relationship to others",
                            }
                        }
                    }
                }
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| form.with_mut(|f| f.add_character()),
                "+ Add Another Character"
            }
        }
    }
}

#[component]
fn CharacterFieldInput(
    form: Signal<DialogueForm>,
    index: usize,
    field: CharacterField,
    placeholder: &'static str,
) -> Element {
    let mut form = form;
    let value = form.with(|f| {
        f.characters
            .get(index)
            .map(|character| character.field(field).to_string())
            .unwrap_or_default()
    });

    rsx! {
        input {
            r#type: "text",
            placeholder: placeholder,
            value: "{value}",
            oninput: move |evt| form.with_mut(|f| f.update_character(index, field, evt.value())),
        }
    }
}

#[component]
fn UploadBox(state: GenerationState) -> Element {
    let file_name = state.file_name();

    rsx! {
        div { class: "json-upload",
            label { class: "json-upload-label", for: "json-file-input",
                if file_name.is_empty() {
                    "Click to upload a .json request file"
                } else {
                    "File uploaded: {file_name}"
                }
            }
            input {
                id: "json-file-input",
                class: "file-input",
                r#type: "file",
                accept: ".json",
                onchange: move |evt| handle_file_selection(state, evt),
            }
            p { class: "text-muted", "The file is sent as the request body exactly as written." }
        }
    }
}

// ============================================
// State
// ============================================

#[derive(Clone, Copy)]
pub struct GenerationState {
    form: Signal<DialogueForm>,
    mode: Signal<PayloadMode>,
    document: Signal<Option<UploadedDocument>>,
    file_name: Signal<String>,
    dialogue: Signal<String>,
    info: Signal<Option<String>>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
}

impl PartialEq for GenerationState {
    fn eq(&self, _: &Self) -> bool {
        false
    }
}

fn use_generation_state() -> GenerationState {
    GenerationState {
        form: use_signal(DialogueForm::starter),
        mode: use_signal(PayloadMode::default),
        document: use_signal(|| None),
        file_name: use_signal(String::new),
        dialogue: use_signal(String::new),
        info: use_signal(|| None),
        error: use_signal(|| None),
        pending: use_signal(|| false),
    }
}

impl GenerationState {
    fn mode(&self) -> PayloadMode {
        (self.mode)()
    }
    fn set_mode(&self, mode: PayloadMode) {
        let mut current = self.mode;
        current.set(mode);
    }
    fn context(&self) -> String {
        self.form.with(|f| f.context.clone())
    }
    fn set_context(&self, value: String) {
        let mut form = self.form;
        form.with_mut(|f| f.context = value);
    }
    fn dialogue_length(&self) -> DialogueLength {
        self.form.with(|f| f.dialogue_length)
    }
    fn set_dialogue_length(&self, length: DialogueLength) {
        let mut form = self.form;
        form.with_mut(|f| f.dialogue_length = length);
    }
    fn file_name(&self) -> String {
        (self.file_name)()
    }
    fn set_file_name(&self, name: String) {
        let mut file_name = self.file_name;
        file_name.set(name);
    }
    fn dialogue(&self) -> String {
        (self.dialogue)()
    }
    fn info(&self) -> Option<String> {
        (self.info)()
    }
    fn error(&self) -> Option<String> {
        (self.error)()
    }
    fn pending(&self) -> bool {
        (self.pending)()
    }

    /// Wrong file type: the stale name and document go too, so the box
    /// reads as empty again.
    fn reject_upload(&self, message: String) {
        let mut error = self.error;
        error.set(Some(message));
        let mut file_name = self.file_name;
        file_name.set(String::new());
        let mut document = self.document;
        document.set(None);
    }

    /// Right file type, unusable contents: the name stays visible so the
    /// user can see which file failed.
    fn fail_upload(&self, message: String) {
        let mut error = self.error;
        error.set(Some(message));
        let mut document = self.document;
        document.set(None);
    }

    fn accept_upload(&self, document: UploadedDocument) {
        let mut held = self.document;
        held.set(Some(document));
        let mut error = self.error;
        error.set(None);
    }

    fn submit(&self) {
        if self.pending() {
            return;
        }

        let mut error = self.error;
        let mut dialogue = self.dialogue;
        let mut info = self.info;
        let mut pending = self.pending;

        error.set(None);
        dialogue.set(String::new());
        info.set(None);
        pending.set(true);

        let mode = self.mode();
        let document = (self.document)();
        let payload = match self
            .form
            .with(|form| compose::build(mode, form, document.as_ref()))
        {
            Ok(payload) => payload,
            Err(err) => {
                error.set(Some(err.to_string()));
                pending.set(false);
                return;
            }
        };

        let state = *self;
        spawn(async move {
            let client = ApiClient::from_env();
            match client.generate_dialogue(&payload).await {
                Ok(response) => {
                    let mut info = state.info;
                    info.set(Some(response_info(&response)));
                    let mut dialogue = state.dialogue;
                    dialogue.set(response.generated_dialogue);
                }
                Err(err) => {
                    let mut error = state.error;
                    error.set(Some(failure_message(&err)));
                }
            }
            let mut pending = state.pending;
            pending.set(false);
        });
    }
}

// ============================================
// Helpers
// ============================================

/// Banner shown for any failed generation, whatever the cause.
pub fn failure_message(err: &ApiError) -> String {
    format!("Failed to generate dialogue: {err}. Please ensure the dialogue API server is running.")
}

fn handle_file_selection(state: GenerationState, evt: FormEvent) {
    let Some(engine) = evt.files() else {
        return;
    };
    let Some(name) = engine.files().into_iter().next() else {
        return;
    };

    if let Err(err) = compose::screen_upload(&name) {
        state.reject_upload(err.to_string());
        return;
    }

    state.set_file_name(name.clone());
    spawn(async move {
        match engine.read_file_to_string(&name).await {
            Some(contents) => match compose::parse_upload(&name, &contents) {
                Ok(document) => state.accept_upload(document),
                Err(err) => state.fail_upload(err.to_string()),
            },
            None => state.fail_upload(UploadError::Unreadable.to_string()),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_detail_is_wrapped_in_the_banner() {
        let err = ApiError::Rejected {
            status: 400,
            detail: Some("context too short".into()),
        };
        assert_eq!(
            failure_message(&err),
            "Failed to generate dialogue: context too short. \
             Please ensure the dialogue API server is running."
        );
    }

    #[test]
    fn bare_rejection_reports_the_status() {
        let err = ApiError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(
            failure_message(&err),
            "Failed to generate dialogue: HTTP error! status: 500. \
             Please ensure the dialogue API server is running."
        );
    }
}
