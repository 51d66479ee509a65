//! Turns form or uploaded-file state into a `/generate_dialogue` payload.
//!
//! Validation happens here, after the submission is already marked pending,
//! so the messages double as the user-facing error text. In form mode the
//! first failed check wins: context, then roster, then character names. In
//! file mode the only check is that a parsed document is actually held.

use crate::form::DialogueForm;
use crate::types::DialogueRequest;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Which source the next submission draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PayloadMode {
    #[default]
    Form,
    JsonFile,
}

/// A successfully screened and parsed upload, kept verbatim so the server
/// sees exactly what the file contained.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedDocument {
    pub file_name: String,
    pub value: Value,
}

/// Request body ready for the API client. Serializes as the inner value
/// with no wrapper.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Form(DialogueRequest),
    Document(Value),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Please provide a game context.")]
    MissingContext,
    #[error("Please add at least one character.")]
    NoCharacters,
    #[error("Please provide a name for all characters.")]
    UnnamedCharacter,
    #[error("Please upload a valid JSON file.")]
    MissingDocument,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Invalid file type. Please upload a JSON file.")]
    NotJson,
    #[error("Invalid JSON format. Please upload a valid JSON file.")]
    Malformed,
    #[error("Could not read the selected file.")]
    Unreadable,
}

/// Builds the payload for one submission attempt.
pub fn build(
    mode: PayloadMode,
    form: &DialogueForm,
    document: Option<&UploadedDocument>,
) -> Result<Payload, ComposeError> {
    match mode {
        PayloadMode::Form => build_from_form(form).map(Payload::Form),
        PayloadMode::JsonFile => document
            .map(|doc| Payload::Document(doc.value.clone()))
            .ok_or(ComposeError::MissingDocument),
    }
}

fn build_from_form(form: &DialogueForm) -> Result<DialogueRequest, ComposeError> {
    if form.context.trim().is_empty() {
        return Err(ComposeError::MissingContext);
    }
    if form.characters.is_empty() {
        return Err(ComposeError::NoCharacters);
    }
    if !form.characters.iter().all(|c| c.is_named()) {
        return Err(ComposeError::UnnamedCharacter);
    }
    Ok(DialogueRequest {
        context: form.context.clone(),
        characters: form.characters.clone(),
        dialogue_length: form.dialogue_length,
    })
}

/// Screens a selected file by name before its contents are read. Only the
/// `.json` extension is accepted (compared case-insensitively).
pub fn screen_upload(file_name: &str) -> Result<(), UploadError> {
    let is_json = Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json { Ok(()) } else { Err(UploadError::NotJson) }
}

/// Parses the contents of a screened file into a held document.
pub fn parse_upload(file_name: &str, contents: &str) -> Result<UploadedDocument, UploadError> {
    let value = serde_json::from_str(contents).map_err(|_| UploadError::Malformed)?;
    Ok(UploadedDocument {
        file_name: file_name.to_string(),
        value,
    })
}
