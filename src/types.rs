use serde::{Deserialize, Serialize};

/// One NPC in the scene. Every field is free text; only the name is
/// required before a request can be composed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub personality: String,
    pub occupation: String,
    pub relationship: String,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        personality: impl Into<String>,
        occupation: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            personality: personality.into(),
            occupation: occupation.into(),
            relationship: relationship.into(),
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn field(&self, field: CharacterField) -> &str {
        match field {
            CharacterField::Name => &self.name,
            CharacterField::Personality => &self.personality,
            CharacterField::Occupation => &self.occupation,
            CharacterField::Relationship => &self.relationship,
        }
    }

    pub fn set_field(&mut self, field: CharacterField, value: String) {
        match field {
            CharacterField::Name => self.name = value,
            CharacterField::Personality => self.personality = value,
            CharacterField::Occupation => self.occupation = value,
            CharacterField::Relationship => self.relationship = value,
        }
    }
}

/// Addressable slot on a [`Character`], used by the editor so one input
/// component can bind any of the four fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterField {
    Name,
    Personality,
    Occupation,
    Relationship,
}

/// Requested length of the generated scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl DialogueLength {
    pub const ALL: [DialogueLength; 3] = [
        DialogueLength::Short,
        DialogueLength::Medium,
        DialogueLength::Long,
    ];

    /// Wire value, also used as the `<option>` value attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            DialogueLength::Short => "Short",
            DialogueLength::Medium => "Medium",
            DialogueLength::Long => "Long",
        }
    }

    /// Human label shown in the length selector.
    pub fn label(self) -> &'static str {
        match self {
            DialogueLength::Short => "Short (2-5 exchanges)",
            DialogueLength::Medium => "Medium (6-10 exchanges)",
            DialogueLength::Long => "Long (11-20+ exchanges)",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "Short" => DialogueLength::Short,
            "Long" => DialogueLength::Long,
            _ => DialogueLength::Medium,
        }
    }
}

/// Body of `POST /generate_dialogue`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogueRequest {
    pub context: String,
    pub characters: Vec<Character>,
    pub dialogue_length: DialogueLength,
}

/// Successful response from `POST /generate_dialogue`. The timestamp is an
/// RFC 3339 string; it stays raw here and is localized at display time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogueResponse {
    pub generated_dialogue: String,
    pub model_used: String,
    pub timestamp: String,
}

/// The signed-in user as persisted in the session jar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_round_trips_through_wire_value() {
        for length in DialogueLength::ALL {
            assert_eq!(DialogueLength::from_value(length.as_str()), length);
        }
    }

    #[test]
    fn unknown_length_value_falls_back_to_medium() {
        assert_eq!(DialogueLength::from_value("Epic"), DialogueLength::Medium);
        assert_eq!(DialogueLength::from_value(""), DialogueLength::Medium);
    }

    #[test]
    fn length_serializes_as_plain_string() {
        let json = serde_json::to_string(&DialogueLength::Short).expect("serialize");
        assert_eq!(json, "\"Short\"");
    }

    #[test]
    fn character_field_accessors_cover_all_slots() {
        let mut character = Character::default();
        character.set_field(CharacterField::Name, "Mira".into());
        character.set_field(CharacterField::Personality, "wry".into());
        character.set_field(CharacterField::Occupation, "smith".into());
        character.set_field(CharacterField::Relationship, "old friend".into());

        assert_eq!(character.field(CharacterField::Name), "Mira");
        assert_eq!(character.field(CharacterField::Personality), "wry");
        assert_eq!(character.field(CharacterField::Occupation), "smith");
        assert_eq!(character.field(CharacterField::Relationship), "old friend");
    }

    #[test]
    fn blank_name_is_not_named() {
        let mut character = Character::default();
        assert!(!character.is_named());
        character.name = "   ".into();
        assert!(!character.is_named());
        character.name = "Elias".into();
        assert!(character.is_named());
    }
}
