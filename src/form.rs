//! Editable state behind the dialogue request form.
//!
//! The form owns the scene context, the character roster and the requested
//! length. The roster never goes below one entry while the form is live;
//! removal of the last remaining character is silently refused.

use crate::types::{Character, CharacterField, DialogueLength};

#[derive(Clone, Debug, PartialEq)]
pub struct DialogueForm {
    pub context: String,
    pub characters: Vec<Character>,
    pub dialogue_length: DialogueLength,
}

impl Default for DialogueForm {
    fn default() -> Self {
        Self {
            context: String::new(),
            characters: vec![Character::default()],
            dialogue_length: DialogueLength::default(),
        }
    }
}

impl DialogueForm {
    /// Pre-filled example scene shown on first load so a new user can hit
    /// generate straight away.
    pub fn starter() -> Self {
        Self {
            context: "A lone adventurer encounters a grumpy old wizard guarding a dusty \
                      ancient scroll in a forgotten library."
                .to_string(),
            characters: vec![
                Character::new(
                    "Elias",
                    "Curious and brave",
                    "Adventurer",
                    "Stranger to Balthor",
                ),
                Character::new(
                    "Balthor",
                    "Grumpy and ancient",
                    "Wizard",
                    "Guardian of the scroll",
                ),
            ],
            dialogue_length: DialogueLength::Medium,
        }
    }

    /// Appends a blank character row.
    pub fn add_character(&mut self) {
        self.characters.push(Character::default());
    }

    /// Removes the character at `index`. Refused when it would empty the
    /// roster or when the index is out of range; untouched rows keep their
    /// contents either way.
    pub fn remove_character(&mut self, index: usize) {
        if self.characters.len() > 1 && index < self.characters.len() {
            self.characters.remove(index);
        }
    }

    /// Writes one field of the character at `index`. Out-of-range indices
    /// are ignored.
    pub fn update_character(&mut self, index: usize, field: CharacterField, value: String) {
        if let Some(character) = self.characters.get_mut(index) {
            character.set_field(field, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_starts_with_one_blank_character() {
        let form = DialogueForm::default();
        assert_eq!(form.characters.len(), 1);
        assert_eq!(form.characters[0], Character::default());
        assert_eq!(form.dialogue_length, DialogueLength::Medium);
    }

    #[test]
    fn add_appends_blank_row_and_keeps_existing_rows() {
        let mut form = DialogueForm::starter();
        let before = form.characters.clone();

        form.add_character();

        assert_eq!(form.characters.len(), before.len() + 1);
        assert_eq!(&form.characters[..before.len()], &before[..]);
        assert_eq!(form.characters.last(), Some(&Character::default()));
    }

    #[test]
    fn remove_refuses_to_empty_the_roster() {
        let mut form = DialogueForm::default();
        form.remove_character(0);
        assert_eq!(form.characters.len(), 1);
    }

    #[test]
    fn remove_drops_only_the_addressed_row() {
        let mut form = DialogueForm::starter();
        let kept = form.characters[1].clone();

        form.remove_character(0);

        assert_eq!(form.characters, vec![kept]);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut form = DialogueForm::starter();
        let before = form.clone();
        form.remove_character(99);
        assert_eq!(form, before);
    }

    #[test]
    fn update_touches_only_the_addressed_field() {
        let mut form = DialogueForm::starter();
        let untouched = form.characters[1].clone();

        form.update_character(0, CharacterField::Personality, "Wary but kind".into());

        assert_eq!(form.characters[0].personality, "Wary but kind");
        assert_eq!(form.characters[0].name, "Elias");
        assert_eq!(form.characters[1], untouched);
    }

    #[test]
    fn update_out_of_range_is_a_no_op() {
        let mut form = DialogueForm::starter();
        let before = form.clone();
        form.update_character(5, CharacterField::Name, "Ghost".into());
        assert_eq!(form, before);
    }
}
