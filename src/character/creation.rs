//! Character creation form state.

use super::types::PlayerClass;
use crate::core::constants::MAX_NAME_LENGTH;

/// Name entry and class pick, reset every time the creation screen opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationForm {
    pub name_input: String,
    pub selected_class: Option<PlayerClass>,
    pub validation_error: Option<String>,
}

impl CreationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Appends a printable character while the name is under the limit.
    pub fn handle_char_input(&mut self, c: char) {
        if c.is_control() || self.name_input.chars().count() >= MAX_NAME_LENGTH {
            return;
        }
        self.name_input.push(c);
        self.validation_error = None;
    }

    pub fn handle_backspace(&mut self) {
        self.name_input.pop();
        self.validation_error = None;
    }

    pub fn select_class(&mut self, index: usize) {
        if let Some(class) = PlayerClass::ALL.get(index) {
            self.selected_class = Some(*class);
            self.validation_error = None;
        }
    }

    /// Moves the class cursor, wrapping. Starts at the first class.
    pub fn cycle_class(&mut self, forward: bool) {
        let len = PlayerClass::ALL.len();
        let next = match self.selected_index() {
            None => 0,
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
        };
        self.select_class(next);
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_class
            .and_then(|class| PlayerClass::ALL.iter().position(|c| *c == class))
    }

    pub fn get_name(&self) -> String {
        self.name_input.trim().to_string()
    }

    pub fn is_ready(&self) -> bool {
        !self.get_name().is_empty() && self.selected_class.is_some()
    }

    /// Returns the chosen name and class, or records why it cannot confirm.
    pub fn confirm(&mut self) -> Option<(String, PlayerClass)> {
        match (self.get_name(), self.selected_class) {
            (name, Some(class)) if !name.is_empty() => Some((name, class)),
            (name, _) if name.is_empty() => {
                self.validation_error = Some("Enter a name first".to_string());
                None
            }
            _ => {
                self.validation_error = Some("Choose a class first".to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_limit() {
        let mut form = CreationForm::new();
        for c in "abcdefghijklmnopqrstuvwxyz".chars() {
            form.handle_char_input(c);
        }
        assert_eq!(form.name_input.chars().count(), MAX_NAME_LENGTH);
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut form = CreationForm::new();
        form.handle_char_input('\n');
        form.handle_char_input('\t');
        assert!(form.name_input.is_empty());
    }

    #[test]
    fn test_backspace() {
        let mut form = CreationForm::new();
        form.handle_char_input('A');
        form.handle_char_input('b');
        form.handle_backspace();
        assert_eq!(form.name_input, "A");
        form.handle_backspace();
        form.handle_backspace();
        assert!(form.name_input.is_empty());
    }

    #[test]
    fn test_cycle_class_wraps() {
        let mut form = CreationForm::new();
        form.cycle_class(true);
        assert_eq!(form.selected_class, Some(PlayerClass::Warrior));
        form.cycle_class(false);
        assert_eq!(form.selected_class, Some(PlayerClass::Archer));
        form.cycle_class(true);
        assert_eq!(form.selected_class, Some(PlayerClass::Warrior));
    }

    #[test]
    fn test_confirm_requires_name_and_class() {
        let mut form = CreationForm::new();
        assert!(form.confirm().is_none());
        assert!(form.validation_error.is_some());

        form.handle_char_input('Z');
        assert!(form.confirm().is_none());
        assert_eq!(form.validation_error.as_deref(), Some("Choose a class first"));

        form.select_class(1);
        assert!(form.is_ready());
        assert_eq!(form.confirm(), Some(("Z".to_string(), PlayerClass::Mage)));
    }

    #[test]
    fn test_whitespace_name_not_ready() {
        let mut form = CreationForm::new();
        form.handle_char_input(' ');
        form.select_class(0);
        assert!(!form.is_ready());
    }
}
