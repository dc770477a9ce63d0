//! Menu options and a wrapping cursor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainMenuOption {
    NewGame,
    LoadGame,
    Quit,
}

impl MainMenuOption {
    pub const ALL: [MainMenuOption; 3] = [
        MainMenuOption::NewGame,
        MainMenuOption::LoadGame,
        MainMenuOption::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainMenuOption::NewGame => "New Game",
            MainMenuOption::LoadGame => "Load Game",
            MainMenuOption::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauseOption {
    Resume,
    SaveGame,
    MainMenu,
}

impl PauseOption {
    pub const ALL: [PauseOption; 3] = [
        PauseOption::Resume,
        PauseOption::SaveGame,
        PauseOption::MainMenu,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PauseOption::Resume => "Resume",
            PauseOption::SaveGame => "Save Game",
            PauseOption::MainMenu => "Main Menu",
        }
    }
}

/// Highlighted row in a list of `len` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuCursor {
    pub index: usize,
}

impl MenuCursor {
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Steps up or down, wrapping at both ends.
    pub fn step(&mut self, forward: bool, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
    }

    /// Keeps the cursor on an existing row after the list shrinks.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = MenuCursor::default();
        cursor.step(false, 3);
        assert_eq!(cursor.index, 2);
        cursor.step(true, 3);
        assert_eq!(cursor.index, 0);
        cursor.step(true, 0);
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn test_cursor_clamp() {
        let mut cursor = MenuCursor { index: 4 };
        cursor.clamp(2);
        assert_eq!(cursor.index, 1);
        cursor.clamp(0);
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MainMenuOption::ALL[1].label(), "Load Game");
        assert_eq!(PauseOption::ALL[2].label(), "Main Menu");
    }
}
