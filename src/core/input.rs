//! Semantic input events, already decoded from the device layer.

use crate::exploration::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Direction key went down. Also moves menu cursors.
    Press(Direction),
    /// Direction key went up.
    Release(Direction),
    Confirm,
    Cancel,
    Backspace,
    /// Text entry.
    Char(char),
    OpenInventory,
    /// Pointer click on the n-th button of the current screen.
    Select(usize),
}
