//! Customizable keybindings for shape editing.
//!
//! Key actions only ever apply to the selected shape. Bindings are part of
//! the editor configuration and can be changed in the config file.

use serde::{Deserialize, Serialize};

use crate::input::KeyCode;

/// An editing action triggered by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Remove the selected shape
    Delete,
    /// Prompt for a new label on the selected shape
    EditLabel,
    /// Swap the selected shape between rectangle and polygon
    Convert,
    /// Append the pointer position as a vertex of the selected polygon
    AppendVertex,
}

/// Keybinding configuration for the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Hotkey for deleting the selected shape
    pub delete: KeyCode,
    /// Hotkeys for editing the label (both enter keys by default)
    pub edit_label: Vec<KeyCode>,
    /// Hotkey for rectangle/polygon conversion
    pub convert: KeyCode,
    /// Hotkey for appending a polygon vertex
    pub append_vertex: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            delete: KeyCode::Delete,
            edit_label: vec![KeyCode::Enter, KeyCode::Return],
            convert: KeyCode::C,
            append_vertex: KeyCode::V,
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the action that corresponds to a key press, if any.
    pub fn action_for_key(&self, key: KeyCode) -> Option<EditAction> {
        if key == self.delete {
            Some(EditAction::Delete)
        } else if self.edit_label.contains(&key) {
            Some(EditAction::EditLabel)
        } else if key == self.convert {
            Some(EditAction::Convert)
        } else if key == self.append_vertex {
            Some(EditAction::AppendVertex)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_actions() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.action_for_key(KeyCode::Delete), Some(EditAction::Delete));
        assert_eq!(bindings.action_for_key(KeyCode::Enter), Some(EditAction::EditLabel));
        assert_eq!(bindings.action_for_key(KeyCode::Return), Some(EditAction::EditLabel));
        assert_eq!(bindings.action_for_key(KeyCode::C), Some(EditAction::Convert));
        assert_eq!(bindings.action_for_key(KeyCode::V), Some(EditAction::AppendVertex));
        assert_eq!(bindings.action_for_key(KeyCode::X), None);
    }

    #[test]
    fn test_rebinding() {
        let bindings = KeyBindings {
            convert: KeyCode::T,
            ..KeyBindings::default()
        };
        assert_eq!(bindings.action_for_key(KeyCode::T), Some(EditAction::Convert));
        assert_eq!(bindings.action_for_key(KeyCode::C), None);
    }

    #[test]
    fn test_serde_partial() {
        let bindings: KeyBindings = serde_json::from_str(r#"{"convert": "K"}"#).unwrap();
        assert_eq!(bindings.convert, KeyCode::K);
        assert_eq!(bindings.delete, KeyCode::Delete);
        assert_eq!(bindings.edit_label, vec![KeyCode::Enter, KeyCode::Return]);
    }
}
