//! Keyboard and pointer events from the windowing layer.

use crate::tools::ToolKind;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event in device coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
    Wheel { position: Point, delta_y: f64 },
}

/// A key press or release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Logical key, e.g. `"z"`, `"="`, `" "`, `"Escape"`.
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Focus is inside a text-editing control.
    #[serde(default)]
    pub in_text_input: bool,
}

/// Editor command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    SelectTool(ToolKind),
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
    Cancel,
}

impl KeyEvent {
    /// Key event without modifiers.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            in_text_input: false,
        }
    }

    /// Key event with modifiers.
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            ..Self::new(key)
        }
    }

    /// Mark the event as coming from a text-editing control.
    pub fn in_text_input(mut self) -> Self {
        self.in_text_input = true;
        self
    }

    /// Check if this is the pan modifier (spacebar).
    pub fn is_pan_modifier(&self) -> bool {
        self.key == " " || self.key.eq_ignore_ascii_case("space")
    }

    /// Command bound to this key press. Nothing fires inside text controls.
    pub fn command(&self) -> Option<KeyCommand> {
        if self.in_text_input {
            return None;
        }
        let key = self.key.to_ascii_lowercase();
        if self.modifiers.command() {
            return match key.as_str() {
                "z" if self.modifiers.shift => Some(KeyCommand::Redo),
                "z" => Some(KeyCommand::Undo),
                "=" | "+" => Some(KeyCommand::ZoomIn),
                "-" => Some(KeyCommand::ZoomOut),
                _ => None,
            };
        }
        if key == "escape" {
            return Some(KeyCommand::Cancel);
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ToolKind::from_shortcut(c).map(KeyCommand::SelectTool),
            _ => None,
        }
    }
}
