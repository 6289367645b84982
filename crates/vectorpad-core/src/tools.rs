//! Tool selection and the temporary pan override.

use crate::shapes::ElementKind;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    /// Hand tool: every drag pans the view.
    Pan,
    Rectangle,
    Ellipse,
    Line,
}

impl ToolKind {
    /// The element a drawing tool produces, or None for select/pan.
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            ToolKind::Rectangle => Some(ElementKind::Rect),
            ToolKind::Ellipse => Some(ElementKind::Ellipse),
            ToolKind::Line => Some(ElementKind::Line),
            ToolKind::Select | ToolKind::Pan => None,
        }
    }

    /// Single-key shortcut for this tool.
    pub fn shortcut(self) -> char {
        match self {
            ToolKind::Select => 'v',
            ToolKind::Pan => 'h',
            ToolKind::Rectangle => 'r',
            ToolKind::Ellipse => 'o',
            ToolKind::Line => 'l',
        }
    }

    /// Tool bound to a shortcut key (case-insensitive).
    pub fn from_shortcut(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'v' => Some(ToolKind::Select),
            'h' => Some(ToolKind::Pan),
            'r' => Some(ToolKind::Rectangle),
            'o' => Some(ToolKind::Ellipse),
            'l' => Some(ToolKind::Line),
            _ => None,
        }
    }
}

/// Holds the persisted tool and whether the pan modifier is held.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Tool chosen by the user.
    pub current_tool: ToolKind,
    /// Pan modifier (spacebar) is down.
    pan_modifier: bool,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool. Returns true if it changed.
    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        if self.current_tool == tool {
            return false;
        }
        log::debug!("Tool {:?} -> {:?}", self.current_tool, tool);
        self.current_tool = tool;
        true
    }

    /// Tool that pointer events are dispatched to.
    pub fn effective_tool(&self) -> ToolKind {
        if self.pan_modifier {
            ToolKind::Pan
        } else {
            self.current_tool
        }
    }

    /// Press the pan modifier. Returns true on the initial press only, so
    /// key auto-repeat is ignored.
    pub fn press_pan_modifier(&mut self) -> bool {
        if self.pan_modifier {
            return false;
        }
        log::debug!("Pan modifier pressed");
        self.pan_modifier = true;
        true
    }

    /// Release the pan modifier. Returns true if it was held.
    pub fn release_pan_modifier(&mut self) -> bool {
        if !self.pan_modifier {
            return false;
        }
        log::debug!("Pan modifier released");
        self.pan_modifier = false;
        true
    }
}
