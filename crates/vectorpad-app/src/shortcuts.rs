//! Keyboard shortcut registry and documentation.

use vectorpad_core::ToolKind;

/// A keyboard shortcut definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, ctrl: bool, shift: bool, description: &'static str) -> Self {
        Self {
            key: key.into(),
            ctrl,
            shift,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(&self.key);
        parts.join("+")
    }
}

fn tool_description(tool: ToolKind) -> &'static str {
    match tool {
        ToolKind::Select => "Select tool",
        ToolKind::Pan => "Hand tool",
        ToolKind::Rectangle => "Rectangle tool",
        ToolKind::Ellipse => "Ellipse tool",
        ToolKind::Line => "Line tool",
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        let tools = [
            ToolKind::Select,
            ToolKind::Pan,
            ToolKind::Rectangle,
            ToolKind::Ellipse,
            ToolKind::Line,
        ];
        let mut shortcuts: Vec<Shortcut> = tools
            .into_iter()
            .map(|tool| {
                let key = tool.shortcut().to_ascii_uppercase().to_string();
                Shortcut::new(key, false, false, tool_description(tool))
            })
            .collect();
        shortcuts.extend([
            Shortcut::new("Space", false, false, "Pan while held"),
            Shortcut::new("Z", true, false, "Undo"),
            Shortcut::new("Z", true, true, "Redo"),
            Shortcut::new("=", true, false, "Zoom in"),
            Shortcut::new("-", true, false, "Zoom out"),
            Shortcut::new("Escape", false, false, "Cancel current action"),
        ]);
        shortcuts
    }

    /// Render the shortcut table.
    pub fn render() -> String {
        let mut out = String::from("=== Keyboard Shortcuts ===\n");
        for shortcut in Self::all() {
            out.push_str(&format!("  {:20} {}\n", shortcut.format(), shortcut.description));
        }
        out
    }
}
