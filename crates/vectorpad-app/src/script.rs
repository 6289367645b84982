//! Recorded input scripts and their replay through an [`Editor`].
//!
//! A script is a JSON object holding the container origin and a list of
//! events in device coordinates:
//!
//! ```json
//! {
//!   "origin": { "x": 0, "y": 0 },
//!   "events": [
//!     { "event": "tool", "tool": "rectangle" },
//!     { "event": "pointer_down", "x": 50, "y": 50 },
//!     { "event": "pointer_move", "x": 10, "y": 10 },
//!     { "event": "pointer_up" }
//!   ]
//! }
//! ```

use kurbo::Point;
use serde::{Deserialize, Serialize};
use vectorpad_core::{Editor, KeyEvent, Modifiers, ToolKind};

/// A sequence of input events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Top-left of the drawing surface in device coordinates.
    #[serde(default = "origin_zero")]
    pub origin: Point,
    pub events: Vec<ScriptEvent>,
}

fn origin_zero() -> Point {
    Point::ZERO
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    Wheel { delta_y: f64, x: f64, y: f64 },
    KeyDown(ScriptKey),
    KeyUp(ScriptKey),
    Tool { tool: ToolKind },
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
    Cancel,
}

/// A key event as recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptKey {
    pub key: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub in_text_input: bool,
}

impl From<&ScriptKey> for KeyEvent {
    fn from(key: &ScriptKey) -> Self {
        KeyEvent {
            key: key.key.clone(),
            modifiers: Modifiers {
                shift: key.shift,
                ctrl: key.ctrl,
                alt: key.alt,
                meta: key.meta,
            },
            in_text_input: key.in_text_input,
        }
    }
}

impl Script {
    /// Parse a script from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Feed every event to `editor` in order. Returns how many events
    /// changed editor state.
    pub fn replay(&self, editor: &mut Editor) -> usize {
        let mut changed = 0;
        for (index, event) in self.events.iter().enumerate() {
            let handled = self.apply(editor, event);
            log::trace!("Event {index}: {event:?} -> {handled}");
            if handled {
                changed += 1;
            }
        }
        log::debug!("Replayed {} events ({changed} changed state)", self.events.len());
        changed
    }

    fn apply(&self, editor: &mut Editor, event: &ScriptEvent) -> bool {
        match event {
            ScriptEvent::PointerDown { x, y } => {
                editor.pointer_down(Point::new(*x, *y), self.origin);
                true
            }
            ScriptEvent::PointerMove { x, y } => {
                editor.pointer_move(Point::new(*x, *y), self.origin)
            }
            ScriptEvent::PointerUp => editor.pointer_up(),
            ScriptEvent::Wheel { delta_y, x, y } => {
                editor.wheel(*delta_y, Point::new(*x, *y), self.origin)
            }
            ScriptEvent::KeyDown(key) => editor.key_down(&key.into()),
            ScriptEvent::KeyUp(key) => editor.key_up(&key.into()),
            ScriptEvent::Tool { tool } => editor.set_tool(*tool),
            ScriptEvent::Undo => editor.undo(),
            ScriptEvent::Redo => editor.redo(),
            ScriptEvent::ZoomIn => editor.zoom_in(),
            ScriptEvent::ZoomOut => editor.zoom_out(),
            ScriptEvent::Cancel => editor.cancel(),
        }
    }
}
