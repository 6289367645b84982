//! VectorPad Core Library
//!
//! Platform-agnostic editing engine for the VectorPad drawing surface:
//! view transform, hit testing, shape drafting, tool modes, drag-to-move
//! and undo/redo. Rendering and windowing live outside this crate.

pub mod camera;
pub mod config;
pub mod document;
pub mod drag;
pub mod draft;
pub mod editor;
pub mod history;
pub mod input;
pub mod shapes;
pub mod snap;
pub mod tools;

pub use camera::{Camera, MAX_ZOOM, MIN_ZOOM, wheel_zoom_factor};
pub use config::{ConfigError, EditorConfig};
pub use document::Document;
pub use drag::{DragState, move_element};
pub use draft::{BoxDraft, DRAFT_ID, Draft, LineDraft};
pub use editor::{Editor, RenderState, StatusReadout};
pub use history::HistoryStack;
pub use input::{KeyCommand, KeyEvent, Modifiers, PointerEvent};
pub use shapes::{
    Element, ElementKind, LINE_HIT_TOLERANCE, SerializableColor, ShapeId, ShapeStyle, hit,
};
pub use snap::{GRID_SIZE, snap, snap_to_grid};
pub use tools::{ToolKind, ToolManager};
