//! The editing controller: one instance per drawing surface.
//!
//! All state transitions happen synchronously inside one command call. Input
//! arrives in device coordinates; everything downstream of
//! [`Camera::to_canvas`] works in canvas space.

use crate::camera::{Camera, wheel_zoom_factor};
use crate::config::EditorConfig;
use crate::document::Document;
use crate::draft::Draft;
use crate::drag::{DragState, move_element};
use crate::history::HistoryStack;
use crate::input::{KeyCommand, KeyEvent};
use crate::shapes::{Element, ShapeId};
use crate::tools::{ToolKind, ToolManager};
use kurbo::Point;
use serde::Serialize;

/// Values for a status readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusReadout {
    /// Cursor position in canvas units, rounded.
    pub x: i64,
    pub y: i64,
    /// Zoom as a whole percentage.
    pub zoom_percent: u32,
    /// Always 1; there is no collaboration.
    pub collaborators: u32,
    /// Static indicator; nothing is synchronized.
    pub synced: bool,
}

/// Everything a renderer reads from the editor.
#[derive(Debug, Clone, Serialize)]
pub struct RenderState {
    pub elements: Document,
    pub selection: Option<ShapeId>,
    pub draft: Option<Draft>,
    pub view: Camera,
    pub cursor: Point,
    pub tool: ToolKind,
}

/// Owns the document, selection, draft, view and history of one surface.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    document: Document,
    selection: Option<ShapeId>,
    draft: Option<Draft>,
    camera: Camera,
    tools: ToolManager,
    drag: Option<DragState>,
    history: HistoryStack,
    cursor: Point,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty document.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            camera: Camera::with_limits(config.min_zoom, config.max_zoom),
            history: HistoryStack::with_limit(config.max_history),
            document: Document::new(),
            selection: None,
            draft: None,
            tools: ToolManager::new(),
            drag: None,
            cursor: Point::ZERO,
            config,
        }
    }

    // Queries

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Elements in paint order.
    pub fn elements(&self) -> &[Element] {
        self.document.elements()
    }

    /// Selected element id. Always refers to an existing element.
    pub fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    /// Selected element.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.and_then(|id| self.document.get(id))
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn view(&self) -> &Camera {
        &self.camera
    }

    /// Last pointer position in canvas space.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Tool chosen by the user.
    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    /// Tool pointer events dispatch to (pan while the modifier is held).
    pub fn effective_tool(&self) -> ToolKind {
        self.tools.effective_tool()
    }

    /// A pan or move drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn status(&self) -> StatusReadout {
        StatusReadout {
            x: self.cursor.x.round() as i64,
            y: self.cursor.y.round() as i64,
            zoom_percent: (self.camera.zoom * 100.0).round() as u32,
            collaborators: 1,
            synced: true,
        }
    }

    /// Snapshot of everything a renderer needs.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            elements: self.document.clone(),
            selection: self.selection,
            draft: self.draft.clone(),
            view: self.camera.clone(),
            cursor: self.cursor,
            tool: self.tools.current_tool,
        }
    }

    // Pointer commands

    /// Pointer pressed at `device`; `origin` is the container's top-left.
    pub fn pointer_down(&mut self, device: Point, origin: Point) {
        let pos = self.camera.to_canvas(device, origin);
        self.cursor = pos;

        if self.drag.is_some() || self.draft.is_some() {
            log::debug!("Pointer down with a gesture in progress; dropping it");
            // A superseded move keeps its geometry, so it still needs an entry.
            if let Some(DragState::Moving { origin: grabbed, .. }) = self.drag.take() {
                self.history.snapshot(&grabbed);
            }
            self.draft = None;
        }

        match self.tools.effective_tool() {
            ToolKind::Pan => {
                self.drag = Some(DragState::pan(device, self.camera.pan));
            }
            ToolKind::Select => {
                let hit = self
                    .document
                    .topmost_hit(pos, self.config.line_hit_tolerance)
                    .and_then(|id| self.document.get(id));
                match hit {
                    Some(element) => {
                        self.selection = Some(element.id());
                        self.drag = Some(DragState::grab(element, pos, &self.document));
                    }
                    None => self.selection = None,
                }
            }
            tool => {
                if let Some(kind) = tool.element_kind() {
                    self.draft = Some(Draft::begin(kind, pos, self.config.default_style.clone()));
                }
            }
        }
    }

    /// Pointer moved. Returns true if the view, document or draft changed.
    pub fn pointer_move(&mut self, device: Point, origin: Point) -> bool {
        let pos = self.camera.to_canvas(device, origin);
        self.cursor = pos;

        match &self.drag {
            Some(drag @ DragState::Panning { .. }) => {
                if let Some(pan) = drag.pan_offset(device) {
                    self.camera.pan = pan;
                }
                return true;
            }
            Some(DragState::Moving { id, offset, .. }) => {
                log::trace!("Move {} to {:?}", id, pos);
                return move_element(&mut self.document, *id, pos, *offset, self.config.grid_step);
            }
            None => {}
        }

        match &mut self.draft {
            Some(draft) => {
                draft.update(pos);
                true
            }
            None => false,
        }
    }

    /// Pointer released. Commits a draft or finishes a move, recording a
    /// history entry for either; per-gesture state is cleared regardless.
    /// Returns true if something was committed.
    pub fn pointer_up(&mut self) -> bool {
        let drag = self.drag.take();
        let draft = self.draft.take();

        match drag {
            Some(DragState::Moving { id, origin, .. }) => {
                log::debug!("Finished move of element {id}");
                self.history.snapshot(&origin);
                return true;
            }
            Some(DragState::Panning { .. }) => return false,
            None => {}
        }

        let Some(draft) = draft else {
            return false;
        };
        let before = self.document.clone();
        let element = draft.commit(self.config.grid_step);
        let id = element.id();
        log::debug!("Committed {:?} {id}", element.kind());
        self.document.push(element);
        self.selection = Some(id);
        self.history.snapshot(&before);
        true
    }

    /// Wheel zoom around the cursor. Returns true if the view changed.
    pub fn wheel(&mut self, delta_y: f64, device: Point, origin: Point) -> bool {
        let Some(factor) =
            wheel_zoom_factor(delta_y, self.config.wheel_zoom_in, self.config.wheel_zoom_out)
        else {
            return false;
        };
        let before = (self.camera.pan, self.camera.zoom);
        self.camera.zoom_at(device, origin, factor);
        before != (self.camera.pan, self.camera.zoom)
    }

    // Keyboard commands

    /// Key pressed. Returns true if it was handled.
    pub fn key_down(&mut self, event: &KeyEvent) -> bool {
        if event.in_text_input {
            return false;
        }
        if event.is_pan_modifier() {
            return self.tools.press_pan_modifier();
        }
        let Some(command) = event.command() else {
            return false;
        };
        match command {
            KeyCommand::SelectTool(tool) => self.set_tool(tool),
            KeyCommand::Undo => self.undo(),
            KeyCommand::Redo => self.redo(),
            KeyCommand::ZoomIn => self.zoom_in(),
            KeyCommand::ZoomOut => self.zoom_out(),
            KeyCommand::Cancel => self.cancel(),
        }
    }

    /// Key released. Releasing the pan modifier aborts an active pan without
    /// committing anything. Returns true if it was handled.
    pub fn key_up(&mut self, event: &KeyEvent) -> bool {
        if !event.is_pan_modifier() || !self.tools.release_pan_modifier() {
            return false;
        }
        if matches!(self.drag, Some(DragState::Panning { .. })) {
            self.drag = None;
        }
        true
    }

    // Editing commands

    /// Switch tools. Any gesture in progress is cancelled. Returns true if
    /// the tool changed.
    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        if tool == self.tools.current_tool {
            return false;
        }
        self.cancel();
        self.tools.set_tool(tool)
    }

    /// Restore the previous document. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(&self.document) else {
            return false;
        };
        log::debug!("Undo ({} entries left)", self.history.past_len());
        self.restore(previous);
        true
    }

    /// Reapply an undone document. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo(&self.document) else {
            return false;
        };
        log::debug!("Redo ({} entries left)", self.history.future_len());
        self.restore(next);
        true
    }

    /// Keyboard zoom in; pan is unchanged. Returns true if the zoom changed.
    pub fn zoom_in(&mut self) -> bool {
        let before = self.camera.zoom;
        self.camera.zoom_by(self.config.key_zoom_step);
        before != self.camera.zoom
    }

    /// Keyboard zoom out; pan is unchanged. Returns true if the zoom changed.
    pub fn zoom_out(&mut self) -> bool {
        let before = self.camera.zoom;
        self.camera.zoom_by(1.0 / self.config.key_zoom_step);
        before != self.camera.zoom
    }

    /// Abort the current gesture: discard a draft, put a moved element back,
    /// return the view to where a pan started. Nothing enters history.
    /// Returns true if there was anything to cancel.
    pub fn cancel(&mut self) -> bool {
        let had_draft = self.draft.take().is_some();
        let drag = self.drag.take();
        match &drag {
            Some(DragState::Moving { origin, .. }) => self.document = origin.clone(),
            Some(DragState::Panning { pan_start, .. }) => self.camera.pan = *pan_start,
            None => {}
        }
        let cancelled = had_draft || drag.is_some();
        if cancelled {
            log::debug!("Cancelled gesture");
        }
        cancelled
    }

    /// Swap in a document from history and drop anything that now dangles.
    fn restore(&mut self, document: Document) {
        self.document = document;
        // A move's grab-time document is stale once history moves underneath it.
        if matches!(self.drag, Some(DragState::Moving { .. })) {
            self.drag = None;
        }
        if let Some(id) = self.selection {
            if !self.document.contains(id) {
                log::debug!("Selection {id} no longer exists; clearing");
                self.selection = None;
            }
        }
    }
}
