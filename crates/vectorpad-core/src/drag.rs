//! Per-gesture drag state: panning the view or moving the selected element.

use crate::document::Document;
use crate::shapes::{Element, ShapeId};
use crate::snap::snap_to_grid;
use kurbo::{Point, Vec2};

/// Transient state between pointer-down and pointer-up.
#[derive(Debug, Clone)]
pub enum DragState {
    /// Dragging the view.
    Panning {
        /// Device position at pointer-down.
        start: Point,
        /// Pan offset at pointer-down.
        pan_start: Vec2,
    },
    /// Dragging an element.
    Moving {
        /// Element being moved.
        id: ShapeId,
        /// Pointer minus element origin at grab time, in canvas units.
        offset: Vec2,
        /// Document as it was at grab time, for history and cancellation.
        origin: Document,
    },
}

impl DragState {
    /// Begin a pan at a device position.
    pub fn pan(start: Point, pan_start: Vec2) -> Self {
        DragState::Panning { start, pan_start }
    }

    /// Grab `element` at canvas position `pointer`.
    pub fn grab(element: &Element, pointer: Point, document: &Document) -> Self {
        DragState::Moving {
            id: element.id(),
            offset: element.grab_offset(pointer),
            origin: document.clone(),
        }
    }

    /// Pan offset for the pointer at `device`, if this is a pan.
    pub fn pan_offset(&self, device: Point) -> Option<Vec2> {
        match self {
            DragState::Panning { start, pan_start } => Some(*pan_start + (device - *start)),
            DragState::Moving { .. } => None,
        }
    }
}

/// Move element `id` so its origin sits at `snap(pointer - offset)`.
///
/// The element is replaced by a new value; other elements and the paint
/// order are untouched. Returns false if the element is gone or would not
/// move.
pub fn move_element(
    document: &mut Document,
    id: ShapeId,
    pointer: Point,
    offset: Vec2,
    step: f64,
) -> bool {
    let Some(element) = document.get(id) else {
        return false;
    };
    let target = snap_to_grid(pointer - offset, step);
    if element.origin() == target {
        return false;
    }
    let moved = element.with_origin(target);
    document.replace(moved)
}
