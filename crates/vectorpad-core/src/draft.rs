//! The transient shape drawn between pointer-down and pointer-up.

use crate::shapes::{Element, ElementKind, Ellipse, Line, Rectangle, ShapeStyle};
use crate::snap::{snap, snap_to_grid};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize, Serializer};

/// Sentinel id a renderer can use for the draft; never given to an element.
pub const DRAFT_ID: &str = "draft";

/// A rect or ellipse draft: anchor plus signed extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDraft {
    /// Pointer-down position.
    pub anchor: Point,
    /// Signed width; negative when dragged left of the anchor.
    pub width: f64,
    /// Signed height; negative when dragged above the anchor.
    pub height: f64,
    pub style: ShapeStyle,
}

impl BoxDraft {
    fn new(anchor: Point, style: ShapeStyle) -> Self {
        Self {
            anchor,
            width: 0.0,
            height: 0.0,
            style,
        }
    }

    /// Unsnapped box with non-negative extents.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(
            self.anchor,
            Point::new(self.anchor.x + self.width, self.anchor.y + self.height),
        )
    }

    /// Snapped top-left corner and extents of the committed box.
    ///
    /// Extents are snapped first; a negative drag then measures the snapped
    /// extent back from the anchor.
    pub fn normalized(&self, step: f64) -> (Point, f64, f64) {
        let width = snap(self.width.abs(), step);
        let height = snap(self.height.abs(), step);
        let x = if self.width < 0.0 {
            self.anchor.x - width
        } else {
            self.anchor.x
        };
        let y = if self.height < 0.0 {
            self.anchor.y - height
        } else {
            self.anchor.y
        };
        (Point::new(snap(x, step), snap(y, step)), width, height)
    }
}

/// A line draft: fixed start, free end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDraft {
    pub start: Point,
    pub end: Point,
    pub style: ShapeStyle,
}

/// The single in-progress, uncommitted shape.
///
/// Serializes with `"id": "draft"` alongside the `type` tag so renderers can
/// tell it apart from committed elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Draft {
    Rect(BoxDraft),
    Ellipse(BoxDraft),
    Line(LineDraft),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedDraft<'a> {
    Rect {
        id: &'static str,
        #[serde(flatten)]
        draft: &'a BoxDraft,
    },
    Ellipse {
        id: &'static str,
        #[serde(flatten)]
        draft: &'a BoxDraft,
    },
    Line {
        id: &'static str,
        #[serde(flatten)]
        draft: &'a LineDraft,
    },
}

impl Serialize for Draft {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let id = DRAFT_ID;
        match self {
            Draft::Rect(draft) => TaggedDraft::Rect { id, draft },
            Draft::Ellipse(draft) => TaggedDraft::Ellipse { id, draft },
            Draft::Line(draft) => TaggedDraft::Line { id, draft },
        }
        .serialize(serializer)
    }
}

impl Draft {
    /// Start a zero-extent draft at `at`. Lines drop the fill.
    pub fn begin(kind: ElementKind, at: Point, style: ShapeStyle) -> Self {
        match kind {
            ElementKind::Rect => Draft::Rect(BoxDraft::new(at, style)),
            ElementKind::Ellipse => Draft::Ellipse(BoxDraft::new(at, style)),
            ElementKind::Line => Draft::Line(LineDraft {
                start: at,
                end: at,
                style: style.without_fill(),
            }),
        }
    }

    /// The sentinel id.
    pub fn id(&self) -> &'static str {
        DRAFT_ID
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Draft::Rect(_) => ElementKind::Rect,
            Draft::Ellipse(_) => ElementKind::Ellipse,
            Draft::Line(_) => ElementKind::Line,
        }
    }

    /// Follow the pointer. Positions stay unsnapped while drawing.
    pub fn update(&mut self, pos: Point) {
        match self {
            Draft::Rect(b) | Draft::Ellipse(b) => {
                b.width = pos.x - b.anchor.x;
                b.height = pos.y - b.anchor.y;
            }
            Draft::Line(l) => l.end = pos,
        }
    }

    /// Normalized, unsnapped bounds for preview rendering.
    pub fn preview_bounds(&self) -> Rect {
        match self {
            Draft::Rect(b) | Draft::Ellipse(b) => b.bounds(),
            Draft::Line(l) => Rect::from_points(l.start, l.end),
        }
    }

    /// Normalize and snap into a committed element with a fresh id.
    ///
    /// Degenerate drafts (a click without a drag) still produce an element.
    pub fn commit(&self, step: f64) -> Element {
        match self {
            Draft::Rect(b) => {
                let (position, width, height) = b.normalized(step);
                Rectangle::new(position, width, height)
                    .with_style(b.style.clone())
                    .into()
            }
            Draft::Ellipse(b) => {
                let (position, width, height) = b.normalized(step);
                Ellipse::new(position, width, height)
                    .with_style(b.style.clone())
                    .into()
            }
            Draft::Line(l) => Line::new(snap_to_grid(l.start, step), snap_to_grid(l.end, step))
                .with_style(l.style.clone())
                .into(),
        }
    }
}
