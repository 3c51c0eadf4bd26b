//! Highlight and tooltip placement in viewport coordinates.

use serde::{Deserialize, Serialize};

/// Padding around the highlighted anchor.
pub const HIGHLIGHT_PADDING: f64 = 10.0;
/// Fixed tooltip width.
pub const TOOLTIP_WIDTH: f64 = 300.0;
/// Vertical room reserved above the anchor when the tooltip sits on top.
pub const TOOLTIP_RISE: f64 = 180.0;
/// Gap between the anchor and a tooltip placed below it.
pub const TOOLTIP_DROP: f64 = 30.0;
/// Minimum distance kept from every viewport edge.
pub const EDGE_MARGIN: f64 = 20.0;

/// An on-screen bounding box, as reported by the anchor resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Rect { top, left, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Grow in every direction by `pad`.
    pub fn inflate(&self, pad: f64) -> Rect {
        Rect {
            top: self.top - pad,
            left: self.left - pad,
            width: self.width + 2.0 * pad,
            height: self.height + 2.0 * pad,
        }
    }

    /// Drop-point hit test, used when a dragged option is released over a
    /// target zone.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Which side of the anchor the tooltip prefers. The final position is
/// still clamped to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipSide {
    Top,
    Bottom,
}

/// The spotlight region: the anchor plus padding.
pub fn highlight_rect(target: Rect) -> Rect {
    target.inflate(HIGHLIGHT_PADDING)
}

/// Tooltip top-left. Horizontally centred on the anchor, clamped so the
/// whole card stays at least [`EDGE_MARGIN`] from both side edges.
pub fn tooltip_position(target: Rect, side: TooltipSide, viewport: Viewport) -> (f64, f64) {
    let top = match side {
        TooltipSide::Top    => (target.top - TOOLTIP_RISE).max(EDGE_MARGIN),
        TooltipSide::Bottom => target.bottom() + TOOLTIP_DROP,
    };

    let centred = target.center_x() - TOOLTIP_WIDTH / 2.0;
    let max_left = viewport.width - TOOLTIP_WIDTH - EDGE_MARGIN;
    let left = centred.min(max_left).max(EDGE_MARGIN);

    (top, left)
}
