use crate::Axis;

/// The edge (or center) a container or line is pinned to before the engine
/// starts offsetting it along the main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartBorder {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// A normalized anchor point: `(0, 0)` is the bottom-left corner of the
/// parent rectangle, `(1, 1)` the top-right, `(0.5, 0.5)` the center.
///
/// UI kits that distinguish pivot and anchor rectangles can apply the same
/// point to all of them, with a zeroed anchored position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorPoint {
    pub x: f32,
    pub y: f32,
}

impl AnchorPoint {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Maps a starting border to a normalized anchor point.
///
/// Only the coordinate perpendicular to the chosen edge is pinned; the other
/// keeps the caller's default (`Center` keeps both).
pub fn anchor_point(border: StartBorder, default: AnchorPoint) -> AnchorPoint {
    let mut point = default;
    match border {
        StartBorder::Top => point.y = 1.0,
        StartBorder::Bottom => point.y = 0.0,
        StartBorder::Left => point.x = 0.0,
        StartBorder::Right => point.x = 1.0,
        StartBorder::Center => {}
    }
    point
}

/// Default starting border of the content container for a scroll axis.
pub(crate) fn container_border(axis: Axis) -> StartBorder {
    if axis.is_vertical() {
        StartBorder::Top
    } else {
        StartBorder::Left
    }
}

/// Default starting border of each line (the cross-axis counterpart of the
/// container border).
pub(crate) fn line_border(axis: Axis) -> StartBorder {
    if axis.is_vertical() {
        StartBorder::Left
    } else {
        StartBorder::Top
    }
}

/// Resolves a line's anchor point.
///
/// Lines override the free coordinate's default before the border mapping is
/// applied: a left/right-pinned line hangs from the top edge, a top/bottom
/// pinned line from the right edge.
pub(crate) fn line_anchor(border: StartBorder) -> AnchorPoint {
    let default = match border {
        StartBorder::Left | StartBorder::Right => AnchorPoint::new(0.5, 1.0),
        StartBorder::Top | StartBorder::Bottom => AnchorPoint::new(1.0, 0.5),
        StartBorder::Center => AnchorPoint::CENTER,
    };
    anchor_point(border, default)
}
