/// Scroll-movement direction of a recycler.
///
/// The cross axis (the layout direction *inside* a line) is always the
/// opposite of the scroll axis: a vertical scroll lays its lines out as rows,
/// a horizontal scroll as columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// A width/height pair in the scroll container's coordinate units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along the scroll axis (height for vertical, width for horizontal).
    pub fn main(self, axis: Axis) -> f32 {
        if axis.is_vertical() { self.height } else { self.width }
    }

    /// Extent along the cross axis.
    pub fn cross(self, axis: Axis) -> f32 {
        if axis.is_vertical() { self.width } else { self.height }
    }
}

/// A local position inside the content container.
///
/// Coordinate convention: vertical content moves in `+y` as the user scrolls
/// forward, horizontal content in `-x`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Outer padding applied to the slots inside a line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}
