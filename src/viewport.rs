use crate::{Axis, Position};

/// Converts a content-container offset into the index of the first visible
/// line.
///
/// Offsets at or below zero are nudged back by one unit before the integer
/// division so the zero crossing does not report the same line twice while
/// the container hovers around the origin (the duplicate-line flash this
/// engine exists to avoid). The division truncates toward zero: a full line
/// extent must pass before the index steps, in either direction.
pub fn first_visible_line_index(offset: f32, line_extent: f32) -> i32 {
    let adjusted = if offset <= 0.0 { offset - 1.0 } else { offset };
    (adjusted / line_extent) as i32
}

/// Scroll offset along the main axis, in the scroll-growth direction.
///
/// Horizontal content grows in the opposite coordinate direction from
/// vertical content, so the sign is flipped before any index math.
pub(crate) fn axis_scroll_offset(axis: Axis, position: Position) -> f32 {
    if axis.is_vertical() {
        position.y
    } else {
        -position.x
    }
}

/// Total number of lines the dataset spans, including the one leading
/// off-screen buffer line.
///
/// A trailing partial line is only counted when the dataset does not divide
/// evenly into full lines.
pub(crate) fn total_line_count(item_count: usize, slots_per_line: usize) -> usize {
    let mut lines = item_count / slots_per_line + 2;
    if (lines - 2) * slots_per_line == item_count {
        lines -= 1;
    }
    lines
}

/// Number of live lines the working set holds: every line that can intersect
/// the viewport, plus a three-line overscan so lines enter from off screen.
pub(crate) fn visible_line_count(viewport_extent: f32, line_extent: f32) -> usize {
    (viewport_extent / line_extent).ceil().max(0.0) as usize + 3
}
