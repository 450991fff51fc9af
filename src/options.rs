use std::sync::Arc;

use crate::{Axis, EdgeInsets, Size, StartBorder};

/// A callback fired once per visual instance cloned from the template, right
/// after instantiation (e.g. for analytics or extra per-item wiring).
pub type OnVisualCreated<V> = Arc<dyn Fn(&mut V) + Send + Sync>;

/// A callback fired after every rebind + visibility pass.
pub type OnLinesUpdated = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::Recycler`].
///
/// Geometry-affecting fields are read when [`crate::Recycler::initialize`]
/// runs and stay fixed for the session; changing them requires another
/// `initialize`. Callbacks take effect immediately.
pub struct RecyclerOptions<V> {
    /// Scroll-movement axis. Lines lay their slots out along the other axis.
    pub axis: Axis,
    /// Number of item slots in every line. Must be at least 1.
    pub slots_per_line: usize,
    /// Space between consecutive lines, along the scroll axis.
    pub line_spacing: f32,
    /// Space between slots inside a line, along the cross axis.
    pub slot_spacing: f32,
    /// Outer padding applied to the slots inside each line.
    pub padding: EdgeInsets,
    /// Overrides the template's measured size for every slot.
    pub fixed_size: Option<Size>,
    /// Starting border of the content container. `None` derives it from the
    /// axis (top for vertical, left for horizontal).
    pub start_border: Option<StartBorder>,
    /// Size of the viewport the content container scrolls inside.
    pub viewport: Size,

    pub on_visual_created: Option<OnVisualCreated<V>>,
    pub on_lines_updated: Option<OnLinesUpdated>,
}

impl<V> RecyclerOptions<V> {
    /// Creates options for a vertical recycler: 5 slots per line, 10-unit
    /// spacing both ways, no padding.
    pub fn new(viewport: Size) -> Self {
        Self {
            axis: Axis::Vertical,
            slots_per_line: 5,
            line_spacing: 10.0,
            slot_spacing: 10.0,
            padding: EdgeInsets::ZERO,
            fixed_size: None,
            start_border: None,
            viewport,
            on_visual_created: None,
            on_lines_updated: None,
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_slots_per_line(mut self, slots_per_line: usize) -> Self {
        self.slots_per_line = slots_per_line;
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_slot_spacing(mut self, slot_spacing: f32) -> Self {
        self.slot_spacing = slot_spacing;
        self
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Gives every slot a fixed size instead of measuring the template.
    pub fn with_fixed_size(mut self, fixed_size: Option<Size>) -> Self {
        self.fixed_size = fixed_size;
        self
    }

    pub fn with_start_border(mut self, start_border: Option<StartBorder>) -> Self {
        self.start_border = start_border;
        self
    }

    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_on_visual_created(
        mut self,
        f: Option<impl Fn(&mut V) + Send + Sync + 'static>,
    ) -> Self {
        self.on_visual_created = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_lines_updated(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_lines_updated = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl<V> Clone for RecyclerOptions<V> {
    fn clone(&self) -> Self {
        Self {
            axis: self.axis,
            slots_per_line: self.slots_per_line,
            line_spacing: self.line_spacing,
            slot_spacing: self.slot_spacing,
            padding: self.padding,
            fixed_size: self.fixed_size,
            start_border: self.start_border,
            viewport: self.viewport,
            on_visual_created: self.on_visual_created.clone(),
            on_lines_updated: self.on_lines_updated.clone(),
        }
    }
}

impl<V> core::fmt::Debug for RecyclerOptions<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerOptions")
            .field("axis", &self.axis)
            .field("slots_per_line", &self.slots_per_line)
            .field("line_spacing", &self.line_spacing)
            .field("slot_spacing", &self.slot_spacing)
            .field("padding", &self.padding)
            .field("fixed_size", &self.fixed_size)
            .field("start_border", &self.start_border)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
