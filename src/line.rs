use crate::options::OnVisualCreated;
use crate::{AnchorPoint, Axis, EdgeInsets, ItemBinder, Position};

/// One row (vertical scroll) or column (horizontal scroll) of item slots.
///
/// A line is created once, then cycles between the working set and the free
/// pool until the engine tears it down. Slots keep the size they were
/// instantiated with; the line only ever moves along the main axis and lays
/// its slots out along the cross axis.
pub struct Line<V> {
    number: u32,
    slots: Vec<V>,
    position: Position,
    anchor: AnchorPoint,
    axis: Axis,
    slot_spacing: f32,
    padding: EdgeInsets,
    slot_cross_extent: f32,
    is_new: bool,
    active: bool,
    destroyed: bool,
}

impl<V> Line<V> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new<B: ItemBinder<Visual = V>>(
        number: u32,
        slot_count: usize,
        binder: &B,
        axis: Axis,
        slot_spacing: f32,
        padding: EdgeInsets,
        anchor: AnchorPoint,
        slot_cross_extent: f32,
        on_visual_created: Option<&OnVisualCreated<V>>,
    ) -> Self {
        let mut slots = Vec::with_capacity(slot_count);
        for slot in 0..slot_count {
            let mut visual = binder.instantiate(number, slot);
            if let Some(cb) = on_visual_created {
                cb(&mut visual);
            }
            slots.push(visual);
        }
        Self {
            number,
            slots,
            position: Position::default(),
            anchor,
            axis,
            slot_spacing,
            padding,
            slot_cross_extent,
            is_new: true,
            active: true,
            destroyed: false,
        }
    }

    /// 1-based creation-order tag, for diagnostics.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn slots(&self) -> &[V] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&V> {
        self.slots.get(index)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Local position inside the content container.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn anchor(&self) -> AnchorPoint {
        self.anchor
    }

    /// Freshly acquired; slot contents are stale until the next bind pass.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Cross-axis offset of a slot inside the line: leading padding plus the
    /// extent (and spacing) of every slot before it.
    pub fn slot_cross_offset(&self, slot: usize) -> f32 {
        let leading = if self.axis.is_vertical() {
            self.padding.left
        } else {
            self.padding.top
        };
        leading + slot as f32 * (self.slot_cross_extent + self.slot_spacing)
    }

    /// Positions the line along the main axis, leaving the cross-axis
    /// coordinate untouched. Vertical content hangs downward (`-offset`),
    /// horizontal content extends rightward (`+offset`).
    pub(crate) fn set_position(&mut self, offset: f32) {
        if self.axis.is_vertical() {
            self.position.y = -offset;
        } else {
            self.position.x = offset;
        }
    }

    /// Binds one slot to a logical item, or to nothing (`None` renders an
    /// empty placeholder). An out-of-range index is a non-fatal error: it is
    /// logged and the line is left untouched.
    pub(crate) fn bind_slot<B: ItemBinder<Visual = V>>(
        &mut self,
        binder: &B,
        item: Option<&B::Item>,
        index: usize,
    ) {
        if index >= self.slots.len() {
            rerror!(
                index,
                slot_count = self.slots.len(),
                line = self.number,
                "bind_slot: slot index out of range"
            );
            return;
        }
        debug_assert!(!self.destroyed, "bind_slot on a destroyed line");
        binder.bind(&mut self.slots[index], item);
        self.is_new = false;
    }

    pub(crate) fn mark_new(&mut self) {
        self.is_new = true;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        if !self.destroyed {
            self.active = active;
        }
    }

    /// Tears the line down, dropping its visuals. Idempotent; a destroyed
    /// line ignores any further `set_active` calls.
    pub(crate) fn destroy(&mut self) {
        if !self.destroyed {
            self.destroyed = true;
            self.active = false;
            self.slots.clear();
        }
    }
}

impl<V> core::fmt::Debug for Line<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Line")
            .field("number", &self.number)
            .field("slot_count", &self.slots.len())
            .field("position", &self.position)
            .field("is_new", &self.is_new)
            .field("active", &self.active)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
