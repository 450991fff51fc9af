use crate::anchor::{anchor_point, container_border, line_anchor, line_border};
use crate::pool::{LineId, LinePool};
use crate::viewport;
use crate::window::WorkingSet;
use crate::{AnchorPoint, ItemBinder, Line, Position, RecyclerOptions, Size};

/// Configuration errors detected by [`Recycler::initialize`].
///
/// These are non-fatal: the failed call leaves the engine exactly as it was
/// (a previous session, if any, stays intact).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InitError {
    #[error("slots per line must be at least 1")]
    ZeroSlotsPerLine,
    #[error("line extent must be positive, got {extent}")]
    NonPositiveLineExtent { extent: f32 },
}

/// A recycling scroll engine.
///
/// The engine keeps a bounded working set of [`Line`]s (the lines that
/// intersect the viewport, plus a small overscan) and recycles them as the
/// scroll container moves: on every boundary crossing exactly one line leaves
/// the trailing edge of the window and one enters the leading edge, gets
/// repositioned, and is rebound to the logical items now under it. Lines that
/// did not change identity are never rebound.
///
/// It is headless: an external scroll container drives it through
/// [`Recycler::set_scroll_position`] and reads [`Recycler::content_size`] to
/// size its scroll range; an [`ItemBinder`] owns what a slot actually is.
///
/// All mutation happens synchronously inside `initialize` and
/// `set_scroll_position`; both take `&mut self`, so the engine cannot be
/// re-entered while an update is in progress.
pub struct Recycler<B: ItemBinder> {
    options: RecyclerOptions<B::Visual>,
    template: Option<B>,
    items: Vec<B::Item>,

    /// Every line created this session, in creation order.
    lines: Vec<Line<B::Visual>>,
    pool: LinePool,
    window: WorkingSet,

    scroll_position: Position,
    first_visible: i32,
    prev_first_visible: i32,

    element_extent: f32,
    element_extent_with_spacing: f32,
    slot_cross_extent: f32,
    visible_lines: usize,
    total_lines: usize,
    content_size: Size,
    container_anchor: AnchorPoint,
    line_anchor: AnchorPoint,

    created: u32,
    recycled: u64,
}

impl<B: ItemBinder> Recycler<B> {
    pub fn new(options: RecyclerOptions<B::Visual>) -> Self {
        rdebug!(
            slots_per_line = options.slots_per_line,
            vertical = options.axis.is_vertical(),
            "Recycler::new"
        );
        Self {
            options,
            template: None,
            items: Vec::new(),
            lines: Vec::new(),
            pool: LinePool::default(),
            window: WorkingSet::default(),
            scroll_position: Position::default(),
            first_visible: 0,
            prev_first_visible: 0,
            element_extent: 0.0,
            element_extent_with_spacing: 0.0,
            slot_cross_extent: 0.0,
            visible_lines: 0,
            total_lines: 0,
            content_size: Size::default(),
            container_anchor: AnchorPoint::CENTER,
            line_anchor: AnchorPoint::CENTER,
            created: 0,
            recycled: 0,
        }
    }

    /// Starts (or restarts) a session over a dataset.
    ///
    /// Recomputes every derived scalar from the template's measured size (or
    /// the fixed-size override) and the current options, then builds the
    /// working set. With `reuse_lines = true` and an existing working set of
    /// the right size, the previous session's lines are kept: the creation
    /// order is replayed into the window and every line is force-marked new
    /// so its content refreshes without destroying a single visual.
    /// Otherwise all previous lines are destroyed and fresh ones are built.
    ///
    /// The first-visible bookkeeping is reset and recomputed from the
    /// currently stored scroll position, so initializing mid-scroll binds the
    /// region actually on screen.
    pub fn initialize(
        &mut self,
        template: B,
        items: Vec<B::Item>,
        reuse_lines: bool,
    ) -> Result<(), InitError> {
        let axis = self.options.axis;
        if self.options.slots_per_line == 0 {
            rerror!("initialize: slots per line must be at least 1");
            return Err(InitError::ZeroSlotsPerLine);
        }
        let item_size = self.options.fixed_size.unwrap_or_else(|| template.measure());
        let extent = item_size.main(axis) + self.options.line_spacing;
        if extent <= 0.0 {
            rerror!(extent, "initialize: non-positive line extent");
            return Err(InitError::NonPositiveLineExtent { extent });
        }

        self.element_extent = item_size.main(axis);
        self.element_extent_with_spacing = extent;
        self.slot_cross_extent = item_size.cross(axis);
        self.total_lines = viewport::total_line_count(items.len(), self.options.slots_per_line);
        self.visible_lines =
            viewport::visible_line_count(self.options.viewport.main(axis), extent);

        let content_main = (self.total_lines - 1) as f32 * extent;
        let content_cross = self.options.viewport.cross(axis);
        self.content_size = if axis.is_vertical() {
            Size::new(content_cross, content_main)
        } else {
            Size::new(content_main, content_cross)
        };
        let border = self
            .options
            .start_border
            .unwrap_or_else(|| container_border(axis));
        self.container_anchor = anchor_point(border, AnchorPoint::CENTER);
        self.line_anchor = line_anchor(line_border(axis));

        self.items = items;
        self.prev_first_visible = 0;
        self.first_visible = 0;
        self.recompute_first_visible();

        // Lines survive re-initialization only when the window shape is
        // unchanged; a resized window always rebuilds from scratch.
        let reuse = reuse_lines
            && !self.window.is_empty()
            && self.window.len() == self.visible_lines
            && self.lines.len() == self.visible_lines;
        if reuse {
            // Every line is in the window between events, so replaying the
            // creation order cannot orphan a pooled line.
            debug_assert!(self.pool.is_empty());
            self.window.reset_to_creation_order();
            for line in &mut self.lines {
                line.mark_new();
            }
        } else {
            if reuse_lines && !self.window.is_empty() {
                rwarn!(
                    window = self.window.len(),
                    visible_lines = self.visible_lines,
                    "reuse requested but the window shape changed; rebuilding lines"
                );
            }
            self.clear_lines();
            for _ in 0..self.visible_lines {
                let id = self.acquire_line(&template);
                self.window.push(id);
            }
        }
        rdebug!(
            items = self.items.len(),
            total_lines = self.total_lines,
            visible_lines = self.visible_lines,
            reused = reuse,
            "initialize"
        );

        self.reposition_lines();
        self.refresh_contents(&template);
        self.template = Some(template);
        Ok(())
    }

    /// Scroll-offset-changed entry point.
    ///
    /// Call this with the content container's local position whenever it
    /// moves. Recomputes the first visible line index; when it is unchanged
    /// this is a no-op, otherwise one line is recycled per crossed boundary
    /// (fast flicks cross many at once), the window is repositioned, and the
    /// lines that changed identity are rebound.
    pub fn set_scroll_position(&mut self, position: Position) {
        self.scroll_position = position;
        let Some(template) = self.template.take() else {
            return;
        };
        self.recompute_first_visible();
        if self.first_visible != self.prev_first_visible {
            self.handle_index_change(&template);
        }
        self.template = Some(template);
    }

    /// Destroys every line and forgets the dataset, template, and derived
    /// layout scalars. The stored scroll position is kept; the next
    /// [`Recycler::initialize`] picks it up.
    pub fn clear(&mut self) {
        rdebug!(lines = self.lines.len(), "clear");
        self.clear_lines();
        self.template = None;
        self.items.clear();
        self.prev_first_visible = 0;
        self.first_visible = 0;
        self.element_extent = 0.0;
        self.element_extent_with_spacing = 0.0;
        self.slot_cross_extent = 0.0;
        self.visible_lines = 0;
        self.total_lines = 0;
        self.content_size = Size::default();
    }

    pub fn options(&self) -> &RecyclerOptions<B::Visual> {
        &self.options
    }

    /// Replaces the options. Geometry-affecting fields are read at the next
    /// [`Recycler::initialize`]; callbacks take effect immediately.
    pub fn set_options(&mut self, options: RecyclerOptions<B::Visual>) {
        self.options = options;
    }

    /// Clones the current options, applies `f`, then stores the result.
    pub fn update_options(&mut self, f: impl FnOnce(&mut RecyclerOptions<B::Visual>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn is_initialized(&self) -> bool {
        self.template.is_some()
    }

    pub fn scroll_position(&self) -> Position {
        self.scroll_position
    }

    /// Axis-corrected index of the first visible line (can be negative while
    /// the container hovers before the origin).
    pub fn first_visible_line(&self) -> i32 {
        self.first_visible
    }

    /// Lines held live in the working set.
    pub fn visible_line_count(&self) -> usize {
        self.visible_lines
    }

    /// Lines the dataset spans, including the leading off-screen buffer line.
    pub fn total_line_count(&self) -> usize {
        self.total_lines
    }

    /// Main-axis size of one item.
    pub fn element_extent(&self) -> f32 {
        self.element_extent
    }

    /// Main-axis stride from one line to the next.
    pub fn element_extent_with_spacing(&self) -> f32 {
        self.element_extent_with_spacing
    }

    /// Size the scroll container should give its content.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Resolved anchor of the content container.
    pub fn container_anchor(&self) -> AnchorPoint {
        self.container_anchor
    }

    pub fn items(&self) -> &[B::Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total lines constructed this session (diagnostics).
    pub fn lines_created(&self) -> u32 {
        self.created
    }

    /// Total single-boundary rotations performed this session (diagnostics).
    pub fn lines_recycled(&self) -> u64 {
        self.recycled
    }

    /// Lines currently parked in the free pool (zero between events: every
    /// eviction is followed by an acquisition in the same pass).
    pub fn pooled_lines(&self) -> usize {
        self.pool.len()
    }

    /// The line at a window position, 0 being the leading edge.
    pub fn line(&self, position: usize) -> Option<&Line<B::Visual>> {
        (position < self.window.len()).then(|| &self.lines[self.window.get(position)])
    }

    /// Visits every working-set line in window order, without allocating.
    pub fn for_each_line(&self, mut f: impl FnMut(&Line<B::Visual>)) {
        for i in 0..self.window.len() {
            f(&self.lines[self.window.get(i)]);
        }
    }

    /// Visits every slot visual in window order (line by line), without
    /// allocating. This is the introspection surface for diagnostics and
    /// tests; the visuals stay owned by the engine.
    pub fn for_each_visual(&self, mut f: impl FnMut(&B::Visual)) {
        self.for_each_line(|line| {
            for visual in line.slots() {
                f(visual);
            }
        });
    }

    fn recompute_first_visible(&mut self) {
        let offset = viewport::axis_scroll_offset(self.options.axis, self.scroll_position);
        self.first_visible =
            viewport::first_visible_line_index(offset, self.element_extent_with_spacing);
    }

    fn handle_index_change(&mut self, template: &B) {
        let delta = self.first_visible - self.prev_first_visible;
        rtrace!(
            from = self.prev_first_visible,
            to = self.first_visible,
            "boundary crossing"
        );
        // One eviction and one acquisition per crossed boundary. The acquire
        // immediately after the release reuses the very line just evicted, so
        // a single-step rotation moves one line from one edge to the other.
        for _ in 0..delta.unsigned_abs() {
            if delta > 0 {
                let evicted = self.window.leading();
                self.release_line(evicted);
                let id = self.acquire_line(template);
                self.window.push_trailing(id);
            } else {
                let evicted = self.window.trailing();
                self.release_line(evicted);
                let id = self.acquire_line(template);
                self.window.push_leading(id);
            }
            self.recycled += 1;
        }
        self.reposition_lines();
        self.refresh_contents(template);
        self.prev_first_visible = self.first_visible;
    }

    fn reposition_lines(&mut self) {
        let extent = self.element_extent_with_spacing;
        for i in 0..self.window.len() {
            // -1: one line of pre-roll outside the viewport.
            let line_index = i as i64 + self.first_visible as i64 - 1;
            let id = self.window.get(i);
            self.lines[id].set_position(line_index as f32 * extent);
        }
    }

    /// Rebinds the lines that changed identity, refreshes visibility at both
    /// dataset boundaries, and notifies observers.
    fn refresh_contents(&mut self, template: &B) {
        let slots = self.options.slots_per_line;
        let base = (self.first_visible as i64 - 1) * slots as i64;
        for i in 0..self.window.len() {
            let id = self.window.get(i);
            if !self.lines[id].is_new() {
                continue;
            }
            for j in 0..slots {
                let item_index = base + (i * slots + j) as i64;
                let item = if item_index < 0 || item_index as usize >= self.items.len() {
                    None
                } else {
                    Some(&self.items[item_index as usize])
                };
                self.lines[id].bind_slot(template, item, j);
            }
        }
        self.update_visibility();
        if let Some(cb) = &self.options.on_lines_updated {
            cb();
        }
    }

    /// A line is visible only while its logical line index lies inside the
    /// dataset: lines rotated before line 0 or past the last content line are
    /// hidden (still owned by the working set, not pooled). A trailing
    /// partial line counts as content and stays visible.
    fn update_visibility(&mut self) {
        let content_lines = self.total_lines as i64 - 1;
        for i in 0..self.window.len() {
            let logical = self.first_visible as i64 - 1 + i as i64;
            let id = self.window.get(i);
            self.lines[id].set_active(logical >= 0 && logical < content_lines);
        }
    }

    fn acquire_line(&mut self, template: &B) -> LineId {
        let id = match self.pool.pop() {
            Some(id) => id,
            None => self.create_line(template),
        };
        let line = &mut self.lines[id];
        line.set_active(true);
        line.mark_new();
        id
    }

    fn release_line(&mut self, id: LineId) {
        debug_assert!(!self.pool.contains(id));
        self.lines[id].set_active(false);
        self.pool.push(id);
    }

    fn create_line(&mut self, template: &B) -> LineId {
        self.created += 1;
        rtrace!(number = self.created, "creating line");
        let line = Line::new(
            self.created,
            self.options.slots_per_line,
            template,
            self.options.axis,
            self.options.slot_spacing,
            self.options.padding,
            self.line_anchor,
            self.slot_cross_extent,
            self.options.on_visual_created.as_ref(),
        );
        self.lines.push(line);
        self.lines.len() - 1
    }

    fn clear_lines(&mut self) {
        for line in &mut self.lines {
            line.destroy();
        }
        self.lines.clear();
        self.pool.clear();
        self.window.clear();
        self.created = 0;
    }
}

impl<B: ItemBinder> core::fmt::Debug for Recycler<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Recycler")
            .field("initialized", &self.template.is_some())
            .field("items", &self.items.len())
            .field("lines", &self.lines.len())
            .field("first_visible", &self.first_visible)
            .field("visible_lines", &self.visible_lines)
            .field("total_lines", &self.total_lines)
            .field("created", &self.created)
            .field("recycled", &self.recycled)
            .finish_non_exhaustive()
    }
}
