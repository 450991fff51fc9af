use crate::Size;

/// The contract between the engine and an item template.
///
/// The engine never renders anything itself: it asks the binder to clone the
/// template into per-slot visual instances once, then to apply (or clear)
/// display state as slots are recycled onto different logical items.
///
/// A binder is cheap state: typically the template instance plus whatever
/// the visuals need to draw themselves. One binder drives one `Recycler`.
pub trait ItemBinder {
    /// The logical data record shown in a slot.
    type Item;
    /// The visual instance occupying a slot.
    type Visual;

    /// Clones the template into a fresh visual for the given line and slot.
    ///
    /// Called only when a brand-new line is constructed; recycled lines keep
    /// their visuals and are rebound instead.
    fn instantiate(&self, line_number: u32, slot: usize) -> Self::Visual;

    /// Applies display state for `item`, or clears it when `None` (an empty
    /// placeholder slot past either end of the dataset).
    fn bind(&self, visual: &mut Self::Visual, item: Option<&Self::Item>);

    /// Bounding size of one visual, used to derive line extents.
    ///
    /// Ignored when the options carry a fixed-size override.
    fn measure(&self) -> Size;
}
