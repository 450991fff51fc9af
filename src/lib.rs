//! A recyclable line/grid layout engine for virtualized scroll views.
//!
//! Given a scroll offset and a large logical dataset, the engine keeps a
//! small bounded set of live line containers (rows for vertical scrolling,
//! columns for horizontal), each holding a fixed number of item slots, and
//! recycles them as the viewport moves: exactly one line leaves one edge of
//! the window and re-enters the other per crossed line boundary, gets
//! repositioned, and is rebound to the items now under it. Only the lines
//! intersecting (or overscanning) the viewport ever exist as live objects.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - a scroll container that reports its content position
//!   ([`Recycler::set_scroll_position`]) and sizes its scroll range from
//!   [`Recycler::content_size`]
//! - an item template implementing [`ItemBinder`] (clone a visual per slot,
//!   bind/unbind a logical item, report the item's bounding size)
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod anchor;
mod binder;
mod line;
mod options;
mod pool;
mod recycler;
mod types;
mod viewport;
mod window;


pub use anchor::{AnchorPoint, StartBorder, anchor_point};
pub use binder::ItemBinder;
pub use line::Line;
pub use options::{OnLinesUpdated, OnVisualCreated, RecyclerOptions};
pub use recycler::{InitError, Recycler};
pub use types::{Axis, EdgeInsets, Position, Size};
pub use viewport::first_visible_line_index;
