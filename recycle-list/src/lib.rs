//! Headless windowing math for recyclable list and grid renderers.
//!
//! Given a large data set and a fixed-size viewport, a recycling list only keeps views for the
//! items currently on screen. This crate holds the parts of that engine that need no host
//! objects at all:
//!
//! - [`LayoutGeometry`]: resolves a [`LayoutDeclaration`] into one of four [`Alignment`]s plus a
//!   cross-axis count for grids.
//! - [`position_of`]: where item `i` goes, for every layout kind and direction.
//! - [`ViewportBounds`]: the visible window (and overscroll) for a scroll offset.
//! - [`resolve_visible_range`]: the contiguous index range overlapping that window.
//! - [`RecyclePool`]: an arena of views with a free list of parked ones.
//!
//! For the frame-driven engine that creates, binds, recycles and selects views through host
//! traits, see the `recycle-list-adapter` crate.
//!
//! Coordinates are content-local with the y axis pointing up. Along the scroll axis the
//! origin is the content's start edge.
//!
//! ```rust
//! use kurbo::Size;
//! use recycle_list::{LayoutDeclaration, LayoutGeometry, position_of};
//!
//! let layout = LayoutDeclaration::vertical(Size::new(100.0, 50.0)).with_spacing(0.0, 5.0);
//! let geometry = LayoutGeometry::resolve(&layout, Size::new(100.0, 300.0), Default::default())
//!     .unwrap();
//! assert_eq!(geometry.content_extent(10), 545.0);
//!
//! let item = position_of(2, &geometry);
//! assert_eq!(item.bounds.y1, -110.0);
//! ```
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod error;
mod geometry;
mod options;
mod pool;
mod position;
mod range;
mod types;
mod viewport;


pub use error::ConfigError;
pub use geometry::{LayoutGeometry, fit_cross_count};
pub use options::{
    ContentInfo, ItemTemplate, LayoutDeclaration, LayoutType, ResizeMode, ScrollViewInfo, Spacing,
};
pub use pool::{RecyclePool, ViewId};
pub use position::position_of;
pub use range::resolve_visible_range;
pub use types::{
    Alignment, Axis, HorizontalDirection, ItemLayoutInfo, LayoutKind, VerticalDirection,
    VisibleRange,
};
pub use viewport::ViewportBounds;
