//! Frame-driven recycling list engine for the `recycle-list` crate.
//!
//! `recycle-list` answers "which indexes are visible and where do they go". This crate turns
//! those answers into view lifecycle calls against a host scene:
//!
//! - [`RecycleList`]: the list surface (data, scroll signals, selection, queries)
//! - [`ItemLifecycleManager`]: create, reuse, update and park views per visible index
//! - [`FrameBudgetScheduler`]: spreads binding work across frames, restarting when scrolling
//!   keeps changing the range
//! - [`SelectionController`]: single or multi selection that survives recycling
//!
//! Hosts plug in through [`ItemHost`] and [`ItemView`]; no UI framework is assumed.
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod error;
mod host;
mod lifecycle;
mod list;
mod options;
mod scheduler;
mod selection;

#[cfg(test)]
mod tests;

pub use error::ListError;
pub use host::{ItemHost, ItemView, ScrollEvent};
pub use lifecycle::ItemLifecycleManager;
pub use list::RecycleList;
pub use options::{ListOptions, RenderCallback, SelectCallback};
pub use scheduler::{Batch, BatchOutcome, FrameBudgetScheduler, SchedulerState};
pub use selection::{SelectionController, SelectionEvent, SelectionMode};

pub use recycle_list;
