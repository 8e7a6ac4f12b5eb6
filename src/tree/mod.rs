//! Directory tree traversal core
//!
//! The pieces fit together like this:
//!
//! - `Decorator`: the four-glyph vocabulary used to draw branches
//! - `sorter`: deterministic child ordering ahead of traversal
//! - `Walker`: the recursive engine; computes each node's prefix and emits
//!   one event per visited entry
//! - `ListenerRegistry`: fan-out of events to registered observers

mod decorator;
mod entry;
mod event;
mod prefix;
mod sorter;
mod walker;

// Re-export public types
pub use decorator::{Decorator, GlyphRole, GlyphSet};
pub use entry::{Entry, EntryKind};
pub use event::{ListenerHandle, ListenerRegistry, TraversalEvent, TreeListener};
pub use prefix::Prefix;
pub use sorter::sort_children;
pub use walker::{CancelToken, WalkReport, Walker};
