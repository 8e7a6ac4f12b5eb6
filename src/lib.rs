//! Espalier - a tree-style directory renderer with pluggable branch glyphs
//!
//! The core is a pre-order depth-first walk that computes, for every visited
//! entry, a prefix of connector glyphs describing its position in the tree
//! (the visual structure produced by the classic `tree` command). Visited
//! entries are pushed to registered listeners; bundled listeners render to
//! the console or collect serializable records.

pub mod error;
pub mod output;
pub mod tree;

pub use error::{DecoratorError, ListingFailure, TraversalError};
pub use output::{Collector, EntryRecord, PrinterConfig, TreePrinter, print_json};
pub use tree::{
    CancelToken, Decorator, Entry, EntryKind, GlyphRole, GlyphSet, ListenerHandle,
    ListenerRegistry, Prefix, TraversalEvent, TreeListener, WalkReport, Walker,
};
