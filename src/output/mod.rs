//! Listener implementations for consuming traversal events
//!
//! Two consumers ship with the crate:
//!
//! - `TreePrinter`: streams `prefix + name` lines to the console as events
//!   arrive, O(depth) memory
//! - `Collector`: buffers every event into an owned record, required for
//!   JSON output

mod collect;
mod printer;

pub use collect::{Collector, EntryRecord, print_json};
pub use printer::{PrinterConfig, TreePrinter};
