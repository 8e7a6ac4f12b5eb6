//! Buffered record collection and JSON output

use std::io;
use std::path::PathBuf;

use serde::Serialize;

use crate::tree::{EntryKind, TraversalEvent, TreeListener};

/// Owned snapshot of a single traversal event.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    /// Rendered connector prefix.
    pub prefix: String,
    /// Glyph count of the prefix, equal to the node's depth from the root.
    pub depth: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub listing_failed: bool,
}

/// Listener that materializes every event into an [`EntryRecord`].
///
/// The buffered counterpart to `TreePrinter`: required for JSON output, and
/// the observation point wherever the full event sequence needs inspecting
/// after the walk.
#[derive(Debug, Default)]
pub struct Collector {
    records: Vec<EntryRecord>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[EntryRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<EntryRecord> {
        self.records
    }
}

impl TreeListener for Collector {
    fn entry_found(
        &mut self,
        event: &TraversalEvent<'_>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.records.push(EntryRecord {
            path: event.entry.path.clone(),
            name: event.entry.name(),
            kind: event.entry.kind,
            prefix: event.prefix.render(),
            depth: event.prefix.depth(),
            listing_failed: event.listing_failed,
        });
        Ok(())
    }
}

/// Print collected records as pretty-printed JSON to stdout.
pub fn print_json(records: &[EntryRecord]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
