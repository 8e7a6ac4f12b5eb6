//! Deterministic child ordering ahead of traversal

use std::cmp::Ordering;

use super::entry::{Entry, EntryKind};

/// Sort a directory's children into traversal order: directories before
/// everything else, then byte-ascending by file name within each category.
///
/// The order must be stable across runs on an unchanged directory because
/// prefix computation depends on knowing which child is last. Entries of
/// unclassified kind (symlinks, devices, unstatable paths) sort with files.
pub fn sort_children(children: &mut [Entry]) {
    children.sort_by(compare);
}

fn compare(a: &Entry, b: &Entry) -> Ordering {
    category(a.kind)
        .cmp(&category(b.kind))
        .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
}

fn category(kind: EntryKind) -> u8 {
    match kind {
        EntryKind::Dir => 0,
        EntryKind::File | EntryKind::Other => 1,
    }
}
