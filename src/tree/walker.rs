//! The traversal engine

use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::error::{ListingFailure, TraversalError};

use super::decorator::{Decorator, GlyphSet};
use super::entry::Entry;
use super::event::{ListenerHandle, ListenerRegistry, TraversalEvent, TreeListener};
use super::prefix::Prefix;
use super::sorter::sort_children;

/// Shared flag for cancelling an in-flight traversal.
///
/// Checked at the top of each recursive step; once triggered, the walk
/// returns `Cancelled` without emitting further events.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Outcome of a completed traversal.
///
/// `dirs` excludes the root, matching the classic `tree` summary line.
/// Recovered listing failures are collected here; events already delivered
/// for the failing subtrees stand.
#[derive(Debug, Default)]
pub struct WalkReport {
    pub dirs: usize,
    pub files: usize,
    pub failures: Vec<ListingFailure>,
}

impl WalkReport {
    /// True when every visited directory could be listed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Pre-order depth-first traversal engine.
///
/// Emits one `TraversalEvent` per visited entry to every registered
/// listener, computing each entry's connector prefix on the way down. The
/// decorator and the child-ordering policy are read-only for the duration
/// of a walk; the decorator may be swapped between walks.
pub struct Walker<D: Decorator = GlyphSet> {
    decorator: D,
    listeners: Arc<ListenerRegistry>,
    cancel: Option<CancelToken>,
}

impl Walker<GlyphSet> {
    /// Walker with the default unicode glyph set.
    pub fn new() -> Self {
        Self::with_decorator(GlyphSet::unicode())
    }
}

impl Default for Walker<GlyphSet> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decorator> Walker<D> {
    pub fn with_decorator(decorator: D) -> Self {
        Self {
            decorator,
            listeners: Arc::new(ListenerRegistry::new()),
            cancel: None,
        }
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Swap the glyph vocabulary. Rendering changes; traversal order and
    /// the event sequence do not.
    pub fn set_decorator(&mut self, decorator: D) {
        self.decorator = decorator;
    }

    pub fn decorator(&self) -> &D {
        &self.decorator
    }

    /// The walker's listener registry, shareable with listeners that need
    /// to register or remove observers from inside their own callbacks.
    pub fn listeners(&self) -> Arc<ListenerRegistry> {
        Arc::clone(&self.listeners)
    }

    pub fn add_listener(&self, listener: Arc<Mutex<dyn TreeListener>>) -> ListenerHandle {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    /// Walk the tree rooted at `root`, firing one event per visited entry.
    ///
    /// Unreadable directories are recorded in the returned report and
    /// treated as childless; their siblings are still traversed. Listener
    /// errors and cancellation abort the walk. Root existence is the
    /// caller's responsibility: a missing root classifies as unclassified
    /// and yields a single event.
    pub fn walk(&self, root: &Path) -> Result<WalkReport, TraversalError> {
        debug!(root = %root.display(), "starting walk");
        let mut report = WalkReport::default();
        self.visit(root, Entry::from_path(root), Prefix::root(), &mut report)?;
        debug!(
            dirs = report.dirs,
            files = report.files,
            failures = report.failures.len(),
            "walk finished"
        );
        Ok(report)
    }

    fn visit(
        &self,
        root: &Path,
        entry: Entry,
        prefix: Prefix,
        report: &mut WalkReport,
    ) -> Result<(), TraversalError> {
        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                return Err(TraversalError::Cancelled { path: entry.path });
            }
        }

        // List children before dispatch so the event can carry the failure.
        let children = if entry.is_dir() {
            match list_children(&entry.path) {
                Ok(children) => Some(children),
                Err(error) => {
                    warn!(path = %entry.path.display(), %error, "cannot list directory");
                    report.failures.push(ListingFailure {
                        path: entry.path.clone(),
                        error,
                    });
                    None
                }
            }
        } else {
            None
        };

        let event = TraversalEvent {
            entry: &entry,
            prefix: &prefix,
            root,
            listing_failed: entry.is_dir() && children.is_none(),
        };
        self.listeners.dispatch(&event)?;

        if entry.is_dir() {
            if prefix.depth() > 0 {
                report.dirs += 1;
            }
        } else {
            report.files += 1;
        }

        let Some(mut children) = children else {
            return Ok(());
        };
        sort_children(&mut children);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let child_prefix = prefix.child(&self.decorator, i == count - 1);
            self.visit(root, child, child_prefix, report)?;
        }
        Ok(())
    }
}

fn list_children(path: &Path) -> io::Result<Vec<Entry>> {
    let mut children = Vec::new();
    for dir_entry in fs::read_dir(path)? {
        children.push(Entry::from_path(dir_entry?.path()));
    }
    Ok(children)
}
