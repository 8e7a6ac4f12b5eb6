//! Traversal events and the listener registry

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::TraversalError;

use super::entry::Entry;
use super::prefix::Prefix;

/// A visited node, delivered to every registered listener.
///
/// Transient: created per visited entry, borrowed during dispatch, not
/// retained by the walker afterwards.
#[derive(Debug)]
pub struct TraversalEvent<'a> {
    /// The visited entry.
    pub entry: &'a Entry,
    /// Connector prefix for the entry's ancestor chain.
    pub prefix: &'a Prefix,
    /// Root of the originating traversal.
    pub root: &'a Path,
    /// Set when the entry is a directory whose children could not be listed.
    pub listing_failed: bool,
}

/// Observer of traversal events.
///
/// A listener error is fatal to the traversal: dispatch stops and the walk
/// returns `TraversalError::Listener`.
pub trait TreeListener: Send {
    fn entry_found(
        &mut self,
        event: &TraversalEvent<'_>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Opaque handle identifying a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerHandle(u64);

type SharedListener = Arc<Mutex<dyn TreeListener>>;

/// Ordered collection of listeners.
///
/// Registration order is dispatch order; the same listener may be registered
/// more than once. Dispatch iterates over a snapshot of the list taken
/// before iteration, so a listener may register or remove listeners from
/// inside its own callback without deadlocking; such changes take effect
/// from the next event on.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Mutex<Vec<(u64, SharedListener)>>,
    next_id: AtomicU64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener; returns a handle usable with [`remove`](Self::remove).
    pub fn add(&self, listener: SharedListener) -> ListenerHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push((id, listener));
        ListenerHandle(id)
    }

    /// Remove a previously registered listener. Returns false when the
    /// handle is unknown or already removed.
    pub fn remove(&self, handle: ListenerHandle) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != handle.0);
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Push `event` to every registered listener in registration order.
    pub fn dispatch(&self, event: &TraversalEvent<'_>) -> Result<(), TraversalError> {
        let snapshot: Vec<SharedListener> = self
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            let mut listener = listener.lock().unwrap_or_else(|poison| poison.into_inner());
            listener
                .entry_found(event)
                .map_err(|source| TraversalError::Listener {
                    path: event.entry.path.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(u64, SharedListener)>> {
        self.listeners
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}
