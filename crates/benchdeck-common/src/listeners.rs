//! Scoped listener registration.
//!
//! Replaces ad-hoc "remove everything under this tag" bookkeeping with an
//! explicit handle: every `listen` returns a [`ListenerGuard`], and dropping
//! the guard (or calling [`ListenerGuard::release`]) deterministically
//! removes the callback. Owners collect their guards and drop them on
//! disposal.

use std::sync::{Arc, Mutex, Weak};

struct Entry<E> {
    key: u64,
    callback: Box<dyn FnMut(&E) + Send>,
}

struct HubInner<E> {
    entries: Vec<Entry<E>>,
    next_key: u64,
}

/// A clonable fan-out point for events of type `E`.
///
/// Callbacks run synchronously in registration order. They must not call
/// back into the hub they were registered on.
pub struct ListenerHub<E> {
    inner: Arc<Mutex<HubInner<E>>>,
}

impl<E> Clone for ListenerHub<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for ListenerHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ListenerHub<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HubInner {
                entries: Vec::new(),
                next_key: 0,
            })),
        }
    }

    /// Register a callback. The callback stays live until the returned
    /// guard is dropped or released.
    pub fn listen(&self, callback: impl FnMut(&E) + Send + 'static) -> ListenerGuard
    where
        E: 'static,
    {
        let key = {
            let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            let key = inner.next_key;
            inner.next_key += 1;
            inner.entries.push(Entry {
                key,
                callback: Box::new(callback),
            });
            key
        };

        let weak: Weak<Mutex<HubInner<E>>> = Arc::downgrade(&self.inner);
        ListenerGuard {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
                    inner.entries.retain(|entry| entry.key != key);
                }
            })),
        }
    }

    /// Deliver `event` to every live callback, in registration order.
    /// Returns the number of callbacks notified.
    pub fn emit(&self, event: &E) -> usize {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        for entry in inner.entries.iter_mut() {
            (entry.callback)(event);
        }
        inner.entries.len()
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Removes its callback from the hub when dropped.
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl ListenerGuard {
    /// Remove the callback now instead of at drop time.
    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
