//! Non-owning references to subscribers
//!
//! A [`WeakHandle`] observes an `Arc` without keeping it alive. Once the last
//! strong reference is dropped the handle reports not-alive and [`WeakHandle::get`]
//! yields `None`; no deregistration call is involved.

use std::sync::{Arc, Weak};

/// Weak reference wrapper that can report whether its target still exists
pub struct WeakHandle<T: ?Sized> {
    target: Weak<T>,
}

impl<T: ?Sized> WeakHandle<T> {
    /// Create a handle observing `target`
    pub fn new(target: &Arc<T>) -> Self {
        Self {
            target: Arc::downgrade(target),
        }
    }

    /// Check whether the target is still alive
    pub fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    /// Get the target while it is alive
    pub fn get(&self) -> Option<Arc<T>> {
        self.target.upgrade()
    }

    /// Check whether this handle observes the same allocation as `other`
    pub fn ptr_eq(&self, other: &Arc<T>) -> bool {
        std::ptr::addr_eq(self.target.as_ptr(), Arc::as_ptr(other))
    }
}

// Manual Clone: `T` itself need not be Clone.
impl<T: ?Sized> Clone for WeakHandle<T> {
    fn clone(&self) -> Self {
        Self {
            target: Weak::clone(&self.target),
        }
    }
}

impl<T: ?Sized> From<&Arc<T>> for WeakHandle<T> {
    fn from(target: &Arc<T>) -> Self {
        Self::new(target)
    }
}

impl<T: ?Sized> std::fmt::Debug for WeakHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}
