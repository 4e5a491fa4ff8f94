//! Subject side of the account notification channel
//!
//! A [`Notifier`] is the ordered list of observers owned by one account. It is
//! the only place observers are added, removed or called:
//!
//! - `attach` appends, duplicates included
//! - `detach` removes the first entry that is the same shared observer
//! - `notify` calls every observer in attachment order
//!
//! Observers are shared, never owned: the same holder can sit in the lists of
//! several accounts.

use crate::core::traits::Observer;
use std::fmt;
use std::sync::Arc;

/// Ordered list of attached observers
#[derive(Clone, Default)]
pub struct Notifier {
    observers: Vec<Arc<dyn Observer>>,
}

impl Notifier {
    /// Create a notifier with no observers attached
    pub fn new() -> Self {
        Notifier {
            observers: Vec::new(),
        }
    }

    /// Append an observer to the notification list
    ///
    /// Attaching the same observer twice means it is notified twice.
    pub fn attach(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Remove the first occurrence of `observer`
    ///
    /// Identity is the shared allocation, not the observer's contents.
    /// Detaching an observer that is not attached is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed, `false` otherwise
    pub fn detach<O: Observer + ?Sized>(&mut self, observer: &Arc<O>) -> bool {
        let position = self
            .observers
            .iter()
            .position(|attached| std::ptr::addr_eq(Arc::as_ptr(attached), Arc::as_ptr(observer)));

        match position {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Deliver `message` to every attached observer, in attachment order
    ///
    /// Each delivery is independent; nothing is rolled back.
    pub fn notify(&self, message: &str) {
        tracing::debug!(observers = self.observers.len(), text = message, "notifying observers");
        for observer in &self.observers {
            observer.update(message);
        }
    }

    /// Number of attached observers (duplicates counted)
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is attached
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}
