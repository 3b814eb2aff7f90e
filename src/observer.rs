//! Change notification toward external collaborators.

use educe::Educe;
use std::sync::{Mutex, Weak};

/// An observer of grid changes.
///
/// The notification carries no payload: observers are expected to call
/// back into the grid's query operations to learn what changed.
/// Callbacks run synchronously on the mutating thread and must return
/// quickly.
pub trait Observer: Send + Sync {
    /// Called once after every successful mutation of the grid.
    fn grid_changed(&self);
}

/// The subscription registry of a grid.
///
/// Subscribers are held as weak references, so the grid never controls
/// an observer's lifetime; dropping the observer on the caller side is
/// enough to end its subscription. Entries whose observer is gone are
/// swept on the next notification cycle.
#[derive(Default, Educe)]
#[educe(Debug)]
pub(crate) struct Registry {
    #[educe(Debug(ignore))]
    subscribers: Mutex<Vec<Weak<dyn Observer>>>,
}

impl Registry {
    /// Adds an observer. Subscribing the same observer twice is a
    /// no-op.
    pub(crate) fn subscribe(&self, observer: Weak<dyn Observer>) {
        let mut subscribers = self.subscribers.lock().unwrap();
        if !subscribers.iter().any(|s| s.ptr_eq(&observer)) {
            subscribers.push(observer);
        }
    }

    /// Removes an observer. Unsubscribing an unknown observer is a
    /// no-op.
    pub(crate) fn unsubscribe(&self, observer: &Weak<dyn Observer>) {
        self.subscribers
            .lock()
            .unwrap()
            .retain(|s| !s.ptr_eq(observer));
    }

    /// Notifies every currently-subscribed observer exactly once.
    ///
    /// The registry lock is released before any callback runs, so a
    /// callback may subscribe, unsubscribe, or re-enter the grid's
    /// query operations. An observer unsubscribed from inside a
    /// callback may still receive the notification already in flight;
    /// the removal takes effect from the next cycle.
    pub(crate) fn notify(&self) {
        let subscribers: Vec<_> = {
            let mut subscribers = self.subscribers.lock().unwrap();
            subscribers.retain(|s| s.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        for observer in subscribers {
            observer.grid_changed();
        }
    }
}
