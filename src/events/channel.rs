//! Subscriber lists.
//!
//! An [`EventChannel`] holds callbacks for one notification type and
//! invokes them synchronously, in subscription order. Subscribers only
//! observe: they get a shared reference to the payload and cannot veto
//! or undo whatever caused it.

use serde::{Deserialize, Serialize};

/// Handle returned by [`EventChannel::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

type Callback<E> = Box<dyn FnMut(&E)>;

/// Ordered list of observers for events of type `E`.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use turnboard::events::EventChannel;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut channel = EventChannel::new();
///
/// let sink = Rc::clone(&seen);
/// channel.subscribe(move |n: &u32| sink.borrow_mut().push(*n));
///
/// channel.emit(&7);
/// assert_eq!(*seen.borrow(), vec![7]);
/// ```
pub struct EventChannel<E> {
    subscribers: Vec<(SubscriptionId, Callback<E>)>,
    next_id: u32,
}

impl<E> EventChannel<E> {
    /// Create a channel with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer. It runs after every earlier subscriber.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Deliver `event` to every observer in subscription order.
    pub fn emit(&mut self, event: &E) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }

    /// Number of observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for EventChannel<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventChannel")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
