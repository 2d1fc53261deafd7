//! Change Notification
//!
//! A minimal last-value broadcast channel: the database publishes the root
//! sequence through it, and every subscriber registered afterwards still
//! receives the most recent value immediately. Delivery is synchronous and
//! fire-and-forget.

/// Handle returned by [`DataSubject::subscribe`]; pass it back to
/// [`DataSubject::unsubscribe`] to stop receiving values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Callback<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Holds the last published value and a list of subscribers
pub struct DataSubject<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    next_id: usize,
}

impl<T> DataSubject<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// The last published value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Register a subscriber. The current value is replayed to it before
    /// this call returns.
    pub fn subscribe(&mut self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        callback(&self.value);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber; unknown ids are ignored
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Store `value` and push it to every registered subscriber
    pub fn publish(&mut self, value: T) {
        self.value = value;
        for (_, callback) in &self.subscribers {
            callback(&self.value);
        }
    }
}
