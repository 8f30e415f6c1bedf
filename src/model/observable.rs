//! Ordered observer list with explicit synchronous notification.
//!
//! There is no annotation magic here: whoever mutates a model property
//! calls [`Observers::notify`] after the write, and every registered
//! callback runs before the setter returns.

/// Handle returned by [`Observers::subscribe`], used to deregister.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ObserverId(u64);

type Callback<P> = Box<dyn FnMut(P, &str)>;

/// Change observers registered against one model object.
///
/// Callbacks are invoked synchronously, in registration order, with the
/// property that changed and its new value.
pub struct Observers<P> {
    next_id: u64,
    entries: Vec<(ObserverId, Callback<P>)>,
}

impl<P> Default for Observers<P> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<P: Copy> Observers<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. The returned id deregisters it later.
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(P, &str) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback.
    ///
    /// Returns `false` if the id was already removed (or never issued).
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| entry_id.0 != id.0);
        self.entries.len() != before
    }

    /// Invoke every registered callback with the changed property and
    /// its new value.
    pub fn notify(&mut self, property: P, value: &str) {
        for (_, callback) in &mut self.entries {
            callback(property, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
