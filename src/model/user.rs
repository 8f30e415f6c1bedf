use super::observable::{ObserverId, Observers};

/// Bindable properties of [`User`].
///
/// Observers receive the variant that changed so they can ignore
/// properties they are not bound to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Property {
    Name,
}

/// The model object holding the user's display name.
///
/// The setter assigns first and notifies second, so observers reading
/// the property during notification always see the new value.
#[derive(Default)]
pub struct User {
    name: String,
    observers: Observers<Property>,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current name. No side effects.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assign the name, then synchronously notify every observer.
    ///
    /// Any string is accepted; there are no error conditions.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.observers.notify(Property::Name, self.name.as_str());
    }

    /// Register a change observer. Used by the view binding.
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(Property, &str) + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Deregister a change observer.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }
}
