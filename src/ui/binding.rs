//! View-side binding for the model's `name` property.

use crate::model::{ObserverId, Property, User};
use std::cell::RefCell;
use std::rc::Rc;

/// Mirrors `User::name` into a display cell the renderer reads.
///
/// Registers itself as a change observer on the model; every `set_name`
/// refreshes the cell before the setter returns, so the next frame
/// renders the new value without an explicit refresh step.
pub struct NameBinding {
    text: Rc<RefCell<String>>,
    id: ObserverId,
}

impl NameBinding {
    /// Bind to the model, seeding the display cell from the current name.
    pub fn bind(user: &mut User) -> Self {
        let text = Rc::new(RefCell::new(user.name().to_string()));
        let cell = Rc::clone(&text);
        let id = user.subscribe(move |property, value| {
            if property == Property::Name {
                *cell.borrow_mut() = value.to_string();
            }
        });
        Self { text, id }
    }

    /// Current display text, refreshed by change notifications.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Detach from the model. Further writes no longer reach the cell.
    pub fn unbind(self, user: &mut User) -> bool {
        user.unsubscribe(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_seeds_from_the_current_name() {
        let mut user = User::new();
        user.set_name("Kabu");
        let binding = NameBinding::bind(&mut user);
        assert_eq!(binding.text(), "Kabu");
    }

    #[test]
    fn binding_tracks_writes_without_explicit_refresh() {
        let mut user = User::new();
        let binding = NameBinding::bind(&mut user);
        user.set_name("Taro");
        assert_eq!(binding.text(), "Taro");
    }

    #[test]
    fn unbind_detaches_without_disturbing_other_bindings() {
        let mut user = User::new();
        user.set_name("Kabu");
        let binding = NameBinding::bind(&mut user);
        let stale = NameBinding::bind(&mut user);
        assert!(stale.unbind(&mut user));

        // The surviving binding still tracks; the model is unaffected.
        user.set_name("Taro");
        assert_eq!(binding.text(), "Taro");
        assert_eq!(user.name(), "Taro");
    }
}
