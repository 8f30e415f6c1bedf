//! Tutorial-style demonstration of observable-model data binding in a
//! terminal UI.
//!
//! One screen shows a user's name. Activating the Change button rewrites
//! the name through an observable model object; the model notifies the
//! view binding, and the next frame renders the new value.

pub mod logging;
pub mod model;
pub mod ui;
