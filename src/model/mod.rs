//! The observable model layer.

mod observable;
mod user;

pub use observable::{ObserverId, Observers};
pub use user::{Property, User};
