//! Alert delivery to the chat platform

pub mod notifier;

pub use notifier::{Notifier, NotifierError};
