//! View-state controller for the mood journal: a single [`AppState`] snapshot,
//! a pure reducer over [`Action`]s, and a [`Controller`] that turns UI intents
//! into remote calls.

pub mod calendar;
pub mod events;
pub mod keyboard;
pub mod mood_log;
pub mod orchestration;
pub mod reducer;
pub mod state;

pub use events::{Notice, UiError, UiErrorContext};
pub use orchestration::Controller;
pub use reducer::{reduce, Action};
pub use state::{AppState, AuthMode, FieldEdit, InputField, Screen};
