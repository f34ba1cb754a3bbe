//! Session workflow state machine
//!
//! Elm-style: a pure [`transition`] maps a session and an event to the next
//! session plus effects, and the runtime executes the effects.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::{Effect, Notice};
pub use event::Event;
pub use state::{Session, Step, WeatherReport};
pub use transition::{transition, TransitionError};
