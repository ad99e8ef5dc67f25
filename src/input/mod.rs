//! Input adapters.
//!
//! Raw pointer events are translated into [`interaction::InteractionRecord`]s
//! before they reach the zoom controller.

#[cfg(feature = "gui")]
pub mod gui;
pub mod interaction;
