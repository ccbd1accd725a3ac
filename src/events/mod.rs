//! Event types and observers.
//!
//! Submodules:
//! - [`interaction`] – an interaction capability was invoked
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`visibility`] – an invisibility transition completed
pub mod interaction;
pub mod switchdebug;
pub mod visibility;
