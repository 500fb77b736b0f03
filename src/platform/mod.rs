//! Platform abstraction layer
//!
//! Translates host input into session commands. Hosts own the event loop;
//! this only decides what a key code means.

pub mod input;

pub use input::{KeyBinding, handle_key, map_key};
