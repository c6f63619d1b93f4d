//! Library entry for flatsea exposing core logic for integration tests.

pub mod actions;
pub mod app;
pub mod index;
pub mod parse;
pub mod search;
pub mod state;
pub mod util;
