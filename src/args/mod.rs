//! Command-line interface: argument definition and per-mode handlers.

pub mod definition;
pub mod install;
pub mod list;
pub mod remove;
pub mod run;
pub mod search;
pub mod update;
pub mod utils;
