//! Core library components.
//!
//! Input loading, validation and the Codemagic API client. Nothing in here
//! prints to the terminal.

pub mod client;
pub mod constants;
pub mod domain;
pub mod sources;
pub mod types;
pub mod validation;
