//! Calculator surfaces for the freelancer tax engine.
//!
//! The library half holds input parsing, output formatting, and the
//! per-subcommand runners so they can be tested without spawning the
//! binary; `main.rs` is a thin clap wrapper.

pub mod commands;
pub mod format;
