//! Corridor CLI library.
//!
//! Command handlers, terminal styling and output formatting for the
//! `corridor` binary. Handlers return the rendered text so they can be
//! exercised without spawning the binary.

pub mod commands;
pub mod output;
pub mod terminal;
