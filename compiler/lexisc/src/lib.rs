//! Command-line driver for the lexis scanner.
//!
//! Reads a source file, drains a [`lexis_core::Scanner`] over it and prints
//! the tokens, or renders a diagnostic when scanning fails.

pub mod commands;
pub mod report;
pub mod tracing_setup;
