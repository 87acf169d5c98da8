//! prefstore-cli library entry point.
//!
//! Re-exports the command implementations so that unit tests and the
//! binary entry point in `main.rs` share the same module tree.

pub mod commands;
