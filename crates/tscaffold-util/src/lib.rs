//! Shared utilities for tscaffold.
//!
//! This crate provides cross-cutting concerns used by all other tscaffold
//! crates: the error type, filesystem helpers for copying and clearing
//! project directories, process spawning, and terminal status output.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;
