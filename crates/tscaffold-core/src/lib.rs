//! Core data types for tscaffold.
//!
//! This crate defines the data a scaffold run works with: package references
//! and override rules, the default dependency table and version registry,
//! built-in project templates and the option catalogue, the `package.json`
//! model, `template.config.json` bindings, option post-processing, target
//! validation, and global configuration.
//!
//! This crate performs no process spawning and no template rendering.

pub mod config;
pub mod defaults;
pub mod dependency;
pub mod file_config;
pub mod manifest;
pub mod options;
pub mod template;
pub mod validate;
pub mod version_registry;
