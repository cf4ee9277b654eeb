//! Dependency resolution engine: merges a template's declared dependencies,
//! option-triggered defaults (including nested `withOption` combinations) and
//! per-template override rules into one deduplicated, version-filled map per
//! `package.json` section.
//!
//! The resolver is pure: it borrows immutable tables, performs no I/O and
//! reports unknown versions instead of failing.

pub mod resolver;
pub mod unresolved;

pub use resolver::{DependencyResolver, Resolution, MAX_EXPANSION_DEPTH};
pub use unresolved::{UnresolvedReport, UnresolvedVersion};
