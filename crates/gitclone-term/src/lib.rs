#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
//! Terminal output primitives for gitclone frontends.
//!
//! This crate isolates colored status rendering so libgitclone can remain
//! UI-agnostic. Use these helpers in CLI frontends.

/// Terminal output abstractions and implementations.
mod output;

pub use output::{Output, OutputError, Quiet, Terminal};
