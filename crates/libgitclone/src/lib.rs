#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
//! Programmatic wrapper around `git clone`.
//!
//! This crate launches the external `git` binary to clone a repository into a
//! destination path, creating missing parent directories first. It exposes
//! an async [`clone`] and a blocking [`clone_sync`], plus the [`Git`] handle
//! they are built on. The CLI binary in `crates/gitclone` builds on top of
//! this library.

/// Free functions that build a [`Git`] per call.
mod api;
/// Error type shared by every operation.
mod error;
/// The clone wrapper and its options.
mod git;
/// Lexical path resolution and directory creation.
mod paths;
/// Process-launching capability and its system implementation.
mod runner;

pub use api::{clone, clone_sync};
pub use error::{CloneError, Result};
pub use git::{CloneOptions, CloneStatus, Git};
pub use paths::absolutize;
pub use runner::{ProcessExit, ProcessRunner, SystemRunner};
