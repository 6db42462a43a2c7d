use std::{io, path::PathBuf, result::Result as StdResult};
use thiserror::Error;

/// Custom Result type for clone operations.
pub type Result<T> = StdResult<T, CloneError>;

/// Errors surfaced while cloning a repository.
#[derive(Error, Debug)]
pub enum CloneError {
    /// The `git` subprocess exited with a non-zero status.
    #[error("Command `git` returned with error code {code}.")]
    CommandExit {
        /// The process exit status code.
        code: i32,
    },

    /// The `git` subprocess was terminated by a signal before it could exit.
    #[error("Command `git` was terminated by a signal.")]
    Terminated,

    /// The subprocess could not be started at all.
    #[error("Failed to execute `{program}`: {source}")]
    Spawn {
        /// Program that failed to launch.
        program: String,
        /// Underlying launch failure.
        source: io::Error,
    },

    /// The parent directory of the clone destination could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A working directory must be absolute but a relative path was supplied.
    #[error("Working directory must be absolute: {}", .0.display())]
    RelativePath(PathBuf),

    /// An underlying I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl CloneError {
    /// Return the recommended process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandExit { code } => *code,
            Self::Spawn { .. } => 127,
            Self::RelativePath(_) => 2,
            _ => 1,
        }
    }
}
