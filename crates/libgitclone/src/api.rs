use std::{fmt::Display, path::Path};

use crate::{
    error::Result,
    git::{CloneOptions, CloneStatus, Git},
};

/// Clone `source_url` into `destination_path` with a fresh [`Git`] built from
/// `options`.
///
/// Fails with [`CloneError::CommandExit`](crate::CloneError::CommandExit) when
/// `git` exits non-zero.
pub async fn clone(
    source_url: impl Display,
    destination_path: impl AsRef<Path>,
    options: &CloneOptions,
) -> Result<()> {
    Git::from_options(options)?
        .clone(source_url, destination_path)
        .await
}

/// Blocking counterpart of [`clone`].
///
/// A non-zero exit from `git` is reported through the returned
/// [`CloneStatus`], never as an error.
pub fn clone_sync(
    source_url: impl Display,
    destination_path: impl AsRef<Path>,
    options: &CloneOptions,
) -> Result<CloneStatus> {
    Git::from_options(options)?.clone_sync(source_url, destination_path)
}
