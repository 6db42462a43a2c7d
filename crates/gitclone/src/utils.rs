use std::{env, path::PathBuf};

/// Expand a leading `~` in a filesystem path using the `HOME` environment variable.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~")
        && let Ok(home) = env::var("HOME")
    {
        return PathBuf::from(path.replacen("~", &home, 1));
    }
    PathBuf::from(path)
}
