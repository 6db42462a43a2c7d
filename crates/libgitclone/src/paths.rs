use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use tokio::fs as async_fs;

use crate::error::{CloneError, Result};

/// Resolve `path` against `base` and normalize the result lexically.
///
/// Absolute paths ignore `base`. `.` components are dropped and `..` pops the
/// previous component, stopping at the root. The file system is never
/// consulted, so paths that do not exist yet resolve normally. An empty `path`
/// resolves to `base` itself.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(part) => resolved.push(part),
        }
    }
    resolved
}

/// Parent directory of an absolute path, or `None` for a filesystem root.
pub fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}

/// Create `dir` and any missing ancestors. Existing directories are left alone.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| CloneError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Async counterpart of [`ensure_dir`].
pub async fn ensure_dir_async(dir: &Path) -> Result<()> {
    async_fs::create_dir_all(dir)
        .await
        .map_err(|source| CloneError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
}
