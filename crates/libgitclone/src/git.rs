use std::{
    env,
    ffi::OsString,
    fmt::{self, Display},
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, warn};

use crate::{
    error::{CloneError, Result},
    paths::{absolutize, ensure_dir, ensure_dir_async, parent_dir},
    runner::{ProcessExit, ProcessRunner, SystemRunner},
};

/// Program launched for every clone.
const GIT: &str = "git";

/// Caller-facing options for the clone facade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneOptions {
    /// Directory to launch `git` in. Relative paths resolve against the host
    /// process's current directory; `None` uses that directory directly.
    pub cwd: Option<PathBuf>,
}

impl CloneOptions {
    /// Options that launch `git` in `cwd`.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }
}

/// Outcome of a synchronous clone.
///
/// A non-zero exit from `git` is reported here rather than as an error; use
/// [`CloneStatus::into_result`] to treat it as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneStatus {
    /// Exit code of the `git` process, `None` if it was killed by a signal.
    pub code: Option<i32>,
}

impl CloneStatus {
    /// Whether `git` exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Convert an unsuccessful status into the matching [`CloneError`].
    pub fn into_result(self) -> Result<()> {
        match self.code {
            Some(0) => Ok(()),
            Some(code) => Err(CloneError::CommandExit { code }),
            None => Err(CloneError::Terminated),
        }
    }
}

/// Handle on the `git` command-line tool, bound to a working directory.
///
/// Relative destinations and `cd` targets resolve against a separate base
/// directory. [`Git::from_options`] sets it to the host process's current
/// directory; otherwise it starts out equal to the working directory.
pub struct Git {
    /// Absolute directory every subprocess is launched in.
    cwd: PathBuf,
    /// Absolute directory relative paths resolve against.
    base: PathBuf,
    /// Launches the `git` subprocess.
    runner: Arc<dyn ProcessRunner>,
}

impl fmt::Debug for Git {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Git")
            .field("cwd", &self.cwd)
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl Git {
    /// Create a wrapper that launches real `git` processes in `cwd`.
    ///
    /// `cwd` must be absolute; the wrapper never consults the host process's
    /// current directory on its own.
    pub fn new(cwd: impl Into<PathBuf>) -> Result<Self> {
        Self::with_runner(cwd, Arc::new(SystemRunner))
    }

    /// Create a wrapper that launches processes through `runner`.
    pub fn with_runner(
        cwd: impl Into<PathBuf>,
        runner: Arc<dyn ProcessRunner>,
    ) -> Result<Self> {
        let cwd = require_absolute(cwd.into())?;
        Ok(Self {
            base: cwd.clone(),
            cwd,
            runner,
        })
    }

    /// Resolve relative destinations and `cd` targets against `base` instead
    /// of the working directory.
    pub fn resolving_from(mut self, base: impl Into<PathBuf>) -> Result<Self> {
        self.base = require_absolute(base.into())?;
        Ok(self)
    }

    /// Build a wrapper from facade options.
    ///
    /// This is the one place the host process's current directory is read. It
    /// becomes the resolution base, and `options.cwd` is resolved against it.
    pub fn from_options(options: &CloneOptions) -> Result<Self> {
        let process_cwd = env::current_dir()?;
        let cwd = match &options.cwd {
            Some(dir) => absolutize(&process_cwd, dir),
            None => process_cwd.clone(),
        };
        Self::new(cwd)?.resolving_from(process_cwd)
    }

    /// Current working directory for launched processes.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Directory that relative paths resolve against.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Change the working directory. Relative paths resolve against the base
    /// directory.
    pub fn cd(&mut self, directory: impl AsRef<Path>) {
        self.cwd = absolutize(&self.base, directory.as_ref());
    }

    /// Argument vector for `git clone`, plus the resolved destination.
    fn plan(&self, source_url: &dyn Display, destination: &Path) -> (Vec<OsString>, PathBuf) {
        let destination = absolutize(&self.base, destination);
        let mut args = vec![
            OsString::from("clone"),
            OsString::from(source_url.to_string()),
        ];
        if !destination.as_os_str().is_empty() && destination != self.cwd {
            args.push(destination.clone().into_os_string());
        }
        (args, destination)
    }

    /// Arguments that a clone of `source_url` into `destination` would pass to
    /// `git`.
    ///
    /// The destination is omitted when it resolves to the working directory,
    /// leaving `git` to pick its default directory name inside it.
    pub fn clone_args(
        &self,
        source_url: impl Display,
        destination: impl AsRef<Path>,
    ) -> Vec<OsString> {
        self.plan(&source_url, destination.as_ref()).0
    }

    /// Clone `source_url` into `destination`, suspending until `git` exits.
    ///
    /// Missing parent directories of the destination are created first. A
    /// non-zero exit fails with [`CloneError::CommandExit`].
    pub async fn clone(
        &self,
        source_url: impl Display,
        destination: impl AsRef<Path>,
    ) -> Result<()> {
        let (args, destination) = self.plan(&source_url, destination.as_ref());
        if let Some(parent) = parent_dir(&destination) {
            ensure_dir_async(parent).await?;
        }

        debug!(cwd = %self.cwd.display(), ?args, "launching git");
        let exit = self
            .runner
            .run_async(GIT, &args, &self.cwd)
            .await
            .map_err(spawn_error)?;

        let status = self.finish(exit);
        status.into_result()
    }

    /// Clone `source_url` into `destination`, blocking the calling thread.
    ///
    /// Unlike [`Git::clone`], a non-zero exit from `git` is not an error: it is
    /// reported through the returned [`CloneStatus`]. Launch and file-system
    /// failures are still returned as errors.
    pub fn clone_sync(
        &self,
        source_url: impl Display,
        destination: impl AsRef<Path>,
    ) -> Result<CloneStatus> {
        let (args, destination) = self.plan(&source_url, destination.as_ref());
        if let Some(parent) = parent_dir(&destination) {
            ensure_dir(parent)?;
        }

        debug!(cwd = %self.cwd.display(), ?args, "launching git");
        let exit = self
            .runner
            .run(GIT, &args, &self.cwd)
            .map_err(spawn_error)?;

        Ok(self.finish(exit))
    }

    /// Log the outcome of a finished `git` process.
    fn finish(&self, exit: ProcessExit) -> CloneStatus {
        if exit.success() {
            debug!(cwd = %self.cwd.display(), "git clone finished");
        } else {
            warn!(code = ?exit.code, stderr = %exit.stderr, "git clone failed");
        }
        CloneStatus { code: exit.code }
    }
}

/// Reject relative directories, normalizing absolute ones.
fn require_absolute(dir: PathBuf) -> Result<PathBuf> {
    if !dir.is_absolute() {
        return Err(CloneError::RelativePath(dir));
    }
    Ok(absolutize(&dir, Path::new("")))
}

/// Wrap a launch failure with the program name.
fn spawn_error(source: io::Error) -> CloneError {
    CloneError::Spawn {
        program: GIT.to_string(),
        source,
    }
}
