use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run a git command inside `repo_path`, ensuring it succeeds.
pub fn git(repo_path: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new("git")
        .current_dir(repo_path)
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {}", args.join(" ")))?;

    ensure!(
        output.status.success(),
        "git command failed: git {}\nstdout: {}\nstderr: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(output)
}

/// Initialise a new repository at `repo_path` with a README commit.
pub fn init_repository(repo_path: &Path) -> Result<()> {
    if !repo_path.exists() {
        fs::create_dir_all(repo_path)?;
    }

    git(repo_path, &["init"])?;
    git(repo_path, &["config", "user.email", "test@example.com"])?;
    git(repo_path, &["config", "user.name", "Test User"])?;

    fs::write(repo_path.join("README.md"), "# Test Project")?;
    git(repo_path, &["add", "README.md"])?;
    git(repo_path, &["commit", "-m", "Initial commit"])?;

    Ok(())
}

/// A source repository to clone from and an empty workspace to clone into.
pub struct Fixture {
    /// Keeps the source repository alive.
    _source_dir: TempDir,
    /// Keeps the workspace alive.
    _work_dir: TempDir,
    /// Path of the source repository, usable as a clone URL.
    pub source: PathBuf,
    /// Empty directory used as the clone working directory.
    pub work: PathBuf,
}

impl Fixture {
    /// Source URL for a repository that does not exist.
    pub fn missing_source(&self) -> String {
        self.work
            .join("bad-repo-nonexistent")
            .to_string_lossy()
            .to_string()
    }

    /// Source URL for the fixture repository.
    pub fn source_url(&self) -> String {
        self.source.to_string_lossy().to_string()
    }
}

/// Create a committed source repository and an empty working directory.
pub fn fixture() -> Result<Fixture> {
    let source_dir = TempDir::new()?;
    let source = source_dir.path().join("origin");
    init_repository(&source)?;

    let work_dir = TempDir::new()?;
    let work = work_dir.path().to_path_buf();

    Ok(Fixture {
        _source_dir: source_dir,
        _work_dir: work_dir,
        source,
        work,
    })
}
