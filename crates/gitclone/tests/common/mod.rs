use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Return the path to the compiled `gitclone` binary for integration-style tests.
pub fn gitclone_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gitclone"))
}

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

/// Create a temporary repository with a README commit, named `repo_name`.
pub fn create_repo(repo_name: &str) -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().join(repo_name);
    fs::create_dir_all(&repo_path)?;

    git(&repo_path, &["init"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;

    fs::write(repo_path.join("README.md"), "# Test Project")?;
    git(&repo_path, &["add", "README.md"])?;
    git(&repo_path, &["commit", "-m", "Initial commit"])?;

    Ok((temp_dir, repo_path))
}

/// Run `gitclone` from `work_dir` with the provided arguments.
pub fn run_gitclone(work_dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new(gitclone_binary())
        .current_dir(work_dir)
        .arg("--no-color")
        .args(args)
        .output()
        .with_context(|| format!("failed to run gitclone {}", args.join(" ")))
}
