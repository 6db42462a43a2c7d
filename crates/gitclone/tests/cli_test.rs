// Integration tests are compiled as a separate crate, so these lints don't apply
#![allow(clippy::tests_outside_test_module)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{create_repo, run_gitclone};
use tempfile::TempDir;

#[test]
fn test_clone_into_destination() -> Result<()> {
    let (_repo_dir, repo_path) = create_repo("origin")?;
    let work = TempDir::new()?;
    let url = repo_path.to_string_lossy().to_string();

    let output = run_gitclone(work.path(), &[&url, "tmp/repo"])?;
    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("gitclone failed");
    }

    assert!(work.path().join("tmp/repo/.git").is_dir());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clone complete"), "stdout: {stdout}");

    Ok(())
}

#[test]
fn test_sync_clone_with_cwd_option() -> Result<()> {
    let (_repo_dir, repo_path) = create_repo("origin")?;
    let work = TempDir::new()?;
    let launch_dir = TempDir::new()?;
    let url = repo_path.to_string_lossy().to_string();
    let cwd = work.path().to_string_lossy().to_string();

    let output = run_gitclone(launch_dir.path(), &["--sync", "--cwd", &cwd, &url, "repo"])?;
    assert!(output.status.success());

    assert!(launch_dir.path().join("repo/.git").is_dir());
    assert!(!work.path().join("repo").exists());

    Ok(())
}

#[test]
fn test_default_destination_uses_repository_name() -> Result<()> {
    let (_repo_dir, repo_path) = create_repo("origin")?;
    let work = TempDir::new()?;
    let url = repo_path.to_string_lossy().to_string();

    let output = run_gitclone(work.path(), &["--quiet", &url])?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    assert!(work.path().join("origin/.git").is_dir());

    Ok(())
}

#[test]
fn test_missing_repository_exits_with_git_code() -> Result<()> {
    let work = TempDir::new()?;
    let missing = work.path().join("bad-repo-nonexistent");
    let url = missing.to_string_lossy().to_string();

    for flags in [vec![], vec!["--sync"]] {
        let mut args = flags;
        args.push(&url);
        args.push("tmp/bad");

        let output = run_gitclone(work.path(), &args)?;
        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(128));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Command `git` returned with error code 128."),
            "stderr: {stderr}"
        );
        assert!(!work.path().join("tmp/bad/.git").exists());
    }

    Ok(())
}
