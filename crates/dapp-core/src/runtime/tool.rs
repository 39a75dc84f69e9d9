//! External tools run after generation: git and the package manager
//!
//! Both are best effort. A failure is reported to the user but never fails
//! the run.

use super::package_manager::PackageManager;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Commit message for the first commit in a generated project
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from create-nextjs-dapp";

/// Outcome of trying to initialize a git repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitInit {
    Initialized,
    /// The project already lives inside a git or mercurial work tree
    AlreadyTracked,
    /// `git` is not installed
    Unavailable,
    Failed,
}

/// Side-effecting collaborators for post-generation steps
#[allow(async_fn_in_trait)]
pub trait ProjectTools {
    async fn init_git(&self, root: &Path) -> GitInit;

    /// Returns true when the install command exited successfully
    async fn install(&self, root: &Path, package_manager: PackageManager) -> bool;
}

/// Runs the real `git` and package manager binaries
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTools;

impl ProjectTools for SystemTools {
    async fn init_git(&self, root: &Path) -> GitInit {
        if !succeeds(root, "git", &["--version"]).await {
            return GitInit::Unavailable;
        }
        if succeeds(root, "git", &["rev-parse", "--is-inside-work-tree"]).await
            || succeeds(root, "hg", &["--cwd", ".", "root"]).await
        {
            return GitInit::AlreadyTracked;
        }
        if !succeeds(root, "git", &["init"]).await {
            return GitInit::Failed;
        }

        match commit_initial(root).await {
            Ok(()) => GitInit::Initialized,
            Err(_) => {
                // Don't leave a half-initialized repository behind
                let _ = tokio::fs::remove_dir_all(root.join(".git")).await;
                GitInit::Failed
            }
        }
    }

    async fn install(&self, root: &Path, package_manager: PackageManager) -> bool {
        let (program, args) = match package_manager.install_argv().split_first() {
            Some(split) => split,
            None => return false,
        };
        succeeds(root, program, args).await
    }
}

async fn commit_initial(root: &Path) -> Result<()> {
    if !succeeds(root, "git", &["config", "init.defaultBranch"]).await {
        run(root, "git", &["checkout", "-b", "main"]).await?;
    }
    run(root, "git", &["add", "-A"]).await?;
    run(root, "git", &["commit", "-m", INITIAL_COMMIT_MESSAGE]).await?;
    Ok(())
}

/// Run a command in `dir` with output captured, failing on a non-zero exit
async fn run(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = TokioCommand::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .with_context(|| format!("Failed to run {}", program))?;

    if !status.success() {
        anyhow::bail!(
            "{} {} exited with code {}",
            program,
            args.join(" "),
            status.code().unwrap_or(-1)
        );
    }
    Ok(())
}

async fn succeeds(dir: &Path, program: &str, args: &[&str]) -> bool {
    run(dir, program, args).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_program_is_a_failure() {
        let tmp = tempdir().unwrap();
        assert!(!succeeds(tmp.path(), "definitely-not-a-real-binary-3f9a", &[]).await);
        assert!(run(tmp.path(), "definitely-not-a-real-binary-3f9a", &["x"]).await.is_err());
    }
}
