//! # Clone Service
//!
//! The menu's side effects: cloning the repository into the target
//! directory, and removing that checkout again.
//!
//! `CloneService` is the seam the controller talks to. `GitCloneService`
//! shells out to git; tests use a recording fake.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, info};

/// The two confirmed values the whole run works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    pub repository: String,
    pub target: String,
}

impl CloneRequest {
    pub fn new(repository: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            target: target.into(),
        }
    }

    /// Target path with a leading `~` expanded to the home directory.
    pub fn target_path(&self) -> PathBuf {
        expand_home(&self.target)
    }
}

/// Errors that can occur while cloning or cleaning up.
#[derive(Debug)]
pub enum CloneError {
    /// The clone program could not be started at all.
    Spawn { program: String, source: io::Error },
    /// The clone program ran and exited unsuccessfully. `stderr` is its
    /// last non-empty line of error output, if any.
    Failed {
        status: ExitStatus,
        stderr: Option<String>,
    },
    /// Cleanup target does not exist.
    Missing(PathBuf),
    /// Cleanup target exists but is not a git checkout. Left untouched.
    NotACheckout(PathBuf),
    Io(io::Error),
}

impl fmt::Display for CloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloneError::Spawn { program, source } => {
                write!(f, "could not run {program}: {source}")
            }
            CloneError::Failed {
                status,
                stderr: Some(line),
            } => write!(f, "clone exited with {status}: {line}"),
            CloneError::Failed { status, .. } => write!(f, "clone exited with {status}"),
            CloneError::Missing(path) => write!(f, "{} does not exist", path.display()),
            CloneError::NotACheckout(path) => {
                write!(f, "{} is not a git checkout", path.display())
            }
            CloneError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CloneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CloneError::Spawn { source, .. } => Some(source),
            CloneError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CloneError {
    fn from(e: io::Error) -> Self {
        CloneError::Io(e)
    }
}

pub trait CloneService {
    /// Returns the name of the service, for logging.
    fn name(&self) -> &str;

    /// Clone `request.repository` into `request.target`. Returns a one-line summary.
    fn clone_repository(&self, request: &CloneRequest) -> Result<String, CloneError>;

    /// Remove a checkout previously created at `request.target`.
    fn cleanup(&self, request: &CloneRequest) -> Result<String, CloneError>;
}

/// Clones by running `<program> clone <repository> <target>`.
pub struct GitCloneService {
    program: String,
}

impl GitCloneService {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCloneService {
    fn default() -> Self {
        Self::new("git")
    }
}

impl CloneService for GitCloneService {
    fn name(&self) -> &str {
        &self.program
    }

    fn clone_repository(&self, request: &CloneRequest) -> Result<String, CloneError> {
        let target = request.target_path();
        info!(
            "Cloning {} into {} with {}",
            request.repository,
            target.display(),
            self.program
        );

        // stdin stays inherited so git can ask for credentials; stderr is
        // captured because the next screen clears the terminal
        let output = Command::new(&self.program)
            .arg("clone")
            .arg(&request.repository)
            .arg(&target)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| CloneError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        debug!("{} exited with {}", self.program, output.status);
        if !output.status.success() {
            return Err(CloneError::Failed {
                status: output.status,
                stderr: last_line(&output.stderr),
            });
        }
        Ok(format!(
            "Cloned {} into {}",
            request.repository,
            target.display()
        ))
    }

    fn cleanup(&self, request: &CloneRequest) -> Result<String, CloneError> {
        let target = request.target_path();
        remove_checkout(&target)?;
        Ok(format!("Removed {}", target.display()))
    }
}

/// Last non-empty line of a process's error output.
fn last_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .rfind(|l| !l.is_empty())
        .map(str::to_string)
}

/// Remove `path` recursively, but only if it looks like a git checkout.
fn remove_checkout(path: &Path) -> Result<(), CloneError> {
    if !path.exists() {
        return Err(CloneError::Missing(path.to_path_buf()));
    }
    if !path.join(".git").exists() {
        return Err(CloneError::NotACheckout(path.to_path_buf()));
    }
    info!("Removing checkout at {}", path.display());
    fs::remove_dir_all(path)?;
    Ok(())
}

/// Expand a leading `~` or `~/` to the home directory. Other paths pass through.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("/tmp/dots"), PathBuf::from("/tmp/dots"));
        assert_eq!(expand_home("relative/dir"), PathBuf::from("relative/dir"));
        // Only a leading tilde is special
        assert_eq!(expand_home("a/~/b"), PathBuf::from("a/~/b"));
    }

    #[test]
    fn test_expand_home_uses_home_dir() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~"), home);
            assert_eq!(expand_home("~/.dotfiles"), home.join(".dotfiles"));
        }
    }

    #[test]
    fn test_clone_with_missing_program_is_spawn_error() {
        let service = GitCloneService::new("dotmenu-no-such-program");
        let request = CloneRequest::new("https://example.invalid/repo.git", "/tmp/never");
        let err = service.clone_repository(&request).unwrap_err();
        assert!(matches!(err, CloneError::Spawn { .. }));
        assert!(err.to_string().contains("dotmenu-no-such-program"));
    }

    #[cfg(unix)]
    #[test]
    fn test_clone_with_failing_program_is_failed() {
        // `false` ignores its arguments and exits 1
        let service = GitCloneService::new("false");
        let request = CloneRequest::new("repo", "/tmp/never");
        let err = service.clone_repository(&request).unwrap_err();
        assert!(matches!(err, CloneError::Failed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_clone_failure_carries_last_stderr_line() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let program = dir.path().join("fake-git");
        fs::write(
            &program,
            "#!/bin/sh\necho 'Cloning into x...' >&2\necho 'fatal: destination path already exists' >&2\necho >&2\nexit 3\n",
        )
        .unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

        let service = GitCloneService::new(program.to_string_lossy());
        let request = CloneRequest::new("repo", dir.path().join("dots").to_string_lossy());
        let err = service.clone_repository(&request).unwrap_err();

        match &err {
            CloneError::Failed { status, stderr } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(
                    stderr.as_deref(),
                    Some("fatal: destination path already exists")
                );
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(err.to_string().ends_with(": fatal: destination path already exists"));
    }

    #[test]
    fn test_last_line_skips_blank_lines() {
        assert_eq!(last_line(b"one\ntwo\n\n  \n").as_deref(), Some("two"));
        assert_eq!(last_line(b"\n\n"), None);
        assert_eq!(last_line(b""), None);
    }

    #[test]
    fn test_cleanup_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("gone");
        let request = CloneRequest::new("repo", target.to_string_lossy());
        let err = GitCloneService::default().cleanup(&request).unwrap_err();
        assert!(matches!(err, CloneError::Missing(p) if p == target));
    }

    #[test]
    fn test_cleanup_refuses_non_checkout() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keep.txt"), "precious").unwrap();
        let request = CloneRequest::new("repo", dir.path().to_string_lossy());

        let err = GitCloneService::default().cleanup(&request).unwrap_err();
        assert!(matches!(err, CloneError::NotACheckout(_)));
        assert!(dir.path().join("keep.txt").exists());
    }

    #[test]
    fn test_cleanup_removes_checkout() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dots");
        fs::create_dir_all(target.join(".git")).unwrap();
        fs::write(target.join("vimrc"), "set nocompatible").unwrap();
        let request = CloneRequest::new("repo", target.to_string_lossy());

        let summary = GitCloneService::default().cleanup(&request).unwrap();
        assert!(summary.starts_with("Removed"));
        assert!(!target.exists());
    }
}
