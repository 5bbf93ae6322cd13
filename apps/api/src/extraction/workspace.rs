use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::warn;

/// Per-request transient storage scope. Holds at most one materialized
/// upload; no two requests share a workspace.
///
/// Removal happens exactly once: explicitly via `release`, or on drop
/// for early-exit paths (including panics).
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates a fresh, uniquely named, empty workspace directory.
    pub fn acquire() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        Ok(Workspace { dir })
    }

    /// Writes the uploaded bytes into this workspace and returns the
    /// materialized path. Only the final path component of the client
    /// filename is used, so traversal segments never escape the scope.
    pub fn materialize(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Removes the workspace and all contents. Removal failure is logged
    /// and swallowed; it never propagates to the caller.
    pub fn release(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            warn!("Failed to remove workspace {}: {e}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_creates_empty_directory() {
        let workspace = Workspace::acquire().unwrap();
        assert!(workspace.path().is_dir());
        assert_eq!(std::fs::read_dir(workspace.path()).unwrap().count(), 0);
        workspace.release();
    }

    #[test]
    fn test_release_removes_directory() {
        let workspace = Workspace::acquire().unwrap();
        let path = workspace.path().to_path_buf();
        workspace.release();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_directory_on_early_exit() {
        let path;
        {
            let workspace = Workspace::acquire().unwrap();
            path = workspace.path().to_path_buf();
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_materialize_writes_upload() {
        let workspace = Workspace::acquire().unwrap();
        let path = workspace.materialize("resume.txt", b"hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
        workspace.release();
        assert!(!path.exists());
    }

    #[test]
    fn test_materialize_strips_traversal_segments() {
        let workspace = Workspace::acquire().unwrap();
        let path = workspace.materialize("../../evil.txt", b"x").unwrap();
        assert_eq!(path.parent().unwrap(), workspace.path());
        assert_eq!(path.file_name().unwrap(), "evil.txt");
        workspace.release();
    }

    #[test]
    fn test_two_workspaces_never_share_a_directory() {
        let a = Workspace::acquire().unwrap();
        let b = Workspace::acquire().unwrap();
        assert_ne!(a.path(), b.path());
        a.release();
        b.release();
    }
}
