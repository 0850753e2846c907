//! Advisory locks on sidecar files.
//!
//! Files that get replaced by rename (profiles, the snapshot log) cannot be
//! locked directly: a writer holding the old inode blocks nobody who opens
//! the new one. Locks are taken on a stable `<file>.lock` next to them.

use crate::Result;
use fs2::FileExt;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Sidecar lock path for `target`
pub fn lock_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("kcal"));
    name.push(".lock");
    target.with_file_name(name)
}

/// Held lock on a sidecar file, released on drop
#[derive(Debug)]
pub struct LockGuard {
    file: File,
}

impl LockGuard {
    /// Block until an exclusive lock for `target` is held
    pub fn exclusive(target: &Path) -> Result<Self> {
        let file = open_lock_file(target)?;
        file.lock_exclusive()?;
        Ok(Self { file })
    }

    /// Block until a shared lock for `target` is held
    pub fn shared(target: &Path) -> Result<Self> {
        let file = open_lock_file(target)?;
        file.lock_shared()?;
        Ok(Self { file })
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            tracing::warn!("Failed to release lock: {}", e);
        }
    }
}

fn open_lock_file(target: &Path) -> Result<File> {
    let path = lock_path(target);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lock_path_is_sidecar() {
        assert_eq!(
            lock_path(Path::new("/data/profile.json")),
            PathBuf::from("/data/profile.json.lock")
        );
        assert_eq!(
            lock_path(Path::new("profiles.jsonl")),
            PathBuf::from("profiles.jsonl.lock")
        );
    }

    #[test]
    fn test_exclusive_lock_serializes_threads() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("shared.json");
        let inside = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..20 {
                        let _guard = LockGuard::exclusive(&target).unwrap();
                        assert_eq!(inside.fetch_add(1, Ordering::SeqCst), 0);
                        std::thread::yield_now();
                        inside.fetch_sub(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert!(lock_path(&target).exists());
    }
}
