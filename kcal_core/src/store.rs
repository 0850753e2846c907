//! Profile snapshot store.
//!
//! Snapshots are appended to a JSONL (JSON Lines) file. Appends, reads and
//! rollups all lock `<log>.lock`, so several processes can record profiles
//! while another archives the log.

use crate::lock::LockGuard;
use crate::{Error, Profile, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A profile as it was when stored
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfileSnapshot {
    pub id: Uuid,
    pub stored_at: DateTime<Utc>,
    pub profile: Profile,
}

impl ProfileSnapshot {
    pub fn new(profile: &Profile) -> Self {
        Self {
            id: Uuid::new_v4(),
            stored_at: Utc::now(),
            profile: profile.clone(),
        }
    }
}

/// Anything that can persist a profile snapshot
pub trait ProfileSink {
    fn store(&mut self, profile: &Profile) -> Result<ProfileSnapshot>;
}

/// JSONL-based profile sink with file locking
pub struct JsonlProfileStore {
    path: PathBuf,
}

impl JsonlProfileStore {
    /// Create a new store for the given log path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conventional log location under a data directory
    pub fn log_path(data_dir: &Path) -> PathBuf {
        data_dir.join("snapshots").join("profiles.jsonl")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl ProfileSink for JsonlProfileStore {
    fn store(&mut self, profile: &Profile) -> Result<ProfileSnapshot> {
        self.ensure_parent_dir()?;
        let _guard = LockGuard::exclusive(&self.path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::Storage(format!("cannot open {:?}: {}", self.path, e)))?;

        let snapshot = ProfileSnapshot::new(profile);
        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(&snapshot)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::debug!("Stored snapshot {} for '{}'", snapshot.id, profile.name);
        Ok(snapshot)
    }
}

/// Read all snapshots from a log file
///
/// A missing file yields no snapshots. Lines that fail to parse are skipped.
pub fn read_snapshots(path: &Path) -> Result<Vec<ProfileSnapshot>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let _guard = LockGuard::shared(path)?;
    read_snapshots_locked(path)
}

/// Read snapshots when the caller already holds the log's lock
pub(crate) fn read_snapshots_locked(path: &Path) -> Result<Vec<ProfileSnapshot>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(&file);
    let mut snapshots = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<ProfileSnapshot>(&line) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => {
                tracing::warn!("Failed to parse snapshot at line {}: {}", line_num + 1, e);
            }
        }
    }

    tracing::debug!("Read {} snapshots from {:?}", snapshots.len(), path);
    Ok(snapshots)
}
