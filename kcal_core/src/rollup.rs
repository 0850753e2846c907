//! CSV rollup of the snapshot log.
//!
//! Each snapshot becomes one CSV row with its computed activity factor and
//! calorie target, then the log is archived so the next rollup starts fresh.

use crate::activity::activity_factor;
use crate::calories::daily_calorie_target;
use crate::lock::LockGuard;
use crate::store::{read_snapshots_locked, ProfileSnapshot};
use crate::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    stored_at: String,
    name: String,
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    sex: String,
    activity_level: String,
    goal: String,
    activity_factor: f64,
    daily_calories: i64,
}

impl From<&ProfileSnapshot> for CsvRow {
    fn from(snapshot: &ProfileSnapshot) -> Self {
        let profile = &snapshot.profile;
        CsvRow {
            id: snapshot.id.to_string(),
            stored_at: snapshot.stored_at.to_rfc3339(),
            name: profile.name.clone(),
            age: profile.age,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            sex: profile.sex.to_string(),
            activity_level: profile.activity_level.to_string(),
            goal: profile.goal.to_string(),
            activity_factor: activity_factor(profile),
            daily_calories: daily_calorie_target(profile),
        }
    }
}

/// Roll up logged snapshots into CSV and archive the log
///
/// 1. Read all snapshots from the log
/// 2. Append them to the CSV file (headers only when the file is new)
/// 3. Sync the CSV to disk
/// 4. Rename the log to a uniquely named `.processed` archive
///
/// The log's lock is held throughout, so no snapshot can be appended between
/// the read and the rename. Returns the number of snapshots written. Each
/// rollup leaves its own archive, which `cleanup_processed_logs` removes.
pub fn snapshots_to_csv_and_archive(log_path: &Path, csv_path: &Path) -> Result<usize> {
    if !log_path.exists() {
        return Ok(0);
    }

    let _guard = LockGuard::exclusive(log_path)?;
    let snapshots = read_snapshots_locked(log_path)?;

    if snapshots.is_empty() {
        tracing::info!("No snapshots in log to roll up");
        return Ok(0);
    }

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    for snapshot in &snapshots {
        writer.serialize(CsvRow::from(snapshot))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    file.sync_all()?;

    tracing::info!("Wrote {} snapshots to CSV", snapshots.len());

    let processed_path = archive_path(log_path);
    std::fs::rename(log_path, &processed_path)?;

    tracing::info!("Archived snapshot log to {:?}", processed_path);

    Ok(snapshots.len())
}

/// `<log>.<timestamp>-<id>.processed`, unique per rollup
fn archive_path(log_path: &Path) -> PathBuf {
    let file_name = log_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "profiles.jsonl".into());
    let id = Uuid::new_v4().simple().to_string();
    log_path.with_file_name(format!(
        "{}.{}-{}.processed",
        file_name,
        Utc::now().format("%Y%m%dT%H%M%S%.6fZ"),
        &id[..8]
    ))
}

/// Remove all `.processed` logs in a directory
pub fn cleanup_processed_logs(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().is_some_and(|ext| ext == "processed") {
            std::fs::remove_file(&path)?;
            tracing::debug!("Removed processed log: {:?}", path);
            count += 1;
        }
    }

    if count > 0 {
        tracing::info!("Cleaned up {} processed logs", count);
    }

    Ok(count)
}
