//! Profile files and boundary validation.
//!
//! Profiles are read from JSON or TOML and written back as JSON through an
//! atomic temp-file rename.

use crate::lock::LockGuard;
use crate::{ActivityEntry, Error, Profile, Result, WeightLogEntry};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

impl Profile {
    /// Reject values the formulas would accept but that make no physical sense
    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.weight_kg) {
            return Err(Error::InvalidInput(format!(
                "weight must be a positive number of kg, got {}",
                self.weight_kg
            )));
        }
        if !is_positive(self.height_cm) {
            return Err(Error::InvalidInput(format!(
                "height must be a positive number of cm, got {}",
                self.height_cm
            )));
        }
        for entry in &self.weight_history {
            if !is_positive(entry.weight_kg) {
                return Err(Error::InvalidInput(format!(
                    "weight log entry '{}' has invalid weight {}",
                    entry.date, entry.weight_kg
                )));
            }
        }
        Ok(())
    }

    /// Copy of this profile with a weigh-in appended
    ///
    /// The current weight follows the new entry.
    pub fn with_weight_entry(&self, entry: WeightLogEntry) -> Self {
        let mut profile = self.clone();
        profile.weight_kg = entry.weight_kg;
        profile.weight_history.push(entry);
        profile
    }

    /// Copy of this profile with an activity appended
    pub fn with_activity(&self, entry: ActivityEntry) -> Self {
        let mut profile = self.clone();
        profile.activities.push(entry);
        profile
    }

    /// Load a profile file, modify it and save it back
    ///
    /// An exclusive lock on `<path>.lock` is held from the load through the
    /// save, so concurrent updates of the same file apply one after another.
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut Profile) -> Result<()>,
    {
        let _guard = LockGuard::exclusive(path)?;

        let mut profile = load_profile(path)?;
        f(&mut profile)?;
        profile.validate()?;
        save_profile(&profile, path)?;
        Ok(profile)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Load and validate a profile from a `.json` or `.toml` file
///
/// Files with any other extension are read as JSON.
pub fn load_profile(path: &Path) -> Result<Profile> {
    let contents = std::fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    let profile: Profile = if is_toml {
        toml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };

    profile.validate()?;
    tracing::info!("Loaded profile '{}' from {:?}", profile.name, path);
    Ok(profile)
}

/// Save a profile as pretty JSON, atomically
///
/// 1. Write to a temp file in the target directory
/// 2. Sync to disk
/// 3. Rename over the original
///
/// Readers see the old or the new file, never a partial one. Callers that
/// read, modify and write go through [`Profile::update`].
pub fn save_profile(profile: &Profile, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, profile)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Saved profile '{}' to {:?}", profile.name, path);
    Ok(())
}
