// DietView - app/prefs.rs
//
// Preference persistence: the theme choice survives application restarts.
//
// Design principles:
// - Preferences are saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good file.
// - Load errors are silently discarded (a corrupt or incompatible file just
//   starts the app on the resolution chain rather than surfacing errors).
// - The data directory is created on first save; no user action required.

use crate::core::view::Theme;
use crate::util::constants::PREFS_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment whenever `PrefsData` changes in a breaking way. Version
/// mismatches silently discard the file.
pub const PREFS_VERSION: u32 = 1;

/// Complete persistent preferences snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct PrefsData {
    /// Schema version — must equal `PREFS_VERSION` to be accepted.
    pub version: u32,

    /// Stored theme choice: "light" or "dark". `None` means the user has
    /// never toggled, so startup falls back to the system signal.
    #[serde(default)]
    pub theme: Option<String>,
}

impl PrefsData {
    /// The stored theme, if present and recognised.
    pub fn stored_theme(&self) -> Option<Theme> {
        self.theme.as_deref().and_then(Theme::parse)
    }
}

/// Resolve the preferences file path from the platform data directory.
pub fn prefs_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFS_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed. Returns a descriptive error
/// string; the caller logs it and carries on (a failed save never blocks
/// the toggle itself).
pub fn save(data: &PrefsData, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!("cannot create prefs directory '{}': {e}", parent.display())
        })?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("failed to serialise prefs: {e}"))?;

    // Atomic write: a crash between write and rename loses the new prefs
    // but never corrupts the previous file (rename is atomic on all
    // supported platforms).
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes())
        .map_err(|e| format!("failed to write prefs temp file '{}': {e}", tmp.display()))?;

    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        format!("failed to finalise prefs file '{}': {e}", path.display())
    })?;

    tracing::debug!(path = %path.display(), "Preferences saved");
    Ok(())
}

/// Load and validate `PrefsData` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch). The caller treats `None` as "no stored preference".
pub fn load(path: &Path) -> Option<PrefsData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read prefs file");
            }
        })
        .ok()?;

    let data: PrefsData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Prefs file is malformed — ignoring it"
            );
        })
        .ok()?;

    if data.version != PREFS_VERSION {
        tracing::warn!(
            found = data.version,
            expected = PREFS_VERSION,
            "Prefs file version mismatch — ignoring it"
        );
        return None;
    }

    Some(data)
}

/// Persist the given theme, logging (not propagating) any failure.
pub fn persist_theme(theme: Theme, data_dir: &Path) {
    let data = PrefsData {
        version: PREFS_VERSION,
        theme: Some(theme.as_str().to_string()),
    };
    if let Err(e) = save(&data, &prefs_path(data_dir)) {
        tracing::warn!(error = %e, "Could not persist theme preference");
    }
}
