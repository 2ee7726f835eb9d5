//! Settings file handling.

use anyhow::{Context, Result};
use shared::settings::Settings;
use std::fs;
use std::path::{Path, PathBuf};

/// `settings.json` in the platform config directory
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "csvscope", "csvscope")
        .map(|proj| proj.config_dir().join("settings.json"))
}

/// Load settings from an explicit file, or from the default location.
///
/// An explicit path must exist and parse. The default file is optional and a
/// broken one only produces a warning.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return read_settings(path);
    }

    let Some(path) = config_path() else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        return Ok(Settings::default());
    }

    match read_settings(&path) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            tracing::warn!("ignoring settings file: {:#}", e);
            Ok(Settings::default())
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let settings = serde_json::from_slice::<Settings>(&bytes)
        .with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// Where the report for `csv` goes: `<dir>/<stem>.report.html`.
pub fn report_path(csv: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = csv
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string());
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| csv.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{}.report.html", stem))
}
