use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::MAXIMIZE_TOLERANCE;

/// Overlap preferences read from the Window Maker defaults database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmakerPrefs {
    /// `NoWindowOverDock = NO`
    pub cover_dock: bool,
    /// anything but `NoWindowOverIcons = YES`
    pub cover_miniwindows: bool,
}

impl Default for WmakerPrefs {
    fn default() -> Self {
        Self {
            cover_dock: false,
            cover_miniwindows: true,
        }
    }
}

impl WmakerPrefs {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join("GNUstep").join("Defaults").join("WindowMaker"))
    }

    /// Read the defaults file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Self::parse(&contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} not found, using default overlap settings", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    /// Parse `Key = Value;` lines of a property list.
    pub fn parse(contents: &str) -> Self {
        let mut prefs = Self::default();
        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim().trim_matches('"');
            let value = value.trim().trim_end_matches(';').trim().trim_matches('"');
            match key {
                "NoWindowOverDock" => prefs.cover_dock = value == "NO",
                "NoWindowOverIcons" => prefs.cover_miniwindows = value != "YES",
                _ => {}
            }
        }
        tracing::debug!(
            "Covering dock: {}, covering miniwindows: {}",
            prefs.cover_dock,
            prefs.cover_miniwindows
        );
        prefs
    }
}

/// Tool settings from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Monitor hosting the dock when `--monitor` is not given.
    pub main_monitor: Option<String>,
    /// Title substrings of windows that land too high when placed at `y = 0`.
    pub misbehaving_windows: Vec<String>,
    /// Top edge used for those windows instead.
    pub misbehaving_offset: i32,
    pub maximize_tolerance: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            main_monitor: None,
            misbehaving_windows: vec!["Oracle VM VirtualBox".to_string(), "LibreOffice".to_string()],
            misbehaving_offset: 21,
            maximize_tolerance: MAXIMIZE_TOLERANCE,
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("moveto").join("config.json"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };
        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const WMAKER: &str = r#"{
  ColormapSize = 4;
  NoWindowOverDock = NO;
  NoWindowOverIcons = YES;
  WorkspaceBorder = None;
}
"#;

    #[test]
    fn test_parse_wmaker_prefs() {
        let prefs = WmakerPrefs::parse(WMAKER);
        assert!(prefs.cover_dock);
        assert!(!prefs.cover_miniwindows);
    }

    #[test]
    fn test_parse_wmaker_prefs_opposite() {
        let prefs = WmakerPrefs::parse("NoWindowOverDock = YES;\nNoWindowOverIcons = NO;\n");
        assert_eq!(prefs, WmakerPrefs::default());
    }

    #[test]
    fn test_parse_wmaker_prefs_missing_keys() {
        assert_eq!(WmakerPrefs::parse("{\n}\n"), WmakerPrefs::default());
        assert_eq!(WmakerPrefs::parse(""), WmakerPrefs::default());
    }

    #[test]
    fn test_load_wmaker_prefs_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = WmakerPrefs::load(&dir.path().join("WindowMaker")).unwrap();
        assert!(!prefs.cover_dock);
        assert!(prefs.cover_miniwindows);
    }

    #[test]
    fn test_load_wmaker_prefs_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WMAKER.as_bytes()).unwrap();
        let prefs = WmakerPrefs::load(file.path()).unwrap();
        assert!(prefs.cover_dock);
        assert!(!prefs.cover_miniwindows);
    }

    #[test]
    fn test_settings_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.misbehaving_offset, 21);
        assert_eq!(settings.maximize_tolerance, 32);
    }

    #[test]
    fn test_settings_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"main_monitor": "DP-1", "misbehaving_windows": ["Gimp"]}}"#).unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.main_monitor.as_deref(), Some("DP-1"));
        assert_eq!(settings.misbehaving_windows, vec!["Gimp".to_string()]);
        assert_eq!(settings.misbehaving_offset, 21);
    }

    #[test]
    fn test_settings_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"main_monitor": 3}}"#).unwrap();
        let err = Settings::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
