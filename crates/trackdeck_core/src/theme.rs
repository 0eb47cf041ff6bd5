//! Theme mode and preference persistence.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::AppError;

/// Visual theme for the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<ThemeMode> {
        match raw.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

/// Load the persisted theme preference.
///
/// Missing or unreadable preference files fall back to the default (dark)
/// with a warning; startup never fails over a cosmetic setting.
pub fn load_preference(path: &Path) -> ThemeMode {
    match fs::read_to_string(path) {
        Ok(raw) => ThemeMode::parse(&raw).unwrap_or_else(|| {
            warn!("unrecognized theme preference {:?}, using default", raw.trim());
            ThemeMode::default()
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ThemeMode::default(),
        Err(err) => {
            warn!("failed to read theme preference: {}", err);
            ThemeMode::default()
        }
    }
}

/// Persist the theme preference as a one-line file, creating parent
/// directories as needed.
///
/// # Errors
/// [`AppError::Io`] when the directory or file cannot be written.
pub fn store_preference(path: &Path, mode: ThemeMode) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, mode.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("theme");

        store_preference(&path, ThemeMode::Light).unwrap();
        assert_eq!(load_preference(&path), ThemeMode::Light);

        store_preference(&path, ThemeMode::Dark).unwrap();
        assert_eq!(load_preference(&path), ThemeMode::Dark);
    }

    #[test]
    fn missing_or_corrupt_preference_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_preference(&dir.path().join("absent")), ThemeMode::Dark);

        let path = dir.path().join("theme");
        std::fs::write(&path, "solarized").unwrap();
        assert_eq!(load_preference(&path), ThemeMode::Dark);
    }

    #[test]
    fn toggled_flips_between_modes() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse(" dark\n"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("blue"), None);
    }
}
