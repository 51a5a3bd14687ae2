use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

const SETTINGS_FILE_NAME: &str = "settings.json";
const APP_DIR_NAME: &str = ".moodlog";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSettings {
    pub user_name: String,
    pub is_dark_mode: bool,
    pub notifications_enabled: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            user_name: "User".to_string(),
            is_dark_mode: false,
            notifications_enabled: true,
        }
    }
}

impl UserSettings {
    // Loads stored settings, falling back to defaults on any failure.
    pub fn load(base_dir: Option<PathBuf>) -> Self {
        match Self::try_load(base_dir) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(error = %error, "Failed to load settings, using defaults");
                UserSettings::default()
            }
        }
    }

    fn try_load(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = settings_path(base_dir)?;
        if !path.exists() {
            return Ok(UserSettings::default());
        }
        let file =
            File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
        let reader = BufReader::new(file);
        let settings = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let path = settings_path(base_dir)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

fn settings_path(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match base_dir {
        Some(dir) => dir,
        None => {
            let home_dir =
                dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
            home_dir.join(APP_DIR_NAME)
        }
    };
    Ok(dir.join(SETTINGS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();

        let settings = UserSettings::load(Some(dir.path().to_path_buf()));
        assert_eq!(settings.user_name, "User");
        assert!(!settings.is_dark_mode);
        assert!(settings.notifications_enabled);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let settings = UserSettings {
            user_name: "Mina".to_string(),
            is_dark_mode: true,
            notifications_enabled: false,
        };
        settings.save(Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(UserSettings::load(Some(dir.path().to_path_buf())), settings);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE_NAME), "not json").unwrap();

        assert_eq!(
            UserSettings::load(Some(dir.path().to_path_buf())),
            UserSettings::default()
        );
    }

    #[test]
    fn missing_fields_take_their_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE_NAME), r#"{"userName":"Kai"}"#).unwrap();

        let settings = UserSettings::load(Some(dir.path().to_path_buf()));
        assert_eq!(settings.user_name, "Kai");
        assert!(settings.notifications_enabled);
    }
}
