//! Configuration management module.
//!
//! This module handles loading, saving, and managing application
//! configuration, including the theme preference and the beekeeper profile
//! edited from the profile screen.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/apiary-tui";

/// Beekeeper profile details shown and edited on the profile screen.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub phone: String,
}

impl Default for Profile {
    fn default() -> Profile {
        Profile {
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            email: "juan.perez@example.com".to_string(),
            country: "Spain".to_string(),
            phone: "+34 600 123 456".to_string(),
        }
    }
}

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub theme_name: String,
    pub profile: Profile,
    dir_path: Option<PathBuf>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub profile: Option<Profile>,
}

fn default_theme_name() -> String {
    "honeycomb".to_string()
}

impl Config {
    /// Return a new empty instance.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            profile: Profile::default(),
            dir_path: None,
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file is not an error; defaults apply
    /// and the file is created on the first save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        self.dir_path = Some(dir_path);
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            if let Some(profile) = data.profile {
                self.profile = profile;
            }
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            profile: Some(self.profile.clone()),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Recreate the parent directory in case it was deleted after load
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the application directory, shared with the session store.
    ///
    pub fn dir_path(&self) -> Result<PathBuf, AppError> {
        match &self.dir_path {
            Some(path) => Ok(path.clone()),
            None => Config::default_path(),
        }
    }

    /// Returns the path buffer for the default path to the configuration
    /// directory or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "apiary-tui-config-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = temp_dir("defaults");
        let mut config = Config::new();
        config.load(Some(dir.to_str().unwrap())).unwrap();
        assert_eq!(config.theme_name, "honeycomb");
        assert_eq!(config.profile.first_name, "Juan");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = temp_dir("round-trip");
        let mut config = Config::new();
        config.load(Some(dir.to_str().unwrap())).unwrap();
        config.theme_name = "plain".to_string();
        config.profile.first_name = "María".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(Some(dir.to_str().unwrap())).unwrap();
        assert_eq!(reloaded.theme_name, "plain");
        assert_eq!(reloaded.profile.first_name, "María");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_without_load_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
