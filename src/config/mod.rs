use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Application configuration, stored as YAML in the per-user config
/// directory. The batch and timer variants keep their own category sets and
/// their own side files (the one-line files remembering the last table
/// path); both are plain configuration values.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_timer_categories")]
    pub timer_categories: Vec<String>,
    #[serde(default = "default_last_path_file")]
    pub last_path_file: String,
    #[serde(default = "default_timer_last_path_file")]
    pub timer_last_path_file: String,
    #[serde(default = "default_autosave_minutes")]
    pub autosave_minutes: u64,
}

fn default_categories() -> Vec<String> {
    ["Coding", "Reading", "Writing", "Contact", "Misc"]
        .map(String::from)
        .to_vec()
}

fn default_timer_categories() -> Vec<String> {
    ["Gaming", "Piano", "Sleep", "Exercise", "Dev"]
        .map(String::from)
        .to_vec()
}

fn default_last_path_file() -> String {
    "default.txt".to_string()
}

fn default_timer_last_path_file() -> String {
    "default_life.txt".to_string()
}

fn default_autosave_minutes() -> u64 {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            timer_categories: default_timer_categories(),
            last_path_file: default_last_path_file(),
            timer_last_path_file: default_timer_last_path_file(),
            autosave_minutes: default_autosave_minutes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("daytally")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".daytally")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("daytally.conf")
    }

    /// Side file of the batch variant.
    pub fn side_file(&self) -> PathBuf {
        Self::config_dir().join(&self.last_path_file)
    }

    /// Side file of the interactive timer.
    pub fn timer_side_file(&self) -> PathBuf {
        Self::config_dir().join(&self.timer_last_path_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and file
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            let config = Config::default();
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }
}
