use crate::core::format::{TimePolicy, TimePolicyKind, parse_offset};
use crate::errors::{AppError, AppResult};
use crate::gesture::Gesture;
use crate::models::word::wire_word;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_device_url")]
    pub device_url: String,
    #[serde(default = "default_refresh_delay")]
    pub refresh_delay_ms: u64,
    #[serde(default)]
    pub time_policy: TimePolicyKind,
    /// Only used with `time_policy: fixed` (e.g. "+09:00")
    #[serde(default)]
    pub display_offset: Option<String>,
    /// Trailing lines shown after the pane scrolls to its end (0 = all)
    #[serde(default = "default_view_lines")]
    pub log_view_lines: usize,
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default = "default_gestures")]
    pub gestures: BTreeMap<String, Gesture>,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_device_url() -> String {
    "http://raspberrypi.local:8000".to_string()
}
fn default_refresh_delay() -> u64 {
    500
}
fn default_view_lines() -> usize {
    20
}
fn default_fps() -> u32 {
    30
}
fn default_color() -> bool {
    true
}
fn default_gestures() -> BTreeMap<String, Gesture> {
    BTreeMap::from([
        ("hello".to_string(), Gesture::Breath),
        ("howareyou".to_string(), Gesture::Flutter),
    ])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_url: default_device_url(),
            refresh_delay_ms: default_refresh_delay(),
            time_policy: TimePolicyKind::default(),
            display_offset: None,
            log_view_lines: default_view_lines(),
            fps: default_fps(),
            gestures: default_gestures(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.wordlink)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wordlink")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wordlink.conf")
    }

    /// Load configuration from `path` (or the standard location), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write a default configuration file and return its path.
    /// In test mode nothing is written.
    pub fn init_all(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if is_test {
            return Ok(path);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }

    /// Resolve the configured timestamp policy.
    pub fn time_policy(&self) -> AppResult<TimePolicy> {
        match self.time_policy {
            TimePolicyKind::UtcToLocal => Ok(TimePolicy::UtcToLocal),
            TimePolicyKind::AsLocal => Ok(TimePolicy::AsLocal),
            TimePolicyKind::Fixed => {
                let raw = self.display_offset.as_deref().ok_or_else(|| {
                    AppError::Config("time_policy 'fixed' requires display_offset".into())
                })?;
                Ok(TimePolicy::Fixed(parse_offset(raw)?))
            }
        }
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    /// Gesture triggered by `word`, if any. Hyphenated and plain spellings
    /// map to the same entry.
    pub fn gesture_for(&self, word: &str) -> Option<Gesture> {
        self.gestures.get(&wire_word(word)).copied()
    }
}
