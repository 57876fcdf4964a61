use crate::error::{Result, ShortlyError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MAX_CODE_ATTEMPTS: u32 = 32;

/// Configuration for shortly, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortlyConfig {
    /// How many candidate short codes to draw before giving up
    #[serde(default = "default_max_code_attempts")]
    pub max_code_attempts: u32,

    /// Ask before deleting a link
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_max_code_attempts() -> u32 {
    DEFAULT_MAX_CODE_ATTEMPTS
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for ShortlyConfig {
    fn default() -> Self {
        Self {
            max_code_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
            confirm_delete: true,
        }
    }
}

impl ShortlyConfig {
    pub const KEYS: [&'static str; 2] = ["max-code-attempts", "confirm-delete"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShortlyError::Io)?;
        let config: ShortlyConfig =
            serde_json::from_str(&content).map_err(ShortlyError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShortlyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShortlyError::Serialization)?;
        fs::write(config_path, content).map_err(ShortlyError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "max-code-attempts" => Some(self.max_code_attempts.to_string()),
            "confirm-delete" => Some(self.confirm_delete.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "max-code-attempts" => {
                let n: u32 = value
                    .parse()
                    .map_err(|_| format!("Invalid number for {}: {}", key, value))?;
                if n == 0 {
                    return Err(format!("{} must be at least 1", key));
                }
                self.max_code_attempts = n;
                Ok(())
            }
            "confirm-delete" => {
                self.confirm_delete = match value {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(format!("Invalid boolean for {}: {}", key, value)),
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
