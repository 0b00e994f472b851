use crate::error::{Result, StoreError};
use crate::search::query::{DEFAULT_PRICE_CEILING, PRICE_STEP};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`StoreConfig::get`] and [`StoreConfig::set`].
pub const KEYS: &[&str] = &["catalog_path", "default_view", "price_ceiling", "use_color"];

/// Gallery layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => f.write_str("grid"),
            ViewMode::List => f.write_str("list"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(StoreError::Config(format!(
                "Invalid view '{}': expected grid or list",
                other
            ))),
        }
    }
}

/// Configuration for the storefront, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON catalog to browse instead of the built-in one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Layout used by `gallery` when `--view` is not given
    #[serde(default)]
    pub default_view: ViewMode,

    /// Upper bound of the gallery price range, in dollars
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: u32,

    /// Force colored output on or off; unset means auto-detect
    #[serde(default)]
    pub use_color: Option<bool>,
}

fn default_price_ceiling() -> u32 {
    DEFAULT_PRICE_CEILING
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_view: ViewMode::default(),
            price_ceiling: DEFAULT_PRICE_CEILING,
            use_color: None,
        }
    }
}

impl StoreConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StoreError::Io)?;
        let config: StoreConfig =
            serde_json::from_str(&content).map_err(StoreError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StoreError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StoreError::Serialization)?;
        fs::write(config_path, content).map_err(StoreError::Io)?;
        Ok(())
    }

    /// Display value of a key; `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "catalog_path" => self
                .catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(builtin)".to_string()),
            "default_view" => self.default_view.to_string(),
            "price_ceiling" => self.price_ceiling.to_string(),
            "use_color" => self
                .use_color
                .map(|c| c.to_string())
                .unwrap_or_else(|| "auto".to_string()),
            _ => return None,
        };
        Some(value)
    }

    /// Parses and stores a value. `catalog_path` and `use_color` accept
    /// `none`/`auto` to clear them.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "catalog_path" => {
                self.catalog_path = match value {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "default_view" => {
                self.default_view = value.parse().map_err(|e: StoreError| e.to_string())?;
            }
            "price_ceiling" => {
                let ceiling: u32 = value
                    .parse()
                    .map_err(|_| format!("Invalid price ceiling '{}'", value))?;
                if ceiling == 0 || ceiling % PRICE_STEP != 0 {
                    return Err(format!(
                        "Price ceiling must be a positive multiple of {}",
                        PRICE_STEP
                    ));
                }
                self.price_ceiling = ceiling;
            }
            "use_color" => {
                self.use_color = match value {
                    "auto" => None,
                    "true" | "on" | "yes" => Some(true),
                    "false" | "off" | "no" => Some(false),
                    other => return Err(format!("Invalid color setting '{}'", other)),
                };
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.price_ceiling, 5000);
        assert_eq!(config.default_view, ViewMode::Grid);
        assert_eq!(config.get("catalog_path").unwrap(), "(builtin)");
        assert_eq!(config.get("use_color").unwrap(), "auto");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = StoreConfig::load(temp.path().join("absent")).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let mut config = StoreConfig::default();
        config.set("default_view", "list").unwrap();
        config.set("price_ceiling", "8000").unwrap();
        config.save(&dir).unwrap();

        let loaded = StoreConfig::load(&dir).unwrap();
        assert_eq!(loaded.default_view, ViewMode::List);
        assert_eq!(loaded.price_ceiling, 8000);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"default_view":"list"}"#).unwrap();
        let loaded = StoreConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.default_view, ViewMode::List);
        assert_eq!(loaded.price_ceiling, DEFAULT_PRICE_CEILING);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = StoreConfig::default();
        assert!(config.set("default_view", "table").is_err());
        assert!(config.set("price_ceiling", "1234").is_err());
        assert!(config.set("price_ceiling", "abc").is_err());
        assert!(config.set("use_color", "maybe").is_err());
        assert!(config.set("nope", "1").is_err());
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_set_clears_optional_keys() {
        let mut config = StoreConfig::default();
        config.set("catalog_path", "/tmp/catalog.json").unwrap();
        config.set("use_color", "off").unwrap();
        assert_eq!(config.get("catalog_path").unwrap(), "/tmp/catalog.json");
        assert_eq!(config.use_color, Some(false));

        config.set("catalog_path", "none").unwrap();
        config.set("use_color", "auto").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = StoreConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_some(), "{} is not readable", key);
        }
    }
}
