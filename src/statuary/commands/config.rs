use crate::commands::{CmdMessage, CmdResult};
use crate::config::{StoreConfig, KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = StoreConfig::load(dir)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("Config directory: {}", dir.display())));
            Ok(result.with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = StoreConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {}. Known keys: {}",
                    key,
                    KEYS.join(", ")
                ))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = StoreConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            log::info!("saved {} to {}", key, dir.display());
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_then_show() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("default_view".into(), "list".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "default_view set to list");

        let result = run(temp.path(), ConfigAction::ShowKey("default_view".into())).unwrap();
        assert_eq!(result.messages[0].content, "list");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("price_ceiling".into(), "-5".into()),
        )
        .unwrap();
        assert!(result.has_errors());
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_lists_known_ones() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowKey("theme".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("price_ceiling"));
    }

    #[test]
    fn show_all_returns_config() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(StoreConfig::default()));
    }
}
