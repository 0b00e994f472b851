use crate::api::StorefrontApi;
use crate::catalog::builtin::BuiltinCatalog;
use crate::catalog::json::JsonCatalog;
use crate::catalog::{CatalogData, CatalogSource};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "STATUARY_CONFIG_DIR";

/// The catalog a session browses: the built-in demo data unless a JSON file
/// was named on the command line or in the config.
#[derive(Debug, Clone)]
pub enum StoreSource {
    Builtin(BuiltinCatalog),
    Json(JsonCatalog),
}

impl CatalogSource for StoreSource {
    fn load(&self) -> Result<CatalogData> {
        match self {
            StoreSource::Builtin(source) => source.load(),
            StoreSource::Json(source) => source.load(),
        }
    }

    fn describe(&self) -> String {
        match self {
            StoreSource::Builtin(source) => source.describe(),
            StoreSource::Json(source) => source.describe(),
        }
    }
}

pub struct StoreContext {
    pub api: StorefrontApi<StoreSource>,
    pub config: StoreConfig,
    pub config_dir: PathBuf,
}

/// Config directory lookup: explicit flag, then `STATUARY_CONFIG_DIR`, then
/// the platform config directory.
pub fn resolve_config_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "statuary", "statuary")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| StoreError::Config("Could not determine config dir".to_string()))
}

/// Picks the catalog source: `--catalog`, then `catalog_path`, then builtin.
pub fn choose_source(flag: Option<&Path>, config: &StoreConfig) -> StoreSource {
    match flag.map(Path::to_path_buf).or_else(|| config.catalog_path.clone()) {
        Some(path) => StoreSource::Json(JsonCatalog::new(path)),
        None => StoreSource::Builtin(BuiltinCatalog),
    }
}

pub fn initialize(config_dir: Option<&Path>, catalog: Option<&Path>) -> Result<StoreContext> {
    let config_dir = resolve_config_dir(config_dir)?;
    let config = match StoreConfig::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring unreadable config in {}: {}", config_dir.display(), e);
            StoreConfig::default()
        }
    };
    let source = choose_source(catalog, &config);
    log::debug!(
        "config dir {}, catalog {}",
        config_dir.display(),
        source.describe()
    );

    let api = StorefrontApi::new(source, config.clone(), config_dir.clone());
    Ok(StoreContext {
        api,
        config,
        config_dir,
    })
}
