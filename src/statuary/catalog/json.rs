use super::{CatalogData, CatalogSource};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog read from a JSON file with the same shape as [`CatalogData`].
///
/// Prices are written in dollars, dates as `YYYY-MM-DD`.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a catalog to disk, creating parent directories as needed.
    pub fn write(&self, data: &CatalogData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<CatalogData> {
        log::debug!("reading catalog file {}", self.path.display());
        let content = fs::read_to_string(&self.path)?;
        let data: CatalogData = serde_json::from_str(&content)?;
        Ok(data)
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;
    use crate::catalog::Catalog;
    use crate::error::StoreError;
    use tempfile::tempdir;

    #[test]
    fn reads_a_minimal_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{
                "statues": [{
                    "id": 1, "title": "Venus", "artist": "A", "price": 2499,
                    "material": "Marble", "height": "180cm", "category": "Classical"
                }],
                "profile": {"name": "N", "email": "e", "phone": "p", "address": "a", "bio": "b"}
            }"#,
        )
        .unwrap();

        let source = JsonCatalog::new(&path);
        assert_eq!(source.describe(), path.display().to_string());
        let catalog = Catalog::load(&source).unwrap();
        assert_eq!(catalog.statues().len(), 1);
        assert!(catalog.statues()[0].image.is_none());
        assert!(catalog.cart_seed().is_empty());
    }

    #[test]
    fn builtin_catalog_survives_a_write_and_read() {
        let dir = tempdir().unwrap();
        let source = JsonCatalog::new(dir.path().join("nested").join("catalog.json"));
        let original = BuiltinCatalog.load().unwrap();
        source.write(&original).unwrap();

        let catalog = Catalog::load(&source).unwrap();
        assert_eq!(catalog.statues(), original.statues.as_slice());
        assert_eq!(catalog.collections(), original.collections.as_slice());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = JsonCatalog::new(dir.path().join("absent.json")).load().unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonCatalog::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
