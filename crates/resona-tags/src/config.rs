use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Promote embedded pictures into sub-artifacts. When disabled the
    /// extractor drops pictures before sniffing.
    pub extract_art: bool,
    /// Defer writing artifact bytes until something consumes them.
    pub lazy_publish: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            extract_art: true,
            lazy_publish: true,
        }
    }
}

impl ExtractConfig {
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_string_lossy().into_owned();
        let cfg = Config::builder()
            .add_source(File::new(&path, FileFormat::Toml))
            .build()
            .map_err(ConfigError::Parse)?;
        let ec = cfg
            .try_deserialize::<ExtractConfig>()
            .map_err(ConfigError::Parse)?;
        Ok(ec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_enable_art_and_lazy_publish() {
        let cfg = ExtractConfig::default();
        assert!(cfg.extract_art);
        assert!(cfg.lazy_publish);
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resona.toml");
        fs::write(&path, "extract_art = false\nlazy_publish = false\n").unwrap();

        let cfg = ExtractConfig::from_file(&path).unwrap();
        assert!(!cfg.extract_art);
        assert!(!cfg.lazy_publish);
    }

    #[test]
    fn from_file_missing_keys_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resona.toml");
        fs::write(&path, "extract_art = false\n").unwrap();

        let cfg = ExtractConfig::from_file(&path).unwrap();
        assert!(!cfg.extract_art);
        assert!(cfg.lazy_publish);
    }

    #[test]
    fn from_file_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(ExtractConfig::from_file(dir.path().join("absent.toml")).is_err());
    }
}
