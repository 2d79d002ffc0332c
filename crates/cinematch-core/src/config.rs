//! Configuration for cinematch
//!
//! Configuration lives in a TOML file. Lookup order:
//! 1. an explicit path (`--config`)
//! 2. `$CINEMATCH_CONFIG_DIR/config.toml`
//! 3. `<platform config dir>/cinematch/config.toml`
//!
//! A missing file in locations 2 and 3 falls back to defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_invalid;
use crate::error::{CinematchError, Result};

pub use types::{CinematchConfig, DataConfig, DisplayConfig, RecommendConfig, TextConfig};

const CONFIG_DIR: &str = "cinematch";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CINEMATCH_CONFIG_DIR";

impl CinematchConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    CinematchError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the configuration from `explicit`, or from the default location.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CinematchError::io_operation(
                    "read config",
                    path.display(),
                    "file does not exist",
                ));
            }
            return Self::load(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                debug!(error = %e, "config_dir_unavailable");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            debug!(path = %path.display(), "config_not_found_using_defaults");
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Load configuration from a file.
    ///
    /// Relative data paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CinematchError::io_operation("read config", path.display(), e))?;
        let mut config: CinematchConfig = toml::from_str(&content)?;

        if let Some(base) = path.parent() {
            config.data.rebase(base);
        }

        config.validate()?;
        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Reject values the recommender cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.recommend.top_k == 0 {
            bail_invalid!("recommend.top_k", "0 (must be at least 1)");
        }
        if self.text.min_token_len == 0 {
            bail_invalid!("text.min_token_len", "0 (must be at least 1)");
        }
        if self.display.limit == 0 {
            bail_invalid!("display.limit", "0 (must be at least 1)");
        }
        Ok(())
    }
}

impl DataConfig {
    fn rebase(&mut self, base: &Path) {
        for path in [&mut self.movies, &mut self.keywords, &mut self.ratings] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CorpusField;
    use crate::error::ExitCode;
    use crate::resolve::ResolveStrategy;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = CinematchConfig::default();
        assert_eq!(config.recommend.top_k, 9);
        assert_eq!(config.recommend.corpus, CorpusField::Keywords);
        assert_eq!(config.recommend.resolve, ResolveStrategy::ExactThenSubstring);
        assert!(!config.recommend.cache_index);
        assert_eq!(config.text.min_token_len, 2);
        assert!(!config.text.stemming);
        assert_eq!(config.display.limit, 5);
        assert_eq!(config.data.movies, PathBuf::from("movies_metadata.csv"));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[recommend]\ntop_k = 3\ncorpus = \"overview\"\nresolve = \"substring\"\n",
        )
        .unwrap();

        let config = CinematchConfig::load(&path).unwrap();
        assert_eq!(config.recommend.top_k, 3);
        assert_eq!(config.recommend.corpus, CorpusField::Overview);
        assert_eq!(config.recommend.resolve, ResolveStrategy::Substring);
        assert_eq!(config.display.limit, 5);
    }

    #[test]
    fn test_load_rebases_relative_data_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[data]\nmovies = \"tables/movies.csv\"\nratings = \"/abs/ratings.csv\"\n",
        )
        .unwrap();

        let config = CinematchConfig::load(&path).unwrap();
        assert_eq!(config.data.movies, dir.path().join("tables/movies.csv"));
        assert_eq!(config.data.keywords, dir.path().join("keywords.csv"));
        assert_eq!(config.data.ratings, PathBuf::from("/abs/ratings.csv"));
    }

    #[test]
    fn test_load_rejects_zero_top_k() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[recommend]\ntop_k = 0\n").unwrap();

        let err = CinematchConfig::load(&path).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Usage);
    }

    #[test]
    fn test_load_rejects_unknown_corpus() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[recommend]\ncorpus = \"genres\"\n").unwrap();

        assert!(matches!(
            CinematchConfig::load(&path),
            Err(CinematchError::Toml(_))
        ));
    }

    #[test]
    fn test_discover_missing_explicit_path_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(CinematchConfig::discover(Some(&missing)).is_err());
    }
}
