use crate::{Error, Result};
use loma_types::ListingId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing loma at another workspace directory
pub const WORKSPACE_ENV: &str = "LOMA_PATH";

const CONFIG_FILE: &str = "config.toml";

/// Directory holding `config.toml` and, usually, the catalog it names.
///
/// `LOMA_PATH` (a leading `~` is expanded) wins over the platform data
/// directory; `~/.loma` is the last resort.
pub fn workspace_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(WORKSPACE_ENV) {
        return Ok(under_home(PathBuf::from(dir)));
    }

    dirs::data_dir()
        .map(|data| data.join("loma"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".loma")))
        .ok_or_else(|| {
            Error::Config(format!(
                "no data or home directory found; set {} to choose a workspace",
                WORKSPACE_ENV
            ))
        })
}

/// `~` and `~/rest` resolve against the home directory; other paths are kept
fn under_home(path: PathBuf) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path,
    }
}

/// Contents of `config.toml`. Every field is optional; CLI flags win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// JSON catalog file; relative paths are taken from the config's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Listing shown when `loma` runs without a subcommand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_listing: Option<ListingId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

impl Config {
    /// `config.toml` inside [`workspace_dir`]
    pub fn default_path() -> Result<PathBuf> {
        Ok(workspace_dir()?.join(CONFIG_FILE))
    }

    /// Read the config at `path`. A missing file means "all defaults".
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        Ok(toml::from_str(&content)?)
    }

    /// Catalog to open: the `--catalog` flag if given, otherwise the
    /// configured entry with relative paths anchored at the config's directory.
    /// `None` means the built-in fixtures.
    pub fn resolve_catalog(&self, flag: Option<&Path>, config_path: &Path) -> Option<PathBuf> {
        if let Some(path) = flag {
            return Some(path.to_path_buf());
        }

        let configured = self.catalog.as_ref()?;
        if configured.is_absolute() {
            return Some(configured.clone());
        }
        let base = config_path.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(under_home(configured.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_every_field() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "catalog = \"catalog.json\"\ndefault_listing = 2\ncolor = false\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(
            config,
            Config {
                catalog: Some(PathBuf::from("catalog.json")),
                default_listing: Some(ListingId(2)),
                color: Some(false),
            }
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_means_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_rejects_bad_toml() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "default_listing = \"two\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_relative_catalog_is_anchored_at_config_dir() {
        let config = Config {
            catalog: Some(PathBuf::from("fixtures/catalog.json")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_catalog(None, Path::new("/srv/loma/config.toml")),
            Some(PathBuf::from("/srv/loma/fixtures/catalog.json"))
        );
    }

    #[test]
    fn test_catalog_flag_wins_over_config() {
        let config = Config {
            catalog: Some(PathBuf::from("catalog.json")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_catalog(
                Some(Path::new("other.json")),
                Path::new("/srv/loma/config.toml")
            ),
            Some(PathBuf::from("other.json"))
        );
        assert_eq!(
            Config::default().resolve_catalog(None, Path::new("/srv/loma/config.toml")),
            None
        );
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(under_home(PathBuf::from("~/shop")), home.join("shop"));
        assert_eq!(under_home(PathBuf::from("~")), home);
        assert_eq!(
            under_home(PathBuf::from("~other/shop")),
            PathBuf::from("~other/shop")
        );
    }
}
