use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_RUN_LENGTH};

/// Deepest search the configuration accepts. Each extra ply multiplies the
/// work by roughly the column count, and depth 6 on the standard board takes
/// a few seconds.
pub const MAX_DEPTH: usize = 6;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub run_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            run_length: DEFAULT_RUN_LENGTH,
        }
    }
}

/// Which leaf evaluation the search engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    Neutral,
    Window,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: usize,
    pub parallel: bool,
    pub heuristic: HeuristicKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 4,
            parallel: false,
            heuristic: HeuristicKind::Neutral,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be >= 1".into()));
        }
        if board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be >= 1".into()));
        }
        if board.run_length == 0 {
            return Err(ConfigError::Validation(
                "board.run_length must be >= 1".into(),
            ));
        }
        if board.run_length > board.rows.max(board.cols) {
            return Err(ConfigError::Validation(
                "board.run_length must fit on the board".into(),
            ));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.board.run_length, 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
cols = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.cols, 9);
        // Other fields should be defaults
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.search.depth, 4);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_heuristic_names() {
        let config: AppConfig = toml::from_str("[search]\nheuristic = \"window\"\n").unwrap();
        assert_eq!(config.search.heuristic, HeuristicKind::Window);
        assert!(toml::from_str::<AppConfig>("[search]\nheuristic = \"psychic\"\n").is_err());
    }

    #[test]
    fn test_validation_rejects_zero_dimensions() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.cols = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.run_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unreachable_run_length() {
        let mut config = AppConfig::default();
        config.board.run_length = 8;
        assert!(config.validate().is_err());
        config.board.run_length = 7;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_deep_search() {
        let mut config = AppConfig::default();
        config.search.depth = MAX_DEPTH;
        assert!(config.validate().is_ok());
        config.search.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 8
run_length = 5

[search]
depth = 2
parallel = true
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.run_length, 5);
        assert_eq!(config.search.depth, 2);
        assert!(config.search.parallel);
        // Others are defaults
        assert_eq!(config.board.cols, 7);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
