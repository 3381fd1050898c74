//! # Cursor Configuration
//!
//! Serializable settings for the board layout, the controller's own
//! transform, and startup behaviour. Loaded from TOML or RON through the
//! [`Config`] trait.
//!
//! ```toml
//! start_active = true
//! log_level = "debug"
//!
//! [board]
//! origin = [0.0, 0.0]
//! cell_size = [32.0, 32.0]
//! columns = 10
//! rows = 10
//!
//! [transform]
//! position = [0.0, 0.0]
//! scale = [1.0, 1.0]
//! ```

use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec2;
use crate::input::CursorTransform;

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError};

/// # Grid Configuration
///
/// Layout of a rectangular board in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Pixel position of the top-left corner of cell (0, 0)
    pub origin: Vec2,
    /// Width and height of one cell in pixels
    pub cell_size: Vec2,
    /// Number of columns
    pub columns: i32,
    /// Number of rows
    pub rows: i32,
}

impl GridConfig {
    /// Create a grid configuration with the origin at zero
    pub fn new(cell_size: Vec2, columns: i32, rows: i32) -> Self {
        Self {
            origin: Vec2::zeros(),
            cell_size,
            columns,
            rows,
        }
    }

    /// Set the board origin
    #[must_use]
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Validate the grid layout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size.x <= 0.0 || self.cell_size.y <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cell size must be positive, got [{}, {}]",
                self.cell_size.x, self.cell_size.y
            )));
        }
        if self.columns < 0 || self.rows < 0 {
            return Err(ConfigError::Invalid(format!(
                "grid dimensions must not be negative, got {}x{}",
                self.columns, self.rows
            )));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(Vec2::new(32.0, 32.0), 10, 10)
    }
}

/// # Complete Cursor Configuration
///
/// Top-level configuration hosts load before building a controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Board layout
    pub board: GridConfig,
    /// Controller offset and scale removed from pointer positions
    pub transform: CursorTransform,
    /// Whether the controller accepts input as soon as it is built
    pub start_active: bool,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl CursorConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            board: GridConfig::default(),
            transform: CursorTransform::default(),
            start_active: true,
            log_level: "info".to_string(),
        }
    }

    /// Set the board layout
    #[must_use]
    pub fn with_board(mut self, board: GridConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the controller transform
    #[must_use]
    pub fn with_transform(mut self, transform: CursorTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Set whether the controller starts active
    #[must_use]
    pub fn with_start_active(mut self, active: bool) -> Self {
        self.start_active = active;
        self
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        if self.transform.scale.x == 0.0 || self.transform.scale.y == 0.0 {
            return Err(ConfigError::Invalid(format!(
                "transform scale must be non-zero, got [{}, {}]",
                self.transform.scale.x, self.transform.scale.y
            )));
        }
        Ok(())
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for CursorConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CursorConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.start_active);
        assert_eq!(config.board.columns, 10);
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
            start_active = false
            log_level = "debug"

            [board]
            origin = [16.0, 8.0]
            cell_size = [24.0, 24.0]
            columns = 8
            rows = 6

            [transform]
            position = [4.0, 4.0]
            scale = [2.0, 2.0]
        "#;
        let config = CursorConfig::parse("cursor.toml", text).unwrap();
        assert!(!config.start_active);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.board.origin, Vec2::new(16.0, 8.0));
        assert_eq!(config.board.columns, 8);
        assert_eq!(config.transform.scale, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_parse_toml_partial_uses_defaults() {
        let config = CursorConfig::parse("cursor.toml", "log_level = \"warn\"").unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.board, GridConfig::default());
        assert!(config.start_active);
    }

    #[test]
    fn test_parse_ron() {
        let text = "(start_active: false, board: (origin: [0.0, 0.0], cell_size: [8.0, 8.0], columns: 3, rows: 3))";
        let config = CursorConfig::parse("cursor.ron", text).unwrap();
        assert!(!config.start_active);
        assert_eq!(config.board.columns, 3);
    }

    fn round_trip(extension: &str) {
        let config = CursorConfig::new()
            .with_board(GridConfig::new(Vec2::new(24.0, 16.0), 7, 5).with_origin(Vec2::new(8.0, 4.0)))
            .with_transform(CursorTransform::new(Vec2::new(64.0, 48.0), Vec2::new(1.5, 2.0)))
            .with_start_active(false)
            .with_log_level("trace");

        let path = std::env::temp_dir().join(format!(
            "board_cursor_config_{}.{extension}",
            std::process::id()
        ));
        let path = path.to_str().unwrap();

        config.save_to_file(path).unwrap();
        let loaded = CursorConfig::load_from_file(path);
        let _ = std::fs::remove_file(path);

        assert_eq!(loaded.unwrap(), config);
    }

    #[test]
    fn test_save_load_toml() {
        round_trip("toml");
    }

    #[test]
    fn test_save_load_ron() {
        round_trip("ron");
    }

    #[test]
    fn test_save_unsupported_format() {
        let result = CursorConfig::default().save_to_file("cursor.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_unsupported_format() {
        let result = CursorConfig::parse("cursor.json", "{}");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_cell_size() {
        let config = CursorConfig::new().with_board(GridConfig::new(Vec2::new(0.0, 32.0), 4, 4));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_invalid_scale() {
        let config = CursorConfig::new()
            .with_transform(CursorTransform::new(Vec2::zeros(), Vec2::new(1.0, 0.0)));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_dimensions() {
        let grid = GridConfig::new(Vec2::new(8.0, 8.0), -1, 4);
        assert!(grid.validate().is_err());
    }
}
