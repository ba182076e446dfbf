//! Board configuration.
//!
//! A `BoardConfig` fixes the grid dimensions and the hand size before a
//! board is built. Configs can be assembled with the builder methods or
//! read from TOML:
//!
//! ```toml
//! rows = 3
//! columns = 5
//! hand_size = 5
//! shuffle_seed = 7   # optional
//! ```

use serde::{Deserialize, Serialize};

use super::error::{BoardError, BoardResult};

/// Default number of rows (the classic 3x5 layout).
pub const DEFAULT_ROWS: usize = 3;
/// Default number of columns.
pub const DEFAULT_COLUMNS: usize = 5;
/// Default opening and maximum hand size.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (at least 1).
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Number of columns (odd and greater than 1).
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Cards dealt at start. Also the size the draw step refills to.
    #[serde(default = "default_hand_size")]
    pub hand_size: usize,

    /// Shuffle both decks with this seed before dealing.
    /// `None` deals in deck order.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

fn default_hand_size() -> usize {
    DEFAULT_HAND_SIZE
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            hand_size: DEFAULT_HAND_SIZE,
            shuffle_seed: None,
        }
    }
}

impl BoardConfig {
    /// Create a config with the given dimensions and the default hand size.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Shuffle decks with the given seed before dealing.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Check the dimension and hand size constraints.
    pub fn validate(&self) -> BoardResult<()> {
        if self.rows == 0 {
            return Err(BoardError::invalid_argument("board must have at least one row"));
        }
        if self.columns <= 1 || self.columns % 2 == 0 {
            return Err(BoardError::invalid_argument(format!(
                "board needs an odd column count greater than 1, got {}",
                self.columns
            )));
        }
        if self.hand_size == 0 {
            return Err(BoardError::invalid_argument("hand size must be positive"));
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> BoardResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| BoardError::invalid_argument(format!("malformed board config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.rows, 3);
        assert_eq!(config.columns, 5);
        assert_eq!(config.cell_count(), 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = BoardConfig::new(1, 3).with_hand_size(2).with_shuffle_seed(9);
        assert_eq!(config.hand_size, 2);
        assert_eq!(config.shuffle_seed, Some(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(BoardConfig::new(0, 5).validate().unwrap_err().is_invalid_argument());
        assert!(BoardConfig::new(3, 4).validate().unwrap_err().is_invalid_argument());
        assert!(BoardConfig::new(3, 1).validate().unwrap_err().is_invalid_argument());
        assert!(BoardConfig::new(3, 5)
            .with_hand_size(0)
            .validate()
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_from_toml() {
        let config = BoardConfig::from_toml_str("rows = 2\ncolumns = 7\nhand_size = 4\n").unwrap();
        assert_eq!(config, BoardConfig::new(2, 7).with_hand_size(4));
    }

    #[test]
    fn test_from_toml_defaults_and_seed() {
        let config = BoardConfig::from_toml_str("shuffle_seed = 11").unwrap();
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.shuffle_seed, Some(11));
    }

    #[test]
    fn test_from_toml_rejects_even_width() {
        let err = BoardConfig::from_toml_str("columns = 6").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = BoardConfig::from_toml_str("rows = \"three\"").unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
