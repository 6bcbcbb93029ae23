//! Game configuration.
//!
//! `GridConfig` fixes everything that stays constant for the lifetime of a
//! game: grid dimensions, the per-move cell bounds, and how long the
//! end-of-game announcement is held before the winner is revealed.
//!
//! Configs are built in code with the `with_*` builders or loaded from TOML:
//!
//! ```toml
//! rows = 6
//! cols = 7
//! min_cells = 1
//! max_cells = 6
//! reveal_delay_ms = 3000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Largest grid a config may describe.
pub const MAX_GRID_CELLS: usize = 4096;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Fixed parameters of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of rows (R).
    pub rows: usize,

    /// Number of columns (C).
    pub cols: usize,

    /// Fewest cells a single move may claim.
    pub min_cells: usize,

    /// Most cells a single move may claim.
    pub max_cells: usize,

    /// How long the terminal announcement is shown before the winner is
    /// revealed. Zero skips the intermediate phase.
    pub reveal_delay_ms: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 7,
            min_cells: 1,
            max_cells: 6,
            reveal_delay_ms: 3000,
        }
    }
}

impl GridConfig {
    /// Set the grid dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the inclusive per-move cell bounds.
    #[must_use]
    pub fn with_cell_bounds(mut self, min_cells: usize, max_cells: usize) -> Self {
        self.min_cells = min_cells;
        self.max_cells = max_cells;
        self
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Reveal delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Total number of cells on the grid, saturating at `usize::MAX`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// True iff `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// The bottom-right corner.
    #[must_use]
    pub fn far_corner(&self) -> Position {
        Position::new(self.rows.saturating_sub(1), self.cols.saturating_sub(1))
    }

    /// The corner a move must include, given how many moves precede it.
    ///
    /// The first move of the game must take the top-left corner and the
    /// second (the opponent's opening) the bottom-right one.
    ///
    /// ```
    /// use no67::core::{GridConfig, Position};
    ///
    /// let config = GridConfig::default();
    /// assert_eq!(config.opening_corner(0), Some(Position::new(0, 0)));
    /// assert_eq!(config.opening_corner(1), Some(Position::new(5, 6)));
    /// assert_eq!(config.opening_corner(2), None);
    /// ```
    #[must_use]
    pub fn opening_corner(&self, move_count: u32) -> Option<Position> {
        match move_count {
            0 => Some(Position::ORIGIN),
            1 => Some(self.far_corner()),
            _ => None,
        }
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GridConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Validation("rows and cols must be > 0".into()));
        }
        let cells = self.rows.checked_mul(self.cols).unwrap_or(usize::MAX);
        if cells > MAX_GRID_CELLS {
            return Err(ConfigError::Validation(format!(
                "grid of {} x {} exceeds {} cells",
                self.rows, self.cols, MAX_GRID_CELLS
            )));
        }
        if cells < 2 {
            return Err(ConfigError::Validation(
                "grid needs at least 2 cells so the opening corners differ".into(),
            ));
        }
        if self.min_cells == 0 {
            return Err(ConfigError::Validation("min_cells must be > 0".into()));
        }
        if self.min_cells > self.max_cells {
            return Err(ConfigError::Validation(format!(
                "min_cells ({}) must not exceed max_cells ({})",
                self.min_cells, self.max_cells
            )));
        }
        Ok(())
    }
}
