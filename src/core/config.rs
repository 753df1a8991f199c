//! Game configuration.
//!
//! A `GameConfig` carries every tunable the engine accepts at
//! construction: grid size, move policy, max-turn ceiling, replacement
//! budget and the RNG seed for AI players. It can be built in code with
//! the `with_*` setters or loaded from TOML:
//!
//! ```
//! use turnboard::core::{GameConfig, PolicyKind};
//!
//! let config = GameConfig::from_toml_str(r#"
//!     grid_size = 4
//!     policy = "blank_only"
//! "#).unwrap();
//!
//! assert_eq!(config.grid_size, 4);
//! assert_eq!(config.policy, PolicyKind::BlankOnly);
//! assert_eq!(config.max_turns, 15);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Which move-validation policy guards the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Moves only into empty cells.
    BlankOnly,
    /// Moves into empty cells, plus a limited number of overwrites per mark.
    #[default]
    Replacement,
}

/// Largest accepted `grid_size`.
pub const MAX_GRID_SIZE: usize = 32;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: usize,

    /// Successful moves after which the game is declared a draw.
    pub max_turns: u32,

    /// Overwrites each mark may perform under [`PolicyKind::Replacement`].
    pub replacement_budget: u32,

    /// Move-validation policy.
    pub policy: PolicyKind,

    /// Seed for AI players and randomized schedulers.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 3,
            max_turns: 15,
            replacement_budget: 3,
            policy: PolicyKind::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::default().merge_toml_str(text)
    }

    /// Apply the keys present in a TOML document on top of `self`.
    ///
    /// Keys the document leaves out keep their current value, so callers
    /// can prepare a base (for example a mode-specific policy) that a
    /// file only partially overrides.
    ///
    /// ```
    /// use turnboard::core::{GameConfig, PolicyKind};
    ///
    /// let base = GameConfig::default().with_policy(PolicyKind::BlankOnly);
    /// let config = base.merge_toml_str("seed = 9").unwrap();
    /// assert_eq!(config.policy, PolicyKind::BlankOnly);
    /// assert_eq!(config.seed, 9);
    /// ```
    pub fn merge_toml_str(mut self, text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        if let Some(grid_size) = file.grid_size {
            self.grid_size = grid_size;
        }
        if let Some(max_turns) = file.max_turns {
            self.max_turns = max_turns;
        }
        if let Some(budget) = file.replacement_budget {
            self.replacement_budget = budget;
        }
        if let Some(policy) = file.policy {
            self.policy = policy;
        }
        if let Some(seed) = file.seed {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject values the engine cannot play with.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(EngineError::invalid_config("grid_size must be at least 1"));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(EngineError::invalid_config(format!(
                "grid_size must be at most {MAX_GRID_SIZE}"
            )));
        }
        if self.max_turns == 0 {
            return Err(EngineError::invalid_config("max_turns must be at least 1"));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    #[must_use]
    pub fn with_replacement_budget(mut self, budget: u32) -> Self {
        self.replacement_budget = budget;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// TOML layer: only the keys a document actually sets.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    grid_size: Option<usize>,
    max_turns: Option<u32>,
    replacement_budget: Option<u32>,
    policy: Option<PolicyKind>,
    seed: Option<u64>,
}
