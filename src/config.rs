//! Engine configuration.
//!
//! Every tunable the search consults lives in [`EngineConfig`] and is passed
//! in explicitly. A TOML file may override any subset of the defaults:
//!
//! ```toml
//! endgame_empties = 11
//! pass_rule = "concede"
//! move_order = "raster"
//! mobility_term = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CORNER_CONTROL, EFFORT_BUDGET, EFFORT_PER_MOVE, ENDGAME_EMPTIES, MOBILITY_COEFFICIENT,
};
use crate::error::{Error, Result};
use crate::position::MoveOrder;

/// What the search does when the side to move has no legal move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassRule {
    /// The turn passes and the game continues. Game over only when both sides are stuck.
    #[default]
    Continue,
    /// Being unable to move scores as a loss for the stuck side.
    Concede,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Exact search is used when fewer than this many cells are empty.
    pub endgame_empties: usize,
    /// Corners either side must hold before the mobility heuristic is used.
    pub corner_control: usize,
    /// Starting effort budget of the heuristic search.
    pub effort_budget: f64,
    /// Budget spent per available move at every ply.
    pub effort_per_move: f64,
    /// Add the mobility term to the static evaluation.
    pub mobility_term: bool,
    pub mobility_coefficient: f64,
    pub pass_rule: PassRule,
    pub move_order: MoveOrder,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            endgame_empties: ENDGAME_EMPTIES,
            corner_control: CORNER_CONTROL,
            effort_budget: EFFORT_BUDGET,
            effort_per_move: EFFORT_PER_MOVE,
            mobility_term: false,
            mobility_coefficient: MOBILITY_COEFFICIENT,
            pass_rule: PassRule::default(),
            move_order: MoveOrder::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(self) -> Result<Self> {
        if self.effort_per_move.is_nan() || self.effort_per_move <= 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!("effort_per_move must be positive, got {}", self.effort_per_move),
            });
        }
        if !self.effort_budget.is_finite() || self.effort_budget <= 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "effort_budget must be positive and finite, got {}",
                    self.effort_budget
                ),
            });
        }
        if self.corner_control > 4 {
            return Err(Error::InvalidConfiguration {
                message: format!("corner_control must be at most 4, got {}", self.corner_control),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_toml_str(
            "endgame_empties = 12\npass_rule = \"concede\"\nmove_order = \"raster\"\n",
        )
        .unwrap();
        assert_eq!(config.endgame_empties, 12);
        assert_eq!(config.pass_rule, PassRule::Concede);
        assert_eq!(config.move_order, MoveOrder::Raster);
        assert_eq!(config.effort_budget, EFFORT_BUDGET);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(EngineConfig::from_toml_str("effort_per_move = 0.0").is_err());
        assert!(EngineConfig::from_toml_str("corner_control = 5").is_err());
        assert!(EngineConfig::from_toml_str("effort_budget = 0.0").is_err());
        assert!(EngineConfig::from_toml_str("effort_budget = -1.5").is_err());
        assert!(EngineConfig::from_toml_str("effort_budget = 0.25").is_ok());
        assert!(EngineConfig::from_toml_str("no_such_field = 1").is_err());
        assert!(EngineConfig::from_toml_str("pass_rule = \"skip\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file(Path::new("/nonexistent/engine.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
