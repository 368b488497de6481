//! Heuristic weight configuration.

use thiserror::Error;

/// Errors raised when validating weights.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    #[error("Heuristic weight `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Strategy weights applied to the five sub-scores.
///
/// Each weight multiplies one sub-score:
///
/// | Weight | Sub-score |
/// |---|---|
/// | `combo_focus` | set completion |
/// | `safety_focus` | Maki race |
/// | `denial_focus` | Wasabi combo |
/// | `maki_priority` | Pudding standing |
/// | `pudding_priority` | Chopsticks |
///
/// The names predate the current pairing; the defaults were tuned against
/// this pairing and are kept as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeights {
    /// High = aggressive combo hunting
    pub combo_focus: f64,
    /// High = safe immediate rewards
    pub safety_focus: f64,
    /// High = block opponents
    pub denial_focus: f64,
    /// High = compete hard for Maki
    pub maki_priority: f64,
    /// High = value Pudding more
    pub pudding_priority: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            combo_focus: 1.0,
            safety_focus: 1.0,
            denial_focus: 0.5,
            maki_priority: 1.0,
            pudding_priority: 0.7,
        }
    }
}

impl HeuristicWeights {
    /// All weights zero: the heuristic reduces to the raw game score.
    pub fn score_only() -> Self {
        Self {
            combo_focus: 0.0,
            safety_focus: 0.0,
            denial_focus: 0.0,
            maki_priority: 0.0,
            pudding_priority: 0.0,
        }
    }

    /// Check that every weight is a finite number.
    pub fn validate(&self) -> Result<(), WeightsError> {
        let named = [
            ("combo_focus", self.combo_focus),
            ("safety_focus", self.safety_focus),
            ("denial_focus", self.denial_focus),
            ("maki_priority", self.maki_priority),
            ("pudding_priority", self.pudding_priority),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = HeuristicWeights::default();
        assert!((w.combo_focus - 1.0).abs() < 1e-9);
        assert!((w.safety_focus - 1.0).abs() < 1e-9);
        assert!((w.denial_focus - 0.5).abs() < 1e-9);
        assert!((w.maki_priority - 1.0).abs() < 1e-9);
        assert!((w.pudding_priority - 0.7).abs() < 1e-9);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_negative_weights_are_allowed() {
        let w = HeuristicWeights {
            denial_focus: -2.0,
            ..HeuristicWeights::default()
        };
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let w = HeuristicWeights {
            maki_priority: f64::NAN,
            ..HeuristicWeights::default()
        };
        match w.validate() {
            Err(WeightsError::NonFinite { name, .. }) => assert_eq!(name, "maki_priority"),
            other => panic!("expected NonFinite, got {:?}", other),
        }

        let w = HeuristicWeights {
            combo_focus: f64::INFINITY,
            ..HeuristicWeights::default()
        };
        assert!(w.validate().is_err());
    }
}
