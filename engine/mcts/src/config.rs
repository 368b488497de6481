//! MCTS configuration parameters.

use std::ops::Deref;
use std::time::Duration;

use thiserror::Error;

/// Errors raised by [`MctsConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Exploration constant must be finite and >= 0, got {0}")]
    InvalidExploration(f64),

    #[error("Epsilon must be finite and > 0, got {0}")]
    InvalidEpsilon(f64),

    #[error("Heuristic rollout probability must be in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("At least one determinization is required")]
    NoDeterminizations,

    #[error("Search budget must be positive: {0}")]
    EmptyBudget(String),
}

/// How much work one determinization trial may do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchBudget {
    /// Fixed number of select/expand/rollout/backpropagate iterations
    Iterations(u32),
    /// Wall-clock time per trial
    Time(Duration),
}

impl Default for SearchBudget {
    fn default() -> Self {
        SearchBudget::Iterations(1000)
    }
}

/// What the driver does when a determinized clone cannot be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingFailurePolicy {
    /// Log and continue with the remaining trials
    #[default]
    Skip,
    /// Fail the whole decision on the first failure
    Abort,
}

/// Configuration for determinized Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Exploration constant K in the UCB formula.
    /// 0.0 = pure exploitation.
    pub exploration_constant: f64,

    /// Maximum number of actions played during one rollout.
    pub rollout_length: u32,

    /// Nodes at this depth are not expanded further.
    pub max_tree_depth: u32,

    /// Numerical floor used in the UCB denominators.
    pub epsilon: f64,

    /// Whether rollouts may use the greedy heuristic policy.
    pub use_heuristic_rollouts: bool,

    /// Probability of a greedy heuristic step in a rollout.
    /// 0.0 = always random, 1.0 = always greedy.
    pub heuristic_rollout_probability: f64,

    /// Number of independently sampled worlds per decision.
    pub n_determinizations: u32,

    /// Budget for each determinization trial.
    pub budget: SearchBudget,

    /// Run determinization trials on the rayon thread pool.
    pub parallel: bool,

    /// Handling of determinization failures.
    pub sampling_failure: SamplingFailurePolicy,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            rollout_length: 10,
            max_tree_depth: 100,
            epsilon: 1e-6,
            use_heuristic_rollouts: true,
            heuristic_rollout_probability: 0.9,
            n_determinizations: 5,
            budget: SearchBudget::default(),
            parallel: false,
            sampling_failure: SamplingFailurePolicy::default(),
        }
    }
}

impl MctsConfig {
    /// Create a small, fully deterministic config for testing.
    pub fn for_testing() -> Self {
        Self {
            n_determinizations: 2,
            budget: SearchBudget::Iterations(64),
            heuristic_rollout_probability: 1.0,
            ..Self::default()
        }
    }

    /// Check every numeric parameter once, before any search runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let k = self.exploration_constant;
        if !k.is_finite() || k < 0.0 {
            return Err(ConfigError::InvalidExploration(k));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        let p = self.heuristic_rollout_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidProbability(p));
        }
        if self.n_determinizations == 0 {
            return Err(ConfigError::NoDeterminizations);
        }
        match self.budget {
            SearchBudget::Iterations(0) => {
                return Err(ConfigError::EmptyBudget("0 iterations".into()))
            }
            SearchBudget::Time(d) if d.is_zero() => {
                return Err(ConfigError::EmptyBudget("zero duration".into()))
            }
            _ => {}
        }
        Ok(())
    }

    /// Builder pattern: set the exploration constant K.
    pub fn with_exploration(mut self, k: f64) -> Self {
        self.exploration_constant = k;
        self
    }

    /// Builder pattern: set the rollout length.
    pub fn with_rollout_length(mut self, steps: u32) -> Self {
        self.rollout_length = steps;
        self
    }

    /// Builder pattern: set the maximum tree depth.
    pub fn with_max_tree_depth(mut self, depth: u32) -> Self {
        self.max_tree_depth = depth;
        self
    }

    /// Builder pattern: configure heuristic rollouts.
    pub fn with_heuristic_rollouts(mut self, enabled: bool, probability: f64) -> Self {
        self.use_heuristic_rollouts = enabled;
        self.heuristic_rollout_probability = probability;
        self
    }

    /// Builder pattern: set the number of determinizations.
    pub fn with_determinizations(mut self, n: u32) -> Self {
        self.n_determinizations = n;
        self
    }

    /// Builder pattern: run a fixed number of iterations per trial.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.budget = SearchBudget::Iterations(n);
        self
    }

    /// Builder pattern: run each trial for a wall-clock duration.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.budget = SearchBudget::Time(budget);
        self
    }

    /// Builder pattern: run trials in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder pattern: set the sampling-failure policy.
    pub fn with_sampling_failure(mut self, policy: SamplingFailurePolicy) -> Self {
        self.sampling_failure = policy;
        self
    }
}

/// An [`MctsConfig`] that has passed [`MctsConfig::validate`].
///
/// Built once at construction so per-decision calls skip the check.
#[derive(Debug, Clone)]
pub struct ValidatedConfig(MctsConfig);

impl ValidatedConfig {
    pub fn new(config: MctsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self(config))
    }

    pub fn into_inner(self) -> MctsConfig {
        self.0
    }
}

impl TryFrom<MctsConfig> for ValidatedConfig {
    type Error = ConfigError;

    fn try_from(config: MctsConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl Deref for ValidatedConfig {
    type Target = MctsConfig;

    fn deref(&self) -> &MctsConfig {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert!((config.exploration_constant - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(config.rollout_length, 10);
        assert_eq!(config.max_tree_depth, 100);
        assert!((config.epsilon - 1e-6).abs() < 1e-15);
        assert!(config.use_heuristic_rollouts);
        assert!((config.heuristic_rollout_probability - 0.9).abs() < 1e-12);
        assert_eq!(config.n_determinizations, 5);
        assert_eq!(config.budget, SearchBudget::Iterations(1000));
        assert_eq!(config.sampling_failure, SamplingFailurePolicy::Skip);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_exploration(0.0)
            .with_rollout_length(0)
            .with_determinizations(1)
            .with_time_budget(Duration::from_millis(20));

        assert_eq!(config.exploration_constant, 0.0);
        assert_eq!(config.rollout_length, 0);
        assert_eq!(config.n_determinizations, 1);
        assert_eq!(config.budget, SearchBudget::Time(Duration::from_millis(20)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let cases = [
            (
                MctsConfig::default().with_exploration(-1.0),
                ConfigError::InvalidExploration(-1.0),
            ),
            (
                MctsConfig::default().with_heuristic_rollouts(true, 1.5),
                ConfigError::InvalidProbability(1.5),
            ),
            (
                MctsConfig::default().with_determinizations(0),
                ConfigError::NoDeterminizations,
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }

        let config = MctsConfig {
            epsilon: 0.0,
            ..MctsConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidEpsilon(0.0)));

        assert!(MctsConfig::default().with_iterations(0).validate().is_err());
        assert!(MctsConfig::default()
            .with_time_budget(Duration::ZERO)
            .validate()
            .is_err());
        assert!(MctsConfig::default()
            .with_heuristic_rollouts(false, f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validated_config() {
        let checked = ValidatedConfig::new(MctsConfig::for_testing()).unwrap();
        assert_eq!(checked.n_determinizations, 2);
        assert_eq!(checked.into_inner().budget, SearchBudget::Iterations(64));

        let err = ValidatedConfig::try_from(MctsConfig::default().with_exploration(-1.0));
        assert!(matches!(err, Err(ConfigError::InvalidExploration(_))));
    }
}
