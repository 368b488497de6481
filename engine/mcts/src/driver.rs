//! Determinization driver: one decision from an imperfect-information state.
//!
//! The driver samples `n_determinizations` concrete worlds consistent with
//! what the deciding player can see, runs an independent search on each and
//! sums root visit counts per legal action. The most visited action wins.
//!
//! Every trial gets its own `ChaCha20Rng` seeded from the decision RNG before
//! any trial starts, so results are identical whether trials run in sequence
//! or on the rayon pool.

use std::time::Instant;

use engine_core::{DeterminizeError, GameState, PlayerId, StateHeuristic};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::{MctsConfig, SamplingFailurePolicy, SearchBudget, ValidatedConfig};
use crate::search::{MctsSearch, SearchError};
use crate::tally::ActionTally;

/// Outcome of one decision.
#[derive(Debug, Clone)]
pub struct Decision<A> {
    /// The chosen action
    pub action: A,
    /// Visits summed over all completed trials
    pub tally: ActionTally<A>,
    /// Trials whose search ran to completion
    pub trials_completed: u32,
    /// Trials dropped because sampling a world failed
    pub trials_skipped: u32,
    /// Search iterations over all completed trials
    pub iterations: u64,
    /// Iterations of each completed trial, in trial order
    pub trial_iterations: Vec<u32>,
}

/// Result of one trial.
struct Trial<A> {
    tally: ActionTally<A>,
    iterations: u32,
}

/// Choose an action for `player`. See [`decide`] for details.
pub fn choose_action<S, H>(
    state: &S,
    legal_actions: &[S::Action],
    player: PlayerId,
    heuristic: &H,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<S::Action, SearchError>
where
    S: GameState,
    H: StateHeuristic<S> + ?Sized,
{
    decide(state, legal_actions, player, heuristic, config, rng).map(|d| d.action)
}

/// Run every determinization trial and aggregate their root visits.
///
/// `legal_actions` is the deciding player's action list; its order decides
/// ties. Root children of a sampled world that are not in this list are
/// ignored. `config` is validated first; callers that hold a
/// [`ValidatedConfig`] use [`decide_validated`].
pub fn decide<S, H>(
    state: &S,
    legal_actions: &[S::Action],
    player: PlayerId,
    heuristic: &H,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<Decision<S::Action>, SearchError>
where
    S: GameState,
    H: StateHeuristic<S> + ?Sized,
{
    config.validate()?;
    run_decision(state, legal_actions, player, heuristic, config, rng)
}

/// [`decide`] with a config that was validated at construction.
pub fn decide_validated<S, H>(
    state: &S,
    legal_actions: &[S::Action],
    player: PlayerId,
    heuristic: &H,
    config: &ValidatedConfig,
    rng: &mut ChaCha20Rng,
) -> Result<Decision<S::Action>, SearchError>
where
    S: GameState,
    H: StateHeuristic<S> + ?Sized,
{
    run_decision(state, legal_actions, player, heuristic, config, rng)
}

fn run_decision<S, H>(
    state: &S,
    legal_actions: &[S::Action],
    player: PlayerId,
    heuristic: &H,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<Decision<S::Action>, SearchError>
where
    S: GameState,
    H: StateHeuristic<S> + ?Sized,
{
    if legal_actions.is_empty() {
        return Err(SearchError::NoLegalActions);
    }

    let start = Instant::now();
    let n = config.n_determinizations;
    let seeds: Vec<u64> = (0..n).map(|_| rng.gen()).collect();

    let mut tally = ActionTally::new(legal_actions);
    let mut completed = 0;
    let mut skipped = 0;
    let mut iterations = 0u64;
    let mut trial_iterations = Vec::with_capacity(n as usize);

    let mut absorb = |index: usize, result: Result<Trial<S::Action>, DeterminizeError>| {
        match result {
            Ok(trial) => {
                tally.merge(&trial.tally);
                iterations += u64::from(trial.iterations);
                trial_iterations.push(trial.iterations);
                completed += 1;
                Ok(())
            }
            Err(e) => match config.sampling_failure {
                SamplingFailurePolicy::Abort => Err(SearchError::Determinize(e)),
                SamplingFailurePolicy::Skip => {
                    warn!(trial = index, error = %e, "Skipping failed determinization");
                    skipped += 1;
                    Ok(())
                }
            },
        }
    };

    if config.parallel {
        // Each trial gets its full budget from the moment it starts. The cap
        // allows one budget per wave of trials on the pool, so queued
        // trials are not starved and all of them finish together.
        let cap = match config.budget {
            SearchBudget::Time(budget) => {
                let waves = n.div_ceil(rayon::current_num_threads().max(1) as u32);
                Some(start + budget * waves)
            }
            SearchBudget::Iterations(_) => None,
        };
        let jobs: Vec<(u64, S)> = seeds.iter().map(|&seed| (seed, state.clone())).collect();
        let results: Vec<_> = jobs
            .into_par_iter()
            .enumerate()
            .map(|(index, (seed, root))| {
                run_trial(index, root, legal_actions, player, heuristic, config, seed, cap)
            })
            .collect();
        for (index, result) in results.into_iter().enumerate() {
            absorb(index, result)?;
        }
    } else {
        for (index, &seed) in seeds.iter().enumerate() {
            let result = run_trial(
                index,
                state.clone(),
                legal_actions,
                player,
                heuristic,
                config,
                seed,
                None,
            );
            absorb(index, result)?;
        }
    }

    if completed == 0 {
        return Err(SearchError::AllDeterminizationsFailed { attempted: n });
    }

    let action = tally
        .best()
        .cloned()
        .ok_or(SearchError::NoLegalActions)?;

    debug!(
        player,
        trials = completed,
        skipped,
        iterations,
        total_visits = tally.total(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        action = ?action,
        "Decision made"
    );

    Ok(Decision {
        action,
        tally,
        trials_completed: completed,
        trials_skipped: skipped,
        iterations,
        trial_iterations,
    })
}

/// Sample one world and search it with a fresh seeded RNG.
#[allow(clippy::too_many_arguments)]
fn run_trial<S, H>(
    index: usize,
    state: S,
    legal_actions: &[S::Action],
    player: PlayerId,
    heuristic: &H,
    config: &MctsConfig,
    seed: u64,
    cap: Option<Instant>,
) -> Result<Trial<S::Action>, DeterminizeError>
where
    S: GameState,
    H: StateHeuristic<S> + ?Sized,
{
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let world = state.clone_determinized(player, &mut rng)?;

    let mut search = MctsSearch::new(world, player, heuristic, config);
    let stats = search.run(&mut rng, cap);

    let mut tally = ActionTally::new(legal_actions);
    for (action, visits) in search.tree().root_visits() {
        tally.add(&action, u64::from(visits));
    }

    debug!(
        trial = index,
        seed,
        iterations = stats.iterations,
        tree_nodes = stats.tree_nodes,
        max_depth = stats.max_depth,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "Determinization searched"
    );

    Ok(Trial {
        tally,
        iterations: stats.iterations,
    })
}
