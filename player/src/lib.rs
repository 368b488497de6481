//! Determinized MCTS player for Sushi Go.
//!
//! Wires the central configuration, the Sushi Go heuristic and the mcts
//! driver into a single agent the host framework calls once per decision:
//!
//! ```rust,ignore
//! use player::{init_tracing, MctsPlayer, PlayerSettings};
//!
//! let settings = PlayerSettings::load()?;
//! init_tracing(&settings.log_level)?;
//! let mut agent = MctsPlayer::from_settings(&settings)?;
//!
//! let legal = state.legal_actions();
//! let card = agent.choose_action(&state, &legal)?;
//! ```

mod error;
mod mcts_player;
pub mod settings;

pub use error::PlayerError;
pub use mcts_player::MctsPlayer;
pub use settings::PlayerSettings;

/// Install a fmt subscriber filtered by RUST_LOG, or by `level` when unset.
pub fn init_tracing(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
}
