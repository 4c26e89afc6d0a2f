//! Error taxonomy for rejected intents and bad configuration.
use thiserror::Error;

use crate::phase::{GamePhase, Intent};

/// Reasons the engine refuses an intent. A rejection never mutates the game.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("upgrade costs {cost} but only {available:.1} distance is available")]
    InsufficientFunds { cost: u64, available: f64 },
    #[error("no energy left to waddle")]
    InsufficientEnergy,
    #[error("unknown upgrade track `{0}`")]
    InvalidTrackId(String),
    #[error("intent `{intent}` is not accepted while {phase}")]
    IntentRejected { intent: Intent, phase: GamePhase },
}

/// Problems loading or validating a [`crate::config::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid game config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let funds = GameError::InsufficientFunds {
            cost: 15,
            available: 12.5,
        };
        assert_eq!(
            funds.to_string(),
            "upgrade costs 15 but only 12.5 distance is available"
        );
        let rejected = GameError::IntentRejected {
            intent: Intent::ManualAction,
            phase: GamePhase::GameOver,
        };
        assert!(rejected.to_string().contains("manual_action"));
        assert!(rejected.to_string().contains("game_over"));
        assert!(
            GameError::InvalidTrackId("turbo".into())
                .to_string()
                .contains("turbo")
        );
    }

    #[test]
    fn parse_errors_convert() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
