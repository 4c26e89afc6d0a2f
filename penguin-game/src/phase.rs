//! Game lifecycle phases and the intents the view may send.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level state of a game. Fishing is tracked separately as a pause within `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Waiting for the player to dismiss the welcome popup.
    #[default]
    WelcomePending,
    /// Steady state: manual actions, purchases and fishing are accepted.
    Running,
    /// One penguin left under low energy; the player may buy energy or give up.
    FinalChancePending,
    /// Terminal. Nothing mutates the game any more.
    GameOver,
}

impl GamePhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WelcomePending => "welcome_pending",
            Self::Running => "running",
            Self::FinalChancePending => "final_chance_pending",
            Self::GameOver => "game_over",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver)
    }

    /// Whether scheduled timers fire in this phase.
    #[must_use]
    pub const fn ticks(self) -> bool {
        matches!(self, Self::Running | Self::FinalChancePending)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User intents forwarded from the view to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Start,
    ManualAction,
    Purchase,
    CatchFish,
    DismissFinalChance,
}

impl Intent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::ManualAction => "manual_action",
            Self::Purchase => "purchase",
            Self::CatchFish => "catch_fish",
            Self::DismissFinalChance => "dismiss_final_chance",
        }
    }

    /// The only phase in which this intent is accepted.
    #[must_use]
    pub const fn accepted_in(self) -> GamePhase {
        match self {
            Self::Start => GamePhase::WelcomePending,
            Self::ManualAction | Self::Purchase | Self::CatchFish => GamePhase::Running,
            Self::DismissFinalChance => GamePhase::FinalChancePending,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_live_phases_tick() {
        assert!(!GamePhase::WelcomePending.ticks());
        assert!(GamePhase::Running.ticks());
        assert!(GamePhase::FinalChancePending.ticks());
        assert!(!GamePhase::GameOver.ticks());
        assert!(GamePhase::GameOver.is_terminal());
    }

    #[test]
    fn intents_map_to_single_phase() {
        assert_eq!(Intent::Start.accepted_in(), GamePhase::WelcomePending);
        assert_eq!(Intent::Purchase.accepted_in(), GamePhase::Running);
        assert_eq!(
            Intent::DismissFinalChance.accepted_in(),
            GamePhase::FinalChancePending
        );
        assert_eq!(Intent::CatchFish.to_string(), "catch_fish");
    }
}
