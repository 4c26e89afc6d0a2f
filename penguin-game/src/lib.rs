//! Penguin Journey Game Engine
//!
//! Platform-agnostic simulation for the Penguin Journey idle game: waddle toward
//! the glacier, keep the colony fed, and buy upgrades that speed the trip up.
//! This crate provides all game rules without UI or platform-specific dependencies.

pub mod config;
pub mod constants;
pub mod economy;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod numbers;
pub mod phase;
pub mod pool;
pub mod schedule;
pub mod view;

// Re-export commonly used types
pub use config::{BaseCosts, GameConfig};
pub use economy::{TrackState, UpgradeTrack, Upgrades, upgrade_cost, upgrade_cost_with_growth};
pub use engine::GameEngine;
pub use error::{ConfigError, GameError};
pub use ledger::ResourceLedger;
pub use phase::{GamePhase, Intent};
pub use pool::{Advance, Penguin, PenguinPool};
pub use schedule::{Schedule, Timer};
pub use view::{GameEvent, GameView, PenguinView, RecordingView, Snapshot, UpgradeView};
