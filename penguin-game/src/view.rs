//! The boundary between the engine and whatever draws it.
//!
//! The engine never calls into rendering code directly. After each mutation it
//! queues [`GameEvent`]s and marks itself dirty; [`crate::GameEngine::flush`]
//! hands those to a [`GameView`] followed by a fresh [`Snapshot`].
use serde::Serialize;

use crate::economy::UpgradeTrack;
use crate::phase::GamePhase;

/// Where the view should draw one penguin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PenguinView {
    pub id: u64,
    /// Journey position for display, capped so sprites never overrun the hut.
    pub position_pct: f64,
    pub lane: f64,
}

/// Shop entry for one upgrade track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpgradeView {
    pub track: UpgradeTrack,
    pub level: u32,
    pub cost: u64,
    pub affordable: bool,
}

/// Everything the view needs to redraw the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub distance_traveled: f64,
    pub total_distance: f64,
    /// Progress toward the goal in percent, capped at 100.
    pub progress_pct: f64,
    pub effective_click_power: f64,
    pub auto_production_count: f64,
    pub production_per_tick: f64,
    pub energy: f64,
    pub max_energy: f64,
    pub penguins: Vec<PenguinView>,
    pub upgrades: Vec<UpgradeView>,
    pub phase: GamePhase,
    pub paused: bool,
    pub click_count: u32,
}

impl Snapshot {
    /// Display positions in spawn order.
    #[must_use]
    pub fn entity_positions(&self) -> Vec<f64> {
        self.penguins.iter().map(|p| p.position_pct).collect()
    }

    #[must_use]
    pub fn upgrade(&self, track: UpgradeTrack) -> Option<&UpgradeView> {
        self.upgrades.iter().find(|view| view.track == track)
    }
}

/// Transient happenings the view may animate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum GameEvent {
    StepsGained { effect_id: u64, amount: f64 },
    EnergyGained { effect_id: u64, amount: f64 },
    EffectExpired { effect_id: u64 },
    Hunger { penguin_id: u64, position_pct: f64, lane: f64 },
    HungerCleared,
    PenguinSpawned { id: u64 },
    PenguinRetired { id: u64 },
    PenguinFlewAway { id: u64 },
    UpgradePurchased { track: UpgradeTrack, level: u32, cost: u64 },
    ClickHintDismissed,
    GoalReached,
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Receiver of engine notifications.
pub trait GameView {
    /// Redraw from a complete state snapshot.
    fn render(&mut self, snapshot: &Snapshot);

    /// React to a transient event. Delivered before the snapshot that follows it.
    fn notify(&mut self, _event: &GameEvent) {}
}

/// A view that simply remembers what it was told.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub snapshots: Vec<Snapshot>,
    pub events: Vec<GameEvent>,
}

impl RecordingView {
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl GameView for RecordingView {
    fn render(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn notify(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }
}
