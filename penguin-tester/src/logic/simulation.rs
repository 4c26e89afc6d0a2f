use penguin_game::{
    GameEngine, GameEvent, GamePhase, GameView, Snapshot, UpgradeTrack, Upgrades,
    numbers::u64_to_f64,
};
use serde::Serialize;

use super::policy::Strategy;

/// Penguins are never drawn past this share of the journey.
const DISPLAY_CAP_PCT: f64 = 85.0;

/// How long a simulated session lasts and how coarse its clock is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunBudget {
    pub duration_ms: u64,
    pub step_ms: u64,
}

impl Default for RunBudget {
    fn default() -> Self {
        Self {
            duration_ms: 120_000,
            step_ms: 100,
        }
    }
}

/// Counts what the engine reported and checks every snapshot it rendered.
#[derive(Debug, Default, Clone)]
struct EventTally {
    flew_away: usize,
    spawned: usize,
    retired: usize,
    purchases: usize,
    hunger: usize,
    final_chances: usize,
    goal_reached: bool,
    violations: Vec<String>,
}

impl GameView for EventTally {
    fn render(&mut self, snapshot: &Snapshot) {
        if !(0.0..=snapshot.max_energy).contains(&snapshot.energy) {
            self.violations
                .push(format!("energy {} outside 0..={}", snapshot.energy, snapshot.max_energy));
        }
        if snapshot.distance_traveled < 0.0 {
            self.violations
                .push(format!("negative distance {}", snapshot.distance_traveled));
        }
        if snapshot.progress_pct > 100.0 {
            self.violations
                .push(format!("progress {} above 100%", snapshot.progress_pct));
        }
        if let Some(pct) = snapshot
            .entity_positions()
            .into_iter()
            .find(|pct| !(0.0..=DISPLAY_CAP_PCT).contains(pct))
        {
            self.violations
                .push(format!("penguin drawn at {pct}% past the display cap"));
        }
        for track in UpgradeTrack::ALL {
            if snapshot.upgrade(track).is_none() {
                self.violations.push(format!("shop is missing {track}"));
            }
        }
        for upgrade in &snapshot.upgrades {
            let affordable = snapshot.distance_traveled >= u64_to_f64(upgrade.cost);
            if upgrade.affordable != affordable {
                self.violations
                    .push(format!("{} affordability out of date", upgrade.track));
            }
        }
    }

    fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::PenguinFlewAway { .. } => self.flew_away += 1,
            GameEvent::PenguinSpawned { .. } => self.spawned += 1,
            GameEvent::PenguinRetired { .. } => self.retired += 1,
            GameEvent::UpgradePurchased { .. } => self.purchases += 1,
            GameEvent::Hunger { .. } => self.hunger += 1,
            GameEvent::GoalReached => self.goal_reached = true,
            GameEvent::PhaseChanged {
                to: GamePhase::FinalChancePending,
                ..
            } => self.final_chances += 1,
            _ => {}
        }
    }
}

/// Outcome of one simulated session.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub strategy: String,
    pub seed: u64,
    pub steps: u64,
    pub elapsed_ms: u64,
    pub final_phase: GamePhase,
    pub distance_traveled: f64,
    pub points_collected: f64,
    pub energy: f64,
    pub max_energy: f64,
    pub penguins: usize,
    pub clicks: u32,
    pub upgrades: Upgrades,
    pub flew_away: usize,
    pub spawned: usize,
    pub retired: usize,
    pub purchases: usize,
    pub hunger_warnings: usize,
    pub final_chances: usize,
    pub goal_reached: bool,
    pub violations: Vec<String>,
}

/// Play one session: the policy takes a turn, then `step_ms` of virtual time
/// passes, until the budget runs out or the game ends.
#[must_use]
pub fn simulate(strategy: Strategy, seed: u64, budget: RunBudget) -> SimulationSummary {
    let mut engine = GameEngine::with_seed(seed);
    let mut policy = strategy.create_policy(seed);
    let mut tally = EventTally::default();
    let step_ms = budget.step_ms.max(1);
    let mut elapsed_ms = 0;
    let mut steps = 0;

    engine.flush(&mut tally);
    while elapsed_ms < budget.duration_ms && !engine.phase().is_terminal() {
        policy.act(&mut engine);
        engine.advance_time(step_ms);
        engine.flush(&mut tally);
        elapsed_ms += step_ms;
        steps += 1;
    }
    log::debug!(
        "{} seed {seed}: {steps} steps, phase {}",
        policy.name(),
        engine.phase()
    );

    let ledger = engine.ledger();
    SimulationSummary {
        strategy: strategy.label().to_string(),
        seed,
        steps,
        elapsed_ms,
        final_phase: engine.phase(),
        distance_traveled: ledger.distance_traveled(),
        points_collected: ledger.points_collected(),
        energy: ledger.energy(),
        max_energy: ledger.max_energy(),
        penguins: engine.pool().len(),
        clicks: engine.click_count(),
        upgrades: *engine.upgrades(),
        flew_away: tally.flew_away,
        spawned: tally.spawned,
        retired: tally.retired,
        purchases: tally.purchases,
        hunger_warnings: tally.hunger,
        final_chances: tally.final_chances,
        goal_reached: tally.goal_reached,
        violations: tally.violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_session_stays_put() {
        let summary = simulate(Strategy::Idle, 1, RunBudget::default());
        assert_eq!(summary.final_phase, GamePhase::Running);
        assert_eq!(summary.steps, 1_200);
        assert_eq!(summary.penguins, 1);
        assert!(summary.distance_traveled.abs() < f64::EPSILON);
        assert!(summary.violations.is_empty());
    }

    #[test]
    fn clicker_session_ends_early() {
        let summary = simulate(Strategy::Clicker, 2, RunBudget::default());
        assert_eq!(summary.final_phase, GamePhase::GameOver);
        assert_eq!(summary.final_chances, 1);
        assert!(summary.flew_away > 0);
        assert!(summary.steps < 1_200);
    }

    #[test]
    fn tally_flags_out_of_range_snapshots() {
        let mut engine = GameEngine::with_seed(4);
        let mut snapshot = engine.snapshot();
        snapshot.penguins[0].position_pct = 90.0;
        snapshot.upgrades.pop();
        let mut tally = EventTally::default();
        tally.render(&snapshot);
        assert_eq!(tally.violations.len(), 2);

        engine.flush(&mut tally);
        assert_eq!(tally.violations.len(), 2);
    }

    #[test]
    fn same_seed_same_session() {
        let budget = RunBudget {
            duration_ms: 20_000,
            step_ms: 50,
        };
        let a = simulate(Strategy::Monkey, 9, budget);
        let b = simulate(Strategy::Monkey, 9, budget);
        assert_eq!(a.clicks, b.clicks);
        assert_eq!(a.upgrades, b.upgrades);
        assert_eq!(a.final_phase, b.final_phase);
        assert!(a.violations.is_empty());
    }
}
