//! The game engine: intents in, events and snapshots out.
use crate::config::GameConfig;
use crate::constants::{DISPLAY_CAP_PCT, FISH_ENERGY, MANUAL_ENERGY_COST, REGEN_AMOUNT};
use crate::economy::{UpgradeTrack, Upgrades, upgrade_cost_with_growth};
use crate::error::{ConfigError, GameError};
use crate::ledger::ResourceLedger;
use crate::numbers::{percent_of, u64_to_f64};
use crate::phase::{GamePhase, Intent};
use crate::pool::PenguinPool;
use crate::schedule::{Schedule, Timer};
use crate::view::{GameEvent, GameView, PenguinView, Snapshot, UpgradeView};

/// Sole owner of one game's state. All mutation goes through the intent methods
/// and [`GameEngine::advance_time`]; each call runs to completion.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    phase: GamePhase,
    ledger: ResourceLedger,
    upgrades: Upgrades,
    pool: PenguinPool,
    schedule: Schedule,
    click_count: u32,
    hint_dismissed: bool,
    hunger_armed: bool,
    goal_reached: bool,
    next_effect_id: u64,
    events: Vec<GameEvent>,
    dirty: bool,
}

impl GameEngine {
    /// A new game waiting on the welcome popup, with its starting penguins placed.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when `config` fails [`GameConfig::validate`].
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config, seed))
    }

    fn from_valid(config: GameConfig, seed: u64) -> Self {
        let mut engine = Self {
            ledger: ResourceLedger::new(config.max_energy),
            pool: PenguinPool::new(&config, seed),
            config,
            phase: GamePhase::WelcomePending,
            upgrades: Upgrades::default(),
            schedule: Schedule::new(),
            click_count: 0,
            hint_dismissed: false,
            hunger_armed: true,
            goal_reached: false,
            next_effect_id: 0,
            events: Vec::new(),
            dirty: true,
        };
        for _ in 0..engine.config.starting_penguins {
            let id = engine.pool.spawn();
            engine.emit(GameEvent::PenguinSpawned { id });
        }
        engine
    }

    /// A new game using the bundled tuning.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        // The bundled loader only ever yields validated values.
        Self::from_valid(GameConfig::load_from_static(), seed)
    }

    // Accessors ---------------------------------------------------------------

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub const fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    #[must_use]
    pub const fn upgrades(&self) -> &Upgrades {
        &self.upgrades
    }

    #[must_use]
    pub const fn pool(&self) -> &PenguinPool {
        &self.pool
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.pool.is_paused()
    }

    #[must_use]
    pub const fn click_count(&self) -> u32 {
        self.click_count
    }

    /// Virtual time elapsed since construction, in milliseconds.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.schedule.now()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.schedule.pending()
    }

    /// Price of the next level on `track`.
    #[must_use]
    pub fn upgrade_cost(&self, track: UpgradeTrack) -> u64 {
        upgrade_cost_with_growth(
            self.config.base_cost(track),
            self.upgrades.track(track).level,
            self.config.upgrade_growth,
        )
    }

    // Intents -----------------------------------------------------------------

    /// Dismiss the welcome popup and begin automated ticking.
    ///
    /// # Errors
    ///
    /// [`GameError::IntentRejected`] unless the game is waiting to start.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.require(Intent::Start)?;
        self.schedule
            .every(self.config.produce_period_ms, Timer::Produce);
        self.schedule
            .every(self.config.regen_period_ms, Timer::Regenerate);
        self.transition(GamePhase::Running);
        Ok(())
    }

    /// One manual waddle. Returns the steps gained.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientEnergy`] at zero energy, or
    /// [`GameError::IntentRejected`] outside `Running`. Neither changes state.
    pub fn manual_action(&mut self) -> Result<f64, GameError> {
        self.require(Intent::ManualAction)?;
        if !self.ledger.has_energy() {
            log::debug!("waddle rejected: out of energy");
            return Err(GameError::InsufficientEnergy);
        }
        self.click_count = self.click_count.saturating_add(1);
        if !self.hint_dismissed && self.click_count >= self.config.click_hint_clicks {
            self.hint_dismissed = true;
            self.emit(GameEvent::ClickHintDismissed);
        }

        let steps = self.upgrades.manual_steps();
        self.ledger.apply_production(steps);
        self.ledger.spend_energy(MANUAL_ENERGY_COST);
        let effect_id = self.start_effect();
        self.emit(GameEvent::StepsGained {
            effect_id,
            amount: steps,
        });
        self.after_production(steps);
        Ok(steps)
    }

    /// Buy one level on `track`. Returns the new level.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientFunds`] when the balance is short, or
    /// [`GameError::IntentRejected`] outside `Running`. Neither changes state.
    pub fn purchase(&mut self, track: UpgradeTrack) -> Result<u32, GameError> {
        self.require(Intent::Purchase)?;
        let cost = self.upgrade_cost(track);
        self.ledger.spend(cost).inspect_err(|err| {
            log::debug!("purchase of {track} rejected: {err}");
        })?;
        let level = self.upgrades.apply(track);
        if track == UpgradeTrack::AutoWaddler {
            let id = self.pool.spawn();
            self.emit(GameEvent::PenguinSpawned { id });
        }
        log::info!("bought {track} level {level} for {cost}");
        self.emit(GameEvent::UpgradePurchased { track, level, cost });
        Ok(level)
    }

    /// Buy one level on the track named `track_id`.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidTrackId`] for an unknown name, otherwise as
    /// [`GameEngine::purchase`].
    pub fn purchase_by_id(&mut self, track_id: &str) -> Result<u32, GameError> {
        let track = track_id.parse::<UpgradeTrack>()?;
        self.purchase(track)
    }

    /// Catch a fish: one energy now, and penguins hold still for a moment.
    ///
    /// # Errors
    ///
    /// [`GameError::IntentRejected`] outside `Running`.
    pub fn catch_fish(&mut self) -> Result<(), GameError> {
        self.require(Intent::CatchFish)?;
        self.ledger.regen_energy(FISH_ENERGY);
        self.rearm_hunger();
        self.pool.hold();
        self.schedule
            .after(self.config.fishing_pause_ms, Timer::FishingDone);
        let effect_id = self.start_effect();
        self.emit(GameEvent::EnergyGained {
            effect_id,
            amount: FISH_ENERGY,
        });
        Ok(())
    }

    /// Answer the final-chance popup. Buying energy refills it and resumes play;
    /// declining ends the game. Returns the resulting phase.
    ///
    /// # Errors
    ///
    /// [`GameError::IntentRejected`] unless a final chance is pending.
    pub fn dismiss_final_chance(&mut self, bought_energy: bool) -> Result<GamePhase, GameError> {
        self.require(Intent::DismissFinalChance)?;
        if bought_energy {
            self.ledger.refill_energy();
            self.rearm_hunger();
            self.transition(GamePhase::Running);
        } else {
            self.schedule.clear();
            self.transition(GamePhase::GameOver);
        }
        Ok(self.phase)
    }

    // Time --------------------------------------------------------------------

    /// Let `elapsed_ms` of virtual time pass, firing every timer that falls due.
    pub fn advance_time(&mut self, elapsed_ms: u64) {
        let target = self.schedule.now().saturating_add(elapsed_ms);
        while self.phase.ticks() {
            let Some((_, timer)) = self.schedule.pop_due(target) else {
                break;
            };
            self.fire(timer);
        }
        self.schedule.settle(target);
    }

    fn fire(&mut self, timer: Timer) {
        match timer {
            Timer::Produce => {
                if self.upgrades.has_auto_production() && !self.pool.is_paused() {
                    let steps = self.upgrades.auto_steps();
                    self.ledger.apply_production(steps);
                    self.after_production(steps);
                }
            }
            Timer::Regenerate => {
                if self.ledger.energy() < self.ledger.max_energy() {
                    self.ledger.regen_energy(REGEN_AMOUNT);
                    self.rearm_hunger();
                    self.dirty = true;
                }
            }
            Timer::FishingDone => {
                self.pool.release();
                self.dirty = true;
            }
            Timer::EffectExpired(effect_id) => {
                self.emit(GameEvent::EffectExpired { effect_id });
            }
            Timer::HungerExpired => self.emit(GameEvent::HungerCleared),
        }
    }

    // Notifications -----------------------------------------------------------

    /// Deliver queued events, then one snapshot if anything changed since the last flush.
    pub fn flush<V: GameView + ?Sized>(&mut self, view: &mut V) {
        for event in std::mem::take(&mut self.events) {
            view.notify(&event);
        }
        if self.dirty {
            self.dirty = false;
            view.render(&self.snapshot());
        }
    }

    /// Take queued events without rendering.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let distance = self.ledger.distance_traveled();
        let penguins = self
            .pool
            .iter()
            .map(|penguin| PenguinView {
                id: penguin.id,
                position_pct: penguin.position_pct.min(DISPLAY_CAP_PCT),
                lane: penguin.lane,
            })
            .collect();
        let upgrades = UpgradeTrack::ALL
            .iter()
            .map(|&track| {
                let cost = self.upgrade_cost(track);
                UpgradeView {
                    track,
                    level: self.upgrades.track(track).level,
                    cost,
                    affordable: distance >= u64_to_f64(cost),
                }
            })
            .collect();
        Snapshot {
            distance_traveled: distance,
            total_distance: self.config.total_distance,
            progress_pct: percent_of(distance, self.config.total_distance).min(100.0),
            effective_click_power: self.upgrades.manual_steps(),
            auto_production_count: self.upgrades.auto_waddler.effect,
            production_per_tick: self.upgrades.auto_steps(),
            energy: self.ledger.energy(),
            max_energy: self.ledger.max_energy(),
            penguins,
            upgrades,
            phase: self.phase,
            paused: self.pool.is_paused(),
            click_count: self.click_count,
        }
    }

    // Internals ---------------------------------------------------------------

    fn require(&self, intent: Intent) -> Result<(), GameError> {
        if self.phase == intent.accepted_in() {
            Ok(())
        } else {
            log::debug!("{intent} rejected while {}", self.phase);
            Err(GameError::IntentRejected {
                intent,
                phase: self.phase,
            })
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
        self.dirty = true;
    }

    fn transition(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::info!("phase {from} -> {to}");
        self.emit(GameEvent::PhaseChanged { from, to });
    }

    fn start_effect(&mut self) -> u64 {
        let effect_id = self.next_effect_id;
        self.next_effect_id += 1;
        self.schedule
            .after(self.config.effect_lifetime_ms, Timer::EffectExpired(effect_id));
        effect_id
    }

    fn rearm_hunger(&mut self) {
        if self.ledger.energy_pct() > self.config.hunger_pct {
            self.hunger_armed = true;
        }
    }

    /// Shared tail of every production event: move penguins, maybe spawn one,
    /// then apply the energy-scarcity rules.
    fn after_production(&mut self, steps: f64) {
        let advance = self
            .pool
            .advance_all(steps, self.config.total_distance);
        for id in advance.retired {
            self.emit(GameEvent::PenguinRetired { id });
        }
        for id in advance.spawned {
            self.emit(GameEvent::PenguinSpawned { id });
        }
        if let Some(id) = self
            .pool
            .check_spawn_threshold(self.ledger.points_collected())
        {
            self.emit(GameEvent::PenguinSpawned { id });
        }
        if !self.goal_reached && self.ledger.distance_traveled() >= self.config.total_distance {
            self.goal_reached = true;
            log::info!("reached the glacier after {} clicks", self.click_count);
            self.emit(GameEvent::GoalReached);
        }
        self.check_scarcity();
        self.dirty = true;
    }

    fn check_scarcity(&mut self) {
        let energy_pct = self.ledger.energy_pct();
        if self.hunger_armed && energy_pct <= self.config.hunger_pct {
            if let Some(oldest) = self.pool.oldest().copied() {
                self.hunger_armed = false;
                self.schedule
                    .after(self.config.hunger_lifetime_ms, Timer::HungerExpired);
                self.emit(GameEvent::Hunger {
                    penguin_id: oldest.id,
                    position_pct: oldest.position_pct.min(DISPLAY_CAP_PCT),
                    lane: oldest.lane,
                });
            }
        }
        if energy_pct <= self.config.scarcity_pct {
            if let Some(gone) = self.pool.remove_oldest() {
                self.emit(GameEvent::PenguinFlewAway { id: gone.id });
            }
        }
        if self.phase == GamePhase::Running
            && self.pool.len() == 1
            && energy_pct < self.config.scarcity_pct
        {
            self.transition(GamePhase::FinalChancePending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecordingView;

    fn running(seed: u64) -> GameEngine {
        let mut engine = GameEngine::new(GameConfig::default(), seed).unwrap();
        engine.start().unwrap();
        engine
    }

    fn give_distance(engine: &mut GameEngine, amount: f64) {
        engine.ledger.apply_production(amount);
    }

    #[test]
    fn starts_waiting_with_one_penguin_and_no_timers() {
        let mut engine = GameEngine::new(GameConfig::default(), 1).unwrap();
        assert_eq!(engine.phase(), GamePhase::WelcomePending);
        assert_eq!(engine.pool().len(), 1);
        assert_eq!(engine.pending_timers(), 0);
        assert_eq!(
            engine.manual_action(),
            Err(GameError::IntentRejected {
                intent: Intent::ManualAction,
                phase: GamePhase::WelcomePending
            })
        );
        engine.start().unwrap();
        assert_eq!(engine.phase(), GamePhase::Running);
        assert_eq!(engine.pending_timers(), 2);
        assert!(engine.start().is_err());
    }

    #[test]
    fn three_waddles_from_a_fresh_game() {
        let mut engine = running(2);
        for _ in 0..3 {
            assert!((engine.manual_action().unwrap() - 1.0).abs() < f64::EPSILON);
        }
        assert!((engine.ledger().distance_traveled() - 3.0).abs() < f64::EPSILON);
        assert!((engine.ledger().points_collected() - 3.0).abs() < f64::EPSILON);
        assert!((engine.ledger().energy() - 97.0).abs() < f64::EPSILON);
        assert_eq!(engine.click_count(), 3);
    }

    #[test]
    fn zero_energy_waddle_changes_nothing() {
        let mut engine = running(3);
        engine.ledger.set_energy_for_test(0.0);
        let before = (engine.ledger, engine.click_count, engine.pool.len());
        assert_eq!(engine.manual_action(), Err(GameError::InsufficientEnergy));
        assert_eq!((engine.ledger, engine.click_count, engine.pool.len()), before);
    }

    #[test]
    fn multiplier_purchase_doubles_waddle() {
        let mut engine = running(4);
        give_distance(&mut engine, 100.0);
        assert_eq!(engine.purchase(UpgradeTrack::ClickMultiplier), Ok(1));
        assert!(engine.ledger().distance_traveled().abs() < f64::EPSILON);
        assert!((engine.manual_action().unwrap() - 2.0).abs() < f64::EPSILON);
        assert_eq!(engine.upgrade_cost(UpgradeTrack::ClickMultiplier), 150);
    }

    #[test]
    fn purchase_is_all_or_nothing() {
        let mut engine = running(5);
        give_distance(&mut engine, 9.0);
        let before = engine.ledger;
        assert_eq!(
            engine.purchase(UpgradeTrack::ClickPower),
            Err(GameError::InsufficientFunds {
                cost: 10,
                available: 9.0
            })
        );
        assert_eq!(engine.ledger, before);
        assert_eq!(engine.upgrades().click_power.level, 0);
        assert_eq!(
            engine.purchase_by_id("warp_drive"),
            Err(GameError::InvalidTrackId("warp_drive".into()))
        );
    }

    #[test]
    fn auto_waddler_brings_a_penguin_and_produces_on_ticks() {
        let mut engine = running(6);
        give_distance(&mut engine, 50.0);
        engine.purchase(UpgradeTrack::AutoWaddler).unwrap();
        assert_eq!(engine.pool().len(), 2);
        let energy = engine.ledger().energy();
        engine.advance_time(1_000);
        assert!((engine.ledger().distance_traveled() - 1.0).abs() < f64::EPSILON);
        assert!((engine.ledger().energy() - energy).abs() < f64::EPSILON);
    }

    #[test]
    fn auto_boost_allows_fractional_production() {
        let mut engine = running(7);
        give_distance(&mut engine, 250.0);
        engine.purchase(UpgradeTrack::AutoWaddler).unwrap();
        engine.purchase(UpgradeTrack::AutoBoost).unwrap();
        let before = engine.ledger().distance_traveled();
        engine.advance_time(1_000);
        assert!((engine.ledger().distance_traveled() - before - 1.5).abs() < f64::EPSILON);
        assert!((engine.snapshot().production_per_tick - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn regeneration_runs_every_two_ticks_up_to_max() {
        let mut engine = running(8);
        engine.ledger.set_energy_for_test(95.0);
        engine.advance_time(1_999);
        assert!((engine.ledger().energy() - 95.0).abs() < f64::EPSILON);
        engine.advance_time(1);
        assert!((engine.ledger().energy() - 96.0).abs() < f64::EPSILON);
        engine.advance_time(60_000);
        assert!((engine.ledger().energy() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exactly_85_percent_removes_but_does_not_offer_final_chance() {
        let mut engine = running(9);
        engine.pool.spawn();
        assert_eq!(engine.pool().len(), 2);
        engine.ledger.set_energy_for_test(86.0);
        engine.hunger_armed = false;
        // One point is still under the first spawn threshold.
        engine.manual_action().unwrap();
        assert!((engine.ledger().energy() - 85.0).abs() < f64::EPSILON);
        assert_eq!(engine.pool().len(), 1);
        assert_eq!(engine.phase(), GamePhase::Running);
    }

    #[test]
    fn below_85_percent_with_one_penguin_offers_final_chance() {
        let mut engine = running(10);
        engine.pool.spawn();
        engine.pool.spawn();
        engine.ledger.set_energy_for_test(85.0);
        engine.hunger_armed = false;
        engine.manual_action().unwrap();
        assert_eq!(engine.pool().len(), 2);
        assert_eq!(engine.phase(), GamePhase::Running);
        engine.manual_action().unwrap();
        // The second click spawns at the threshold and loses one to scarcity.
        assert_eq!(engine.pool().len(), 2);
        engine.manual_action().unwrap();
        assert_eq!(engine.pool().len(), 1);
        assert_eq!(engine.phase(), GamePhase::FinalChancePending);
        assert!(engine.manual_action().is_err());
    }

    #[test]
    fn hunger_fires_once_per_downward_crossing() {
        let mut engine = running(11);
        let mut view = RecordingView::default();
        for _ in 0..12 {
            engine.manual_action().unwrap();
        }
        engine.flush(&mut view);
        let hungers = view.count(|e| matches!(e, GameEvent::Hunger { .. }));
        assert_eq!(hungers, 1);
        engine.advance_time(3_000);
        engine.flush(&mut view);
        assert_eq!(view.count(|e| matches!(e, GameEvent::HungerCleared)), 1);
    }

    #[test]
    fn fishing_pauses_penguins_and_overlaps_extend_the_pause() {
        let mut engine = running(12);
        engine.ledger.set_energy_for_test(95.0);
        engine.catch_fish().unwrap();
        assert!((engine.ledger().energy() - 96.0).abs() < f64::EPSILON);
        assert!(engine.is_paused());
        engine.advance_time(500);
        engine.catch_fish().unwrap();
        engine.advance_time(500);
        // The first catch's timer has fired; the second still holds the pause.
        assert!(engine.is_paused());
        let start = engine.pool().oldest().map(|p| p.position_pct);
        engine.manual_action().unwrap();
        assert_eq!(engine.pool().oldest().map(|p| p.position_pct), start);
        engine.advance_time(500);
        assert!(!engine.is_paused());
    }

    #[test]
    fn fishing_is_capped_at_max_energy() {
        let mut engine = running(13);
        engine.catch_fish().unwrap();
        assert!((engine.ledger().energy() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn final_chance_answers() {
        let mut engine = running(14);
        engine.phase = GamePhase::FinalChancePending;
        engine.ledger.set_energy_for_test(10.0);
        assert_eq!(engine.dismiss_final_chance(true), Ok(GamePhase::Running));
        assert!((engine.ledger().energy() - 100.0).abs() < f64::EPSILON);

        engine.phase = GamePhase::FinalChancePending;
        assert_eq!(engine.dismiss_final_chance(false), Ok(GamePhase::GameOver));
        assert_eq!(engine.pending_timers(), 0);
        let before = engine.snapshot();
        engine.advance_time(10_000);
        assert!(engine.catch_fish().is_err());
        assert!(engine.purchase(UpgradeTrack::ClickPower).is_err());
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn flush_delivers_events_then_one_snapshot() {
        let mut engine = running(15);
        let mut view = RecordingView::default();
        engine.flush(&mut view);
        assert_eq!(view.snapshots.len(), 1);
        engine.flush(&mut view);
        assert_eq!(view.snapshots.len(), 1);
        engine.manual_action().unwrap();
        engine.flush(&mut view);
        assert_eq!(view.snapshots.len(), 2);
        assert!(matches!(
            view.events.last(),
            Some(GameEvent::StepsGained { amount, .. }) if (*amount - 1.0).abs() < f64::EPSILON
        ));
        engine.advance_time(1_000);
        engine.flush(&mut view);
        assert_eq!(view.count(|e| matches!(e, GameEvent::EffectExpired { .. })), 1);
    }

    #[test]
    fn click_hint_is_dismissed_once() {
        let mut engine = running(16);
        for _ in 0..5 {
            engine.manual_action().unwrap();
        }
        let events = engine.drain_events();
        let hints = events
            .iter()
            .filter(|e| matches!(e, GameEvent::ClickHintDismissed))
            .count();
        assert_eq!(hints, 1);
    }

    #[test]
    fn goal_is_announced_once() {
        let mut engine = running(17);
        give_distance(&mut engine, 999.0);
        engine.manual_action().unwrap();
        engine.manual_action().unwrap();
        let goals = engine
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GoalReached))
            .count();
        assert_eq!(goals, 1);
        assert!((engine.snapshot().progress_pct - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fishing_pause_blocks_auto_production_but_not_purchases_or_regen() {
        let mut engine = running(18);
        give_distance(&mut engine, 50.0);
        engine.purchase(UpgradeTrack::AutoWaddler).unwrap();
        engine.catch_fish().unwrap();
        // The 1000 ms production tick fires before this catch releases the pause.
        engine.advance_time(1_000);
        assert!(engine.ledger().distance_traveled().abs() < f64::EPSILON);
        assert!(!engine.is_paused());
        engine.advance_time(1_000);
        assert!((engine.ledger().distance_traveled() - 1.0).abs() < f64::EPSILON);

        give_distance(&mut engine, 9.0);
        engine.catch_fish().unwrap();
        assert!(engine.is_paused());
        assert_eq!(engine.purchase(UpgradeTrack::ClickPower), Ok(1));
        assert!(engine.ledger().distance_traveled().abs() < f64::EPSILON);

        engine.ledger.set_energy_for_test(90.0);
        for _ in 0..4 {
            engine.catch_fish().unwrap();
            engine.advance_time(500);
            assert!(engine.is_paused());
        }
        // Four catches plus the 4000 ms regeneration tick.
        assert!((engine.ledger().energy() - 95.0).abs() < f64::EPSILON);
        assert!(engine.ledger().distance_traveled().abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_config_is_rejected_before_spawning() {
        let cfg = GameConfig {
            spawn_jitter_pct: f64::INFINITY,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameEngine::new(cfg, 1),
            Err(ConfigError::Invalid(_))
        ));
        let cfg = GameConfig {
            lane_jitter: f64::NAN,
            ..GameConfig::default()
        };
        assert!(GameEngine::new(cfg, 1).is_err());
    }
}
