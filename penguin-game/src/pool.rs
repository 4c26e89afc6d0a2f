//! Penguin lifecycle: spawn, advance, retire-and-respawn, fly away.
//!
//! Penguins are plain data. The view keeps whatever rendering handle it needs
//! keyed by [`Penguin::id`]; nothing here points back at the view.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::numbers::usize_to_f64;

/// One animated penguin on the journey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Penguin {
    pub id: u64,
    /// Progress along the journey in percent.
    pub position_pct: f64,
    /// Vertical offset fixed at spawn.
    pub lane: f64,
    pub speed: f64,
}

/// Placement parameters copied out of [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct SpawnBand {
    min_pct: f64,
    jitter_pct: f64,
    lane_min: f64,
    lane_jitter: f64,
    retire_pct: f64,
}

impl From<&GameConfig> for SpawnBand {
    fn from(cfg: &GameConfig) -> Self {
        Self {
            min_pct: cfg.spawn_min_pct,
            jitter_pct: cfg.spawn_jitter_pct.max(0.0),
            lane_min: cfg.lane_min,
            lane_jitter: cfg.lane_jitter.max(0.0),
            retire_pct: cfg.retire_pct,
        }
    }
}

/// Penguins that left and arrived during one [`PenguinPool::advance_all`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advance {
    pub retired: Vec<u64>,
    pub spawned: Vec<u64>,
}

#[derive(Debug, Clone)]
pub struct PenguinPool {
    penguins: VecDeque<Penguin>,
    next_id: u64,
    next_threshold: f64,
    pause_holds: u32,
    band: SpawnBand,
    rng: ChaCha20Rng,
}

impl PenguinPool {
    /// An empty pool whose first spawn threshold comes from the config.
    #[must_use]
    pub fn new(cfg: &GameConfig, seed: u64) -> Self {
        Self {
            penguins: VecDeque::new(),
            next_id: 0,
            next_threshold: cfg.first_spawn_threshold,
            pause_holds: 0,
            band: SpawnBand::from(cfg),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Penguin> {
        self.penguins.iter()
    }

    /// The longest-surviving penguin.
    #[must_use]
    pub fn oldest(&self) -> Option<&Penguin> {
        self.penguins.front()
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Penguin> {
        self.penguins.iter().find(|penguin| penguin.id == id)
    }

    #[must_use]
    pub const fn next_threshold(&self) -> f64 {
        self.next_threshold
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.pause_holds > 0
    }

    /// Take a pause hold; the pool stays paused until every hold is released.
    pub const fn hold(&mut self) {
        self.pause_holds = self.pause_holds.saturating_add(1);
    }

    pub const fn release(&mut self) {
        self.pause_holds = self.pause_holds.saturating_sub(1);
    }

    /// Add a fresh penguin near the start of the journey and return its id.
    pub fn spawn(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let position_pct = self.band.min_pct + self.rng.gen_range(0.0..=self.band.jitter_pct);
        let lane = self.band.lane_min + self.rng.gen_range(0.0..=self.band.lane_jitter);
        self.penguins.push_back(Penguin {
            id,
            position_pct,
            lane,
            speed: 1.0,
        });
        log::debug!("penguin {id} spawned at {position_pct:.1}%");
        id
    }

    /// Move every penguin forward by `steps` worth of the journey. Penguins that
    /// reach the retirement line are replaced by fresh ones, so the head count is
    /// unchanged. Does nothing while paused.
    pub fn advance_all(&mut self, steps: f64, total_distance: f64) -> Advance {
        let mut outcome = Advance::default();
        if self.is_paused() || total_distance <= 0.0 {
            return outcome;
        }
        let delta_pct = (steps / total_distance) * 100.0;
        let retire_pct = self.band.retire_pct;
        for penguin in &mut self.penguins {
            penguin.position_pct += delta_pct * penguin.speed;
            if penguin.position_pct >= retire_pct {
                outcome.retired.push(penguin.id);
            }
        }
        if outcome.retired.is_empty() {
            return outcome;
        }
        self.penguins
            .retain(|penguin| !outcome.retired.contains(&penguin.id));
        for id in &outcome.retired {
            log::debug!("penguin {id} reached the glacier");
            outcome.spawned.push(self.spawn());
        }
        outcome
    }

    /// Remove the first-spawned surviving penguin without replacing it.
    pub fn remove_oldest(&mut self) -> Option<Penguin> {
        let removed = self.penguins.pop_front();
        if let Some(penguin) = &removed {
            log::debug!("penguin {} flew away", penguin.id);
        }
        removed
    }

    /// Spawn one penguin when `points` has reached the threshold, then raise the
    /// threshold by the new head count.
    pub fn check_spawn_threshold(&mut self, points: f64) -> Option<u64> {
        if points < self.next_threshold {
            return None;
        }
        let id = self.spawn();
        self.next_threshold += usize_to_f64(self.len());
        Some(id)
    }
}
