//! Tunable game parameters, loaded from the bundled data asset.
use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_COST_AUTO_BOOST, BASE_COST_AUTO_WADDLER, BASE_COST_CLICK_MULTIPLIER,
    BASE_COST_CLICK_POWER, CLICK_HINT_CLICKS, EFFECT_LIFETIME_MS, FIRST_SPAWN_THRESHOLD,
    FISHING_PAUSE_MS, HUNGER_LIFETIME_MS, HUNGER_PCT, LANE_JITTER, LANE_MIN, MAX_ENERGY,
    PRODUCE_PERIOD_MS, REGEN_PERIOD_MS, RETIRE_PCT, SCARCITY_PCT, SPAWN_JITTER_PCT,
    SPAWN_MIN_PCT, STARTING_PENGUINS, TOTAL_DISTANCE, UPGRADE_GROWTH,
};
use crate::economy::UpgradeTrack;
use crate::error::ConfigError;

const DEFAULT_GAME_DATA: &str = include_str!("../../penguin-web/static/assets/data/penguin.json");

/// Base price of every upgrade track at level zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseCosts {
    pub click_power: u64,
    pub auto_waddler: u64,
    pub click_multiplier: u64,
    pub auto_boost: u64,
}

impl Default for BaseCosts {
    fn default() -> Self {
        Self {
            click_power: BASE_COST_CLICK_POWER,
            auto_waddler: BASE_COST_AUTO_WADDLER,
            click_multiplier: BASE_COST_CLICK_MULTIPLIER,
            auto_boost: BASE_COST_AUTO_BOOST,
        }
    }
}

/// Complete tuning bundle for one game. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub total_distance: f64,
    pub max_energy: f64,
    pub first_spawn_threshold: f64,
    pub starting_penguins: usize,
    pub upgrade_growth: f64,
    pub base_costs: BaseCosts,
    pub produce_period_ms: u64,
    pub regen_period_ms: u64,
    pub fishing_pause_ms: u64,
    pub effect_lifetime_ms: u64,
    pub hunger_lifetime_ms: u64,
    /// Energy percentage at or below which penguins start looking hungry.
    pub hunger_pct: f64,
    /// Energy percentage at or below which the oldest penguin flies away.
    pub scarcity_pct: f64,
    /// Journey percentage at which a penguin retires and is replaced.
    pub retire_pct: f64,
    pub spawn_min_pct: f64,
    pub spawn_jitter_pct: f64,
    pub lane_min: f64,
    pub lane_jitter: f64,
    pub click_hint_clicks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_distance: TOTAL_DISTANCE,
            max_energy: MAX_ENERGY,
            first_spawn_threshold: FIRST_SPAWN_THRESHOLD,
            starting_penguins: STARTING_PENGUINS,
            upgrade_growth: UPGRADE_GROWTH,
            base_costs: BaseCosts::default(),
            produce_period_ms: PRODUCE_PERIOD_MS,
            regen_period_ms: REGEN_PERIOD_MS,
            fishing_pause_ms: FISHING_PAUSE_MS,
            effect_lifetime_ms: EFFECT_LIFETIME_MS,
            hunger_lifetime_ms: HUNGER_LIFETIME_MS,
            hunger_pct: HUNGER_PCT,
            scarcity_pct: SCARCITY_PCT,
            retire_pct: RETIRE_PCT,
            spawn_min_pct: SPAWN_MIN_PCT,
            spawn_jitter_pct: SPAWN_JITTER_PCT,
            lane_min: LANE_MIN,
            lane_jitter: LANE_JITTER,
            click_hint_clicks: CLICK_HINT_CLICKS,
        }
    }
}

impl GameConfig {
    /// Parse the bundled asset, falling back to built-in defaults when it is unusable.
    #[must_use]
    pub fn load_from_static() -> Self {
        match Self::from_json(DEFAULT_GAME_DATA) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("bundled game config rejected, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Invalid`]
    /// when the values cannot describe a playable game.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the values describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        if !(self.total_distance > 0.0) {
            return invalid("total_distance must be positive");
        }
        if !(self.max_energy > 0.0) {
            return invalid("max_energy must be positive");
        }
        if !(self.upgrade_growth > 1.0) {
            return invalid("upgrade_growth must exceed 1");
        }
        if self.produce_period_ms == 0 || self.regen_period_ms == 0 {
            return invalid("tick periods must be non-zero");
        }
        let pct_fields = [
            self.hunger_pct,
            self.scarcity_pct,
            self.retire_pct,
            self.spawn_min_pct,
        ];
        if pct_fields.iter().any(|pct| !(0.0..=100.0).contains(pct)) {
            return invalid("percentages must lie within 0..=100");
        }
        if self.scarcity_pct > self.hunger_pct {
            return invalid("scarcity_pct must not exceed hunger_pct");
        }
        let band_fields = [
            self.spawn_min_pct,
            self.spawn_jitter_pct,
            self.lane_min,
            self.lane_jitter,
            self.first_spawn_threshold,
        ];
        if band_fields.iter().any(|value| !value.is_finite()) {
            return invalid("spawn band and threshold must be finite");
        }
        if self.spawn_jitter_pct < 0.0 || self.lane_jitter < 0.0 {
            return invalid("jitter must be non-negative");
        }
        if self.spawn_min_pct + self.spawn_jitter_pct >= self.retire_pct {
            return invalid("spawn band must end before retire_pct");
        }
        Ok(())
    }

    #[must_use]
    pub const fn base_cost(&self, track: UpgradeTrack) -> u64 {
        match track {
            UpgradeTrack::ClickPower => self.base_costs.click_power,
            UpgradeTrack::AutoWaddler => self.base_costs.auto_waddler,
            UpgradeTrack::ClickMultiplier => self.base_costs.click_multiplier,
            UpgradeTrack::AutoBoost => self.base_costs.auto_boost,
        }
    }
}
