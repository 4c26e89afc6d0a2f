//! Centralized balance and tuning constants for the penguin simulation.
//!
//! These values back the defaults of [`crate::config::GameConfig`]. The bundled
//! JSON asset mirrors them so a missing or partial asset still yields the same
//! game.

// Journey ------------------------------------------------------------------
pub(crate) const TOTAL_DISTANCE: f64 = 1_000.0;
pub(crate) const FIRST_SPAWN_THRESHOLD: f64 = 2.0;
pub(crate) const STARTING_PENGUINS: usize = 1;

// Energy -------------------------------------------------------------------
pub(crate) const MAX_ENERGY: f64 = 100.0;
pub(crate) const MANUAL_ENERGY_COST: f64 = 1.0;
pub(crate) const REGEN_AMOUNT: f64 = 1.0;
pub(crate) const FISH_ENERGY: f64 = 1.0;
pub(crate) const HUNGER_PCT: f64 = 90.0;
pub(crate) const SCARCITY_PCT: f64 = 85.0;

// Upgrades -----------------------------------------------------------------
pub(crate) const UPGRADE_GROWTH: f64 = 1.5;
pub(crate) const BASE_COST_CLICK_POWER: u64 = 10;
pub(crate) const BASE_COST_AUTO_WADDLER: u64 = 50;
pub(crate) const BASE_COST_CLICK_MULTIPLIER: u64 = 100;
pub(crate) const BASE_COST_AUTO_BOOST: u64 = 200;
pub(crate) const CLICK_POWER_STEP: f64 = 1.0;
pub(crate) const AUTO_WADDLER_STEP: f64 = 1.0;
pub(crate) const CLICK_MULTIPLIER_FACTOR: f64 = 2.0;
pub(crate) const AUTO_BOOST_STEP: f64 = 0.5;

// Penguin placement --------------------------------------------------------
pub(crate) const RETIRE_PCT: f64 = 80.0;
pub(crate) const DISPLAY_CAP_PCT: f64 = 85.0;
pub(crate) const SPAWN_MIN_PCT: f64 = 0.0;
pub(crate) const SPAWN_JITTER_PCT: f64 = 10.0;
pub(crate) const LANE_MIN: f64 = 20.0;
pub(crate) const LANE_JITTER: f64 = 60.0;

// Timers (milliseconds) ----------------------------------------------------
pub(crate) const PRODUCE_PERIOD_MS: u64 = 1_000;
pub(crate) const REGEN_PERIOD_MS: u64 = 2_000;
pub(crate) const FISHING_PAUSE_MS: u64 = 1_000;
pub(crate) const EFFECT_LIFETIME_MS: u64 = 1_000;
pub(crate) const HUNGER_LIFETIME_MS: u64 = 3_000;

// Presentation hints -------------------------------------------------------
pub(crate) const CLICK_HINT_CLICKS: u32 = 3;
