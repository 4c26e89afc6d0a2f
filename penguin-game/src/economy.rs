//! Upgrade pricing and effect rules.
//!
//! Everything here is pure: prices depend only on a track's base cost and level,
//! and applying a purchase only touches the [`Upgrades`] record handed in.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    AUTO_BOOST_STEP, AUTO_WADDLER_STEP, CLICK_MULTIPLIER_FACTOR, CLICK_POWER_STEP,
    UPGRADE_GROWTH,
};
use crate::error::GameError;
use crate::numbers::{floor_f64_to_u64, level_to_exponent, u64_to_f64};

/// The four purchasable upgrade tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeTrack {
    /// Flat bonus added to each manual waddle.
    ClickPower,
    /// One more automated waddler; also brings a penguin along.
    AutoWaddler,
    /// Doubles the manual waddle.
    ClickMultiplier,
    /// Adds half a step to every automated waddler.
    AutoBoost,
}

impl UpgradeTrack {
    pub const ALL: [Self; 4] = [
        Self::ClickPower,
        Self::AutoWaddler,
        Self::ClickMultiplier,
        Self::AutoBoost,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClickPower => "click_power",
            Self::AutoWaddler => "auto_waddler",
            Self::ClickMultiplier => "click_multiplier",
            Self::AutoBoost => "auto_boost",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClickPower => "Stronger Flippers",
            Self::AutoWaddler => "Auto Waddler",
            Self::ClickMultiplier => "Waddle Multiplier",
            Self::AutoBoost => "Auto Boost",
        }
    }
}

impl fmt::Display for UpgradeTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpgradeTrack {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "click_power" | "clickPower" => Ok(Self::ClickPower),
            "auto_waddler" | "autoWaddler" => Ok(Self::AutoWaddler),
            "click_multiplier" | "clickMultiplier" => Ok(Self::ClickMultiplier),
            "auto_boost" | "autoBoost" => Ok(Self::AutoBoost),
            other => Err(GameError::InvalidTrackId(other.to_string())),
        }
    }
}

/// Price of the next level: `floor(base_cost * 1.5^level)`.
#[must_use]
pub fn upgrade_cost(base_cost: u64, level: u32) -> u64 {
    upgrade_cost_with_growth(base_cost, level, UPGRADE_GROWTH)
}

/// Price of the next level for an arbitrary growth factor.
#[must_use]
pub fn upgrade_cost_with_growth(base_cost: u64, level: u32, growth: f64) -> u64 {
    floor_f64_to_u64(u64_to_f64(base_cost) * growth.powi(level_to_exponent(level)))
}

/// Level and current effective value of one track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackState {
    pub level: u32,
    pub effect: f64,
}

impl TrackState {
    const fn starting(effect: f64) -> Self {
        Self { level: 0, effect }
    }
}

/// All four tracks of a game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Upgrades {
    pub click_power: TrackState,
    pub auto_waddler: TrackState,
    pub click_multiplier: TrackState,
    pub auto_boost: TrackState,
}

impl Default for Upgrades {
    fn default() -> Self {
        Self {
            click_power: TrackState::starting(1.0),
            auto_waddler: TrackState::starting(0.0),
            click_multiplier: TrackState::starting(1.0),
            auto_boost: TrackState::starting(1.0),
        }
    }
}

impl Upgrades {
    #[must_use]
    pub const fn track(&self, track: UpgradeTrack) -> &TrackState {
        match track {
            UpgradeTrack::ClickPower => &self.click_power,
            UpgradeTrack::AutoWaddler => &self.auto_waddler,
            UpgradeTrack::ClickMultiplier => &self.click_multiplier,
            UpgradeTrack::AutoBoost => &self.auto_boost,
        }
    }

    const fn track_mut(&mut self, track: UpgradeTrack) -> &mut TrackState {
        match track {
            UpgradeTrack::ClickPower => &mut self.click_power,
            UpgradeTrack::AutoWaddler => &mut self.auto_waddler,
            UpgradeTrack::ClickMultiplier => &mut self.click_multiplier,
            UpgradeTrack::AutoBoost => &mut self.auto_boost,
        }
    }

    /// Raise a track by one level and apply its effect rule. Returns the new level.
    pub fn apply(&mut self, track: UpgradeTrack) -> u32 {
        let state = self.track_mut(track);
        state.level = state.level.saturating_add(1);
        match track {
            UpgradeTrack::ClickPower => state.effect += CLICK_POWER_STEP,
            UpgradeTrack::AutoWaddler => state.effect += AUTO_WADDLER_STEP,
            UpgradeTrack::ClickMultiplier => state.effect *= CLICK_MULTIPLIER_FACTOR,
            UpgradeTrack::AutoBoost => state.effect += AUTO_BOOST_STEP,
        }
        state.level
    }

    /// Steps gained by one manual waddle.
    #[must_use]
    pub fn manual_steps(&self) -> f64 {
        self.click_power.effect * self.click_multiplier.effect
    }

    /// Steps gained by one automated tick.
    #[must_use]
    pub fn auto_steps(&self) -> f64 {
        self.auto_waddler.effect * self.auto_boost.effect
    }

    #[must_use]
    pub fn has_auto_production(&self) -> bool {
        self.auto_waddler.effect > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_starts_at_base_and_grows() {
        for base in [10, 50, 100, 200] {
            assert_eq!(upgrade_cost(base, 0), base);
            let mut previous = upgrade_cost(base, 0);
            for level in 1..20 {
                let next = upgrade_cost(base, level);
                assert!(next > previous, "base {base} level {level}");
                previous = next;
            }
        }
    }

    #[test]
    fn cost_floors_fractional_prices() {
        assert_eq!(upgrade_cost(10, 1), 15);
        assert_eq!(upgrade_cost(10, 2), 22);
        assert_eq!(upgrade_cost(10, 3), 33);
        assert_eq!(upgrade_cost(50, 3), 168);
        assert_eq!(upgrade_cost_with_growth(100, 2, 2.0), 400);
    }

    #[test]
    fn effect_rules_per_track() {
        let mut upgrades = Upgrades::default();
        assert!((upgrades.manual_steps() - 1.0).abs() < f64::EPSILON);
        assert!(!upgrades.has_auto_production());

        upgrades.apply(UpgradeTrack::ClickPower);
        upgrades.apply(UpgradeTrack::ClickMultiplier);
        upgrades.apply(UpgradeTrack::ClickMultiplier);
        assert!((upgrades.manual_steps() - 8.0).abs() < f64::EPSILON);

        upgrades.apply(UpgradeTrack::AutoWaddler);
        upgrades.apply(UpgradeTrack::AutoWaddler);
        let level = upgrades.apply(UpgradeTrack::AutoBoost);
        assert_eq!(level, 1);
        assert!((upgrades.auto_steps() - 3.0).abs() < f64::EPSILON);
        assert_eq!(upgrades.track(UpgradeTrack::AutoWaddler).level, 2);
    }

    #[test]
    fn parses_track_ids() {
        assert_eq!(
            "click_multiplier".parse::<UpgradeTrack>(),
            Ok(UpgradeTrack::ClickMultiplier)
        );
        assert_eq!("autoBoost".parse::<UpgradeTrack>(), Ok(UpgradeTrack::AutoBoost));
        assert_eq!(
            "rocket".parse::<UpgradeTrack>(),
            Err(GameError::InvalidTrackId("rocket".into()))
        );
        for track in UpgradeTrack::ALL {
            assert_eq!(track.as_str().parse::<UpgradeTrack>(), Ok(track));
        }
    }
}
