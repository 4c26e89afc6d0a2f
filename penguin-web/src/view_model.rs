//! Browser-side state derived from engine notifications.
//!
//! The engine knows nothing about popups, arrows or floating text. This model
//! collects its events and snapshots into exactly what the components draw.
use penguin_game::{GameEvent, GamePhase, GameView, Snapshot};

/// Which popup text a floating effect shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Steps,
    Energy,
}

/// A short-lived "+N" label over the click area.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingText {
    pub id: u64,
    pub kind: EffectKind,
    pub text: String,
    pub left_px: u32,
    pub top_px: u32,
}

/// The hunger bubble drawn above a penguin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HungerNote {
    pub penguin_id: u64,
    pub position_pct: f64,
    pub lane: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub snapshot: Option<Snapshot>,
    pub effects: Vec<FloatingText>,
    pub hunger: Option<HungerNote>,
    pub click_hint_visible: bool,
    pub goal_reached: bool,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            snapshot: None,
            effects: Vec::new(),
            hunger: None,
            click_hint_visible: true,
            goal_reached: false,
        }
    }
}

impl ViewModel {
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.snapshot
            .as_ref()
            .map_or(GamePhase::WelcomePending, |s| s.phase)
    }

    /// The fish arrow follows the hunger bubble.
    #[must_use]
    pub const fn fish_hint_visible(&self) -> bool {
        self.hunger.is_some()
    }

    fn push_effect(&mut self, id: u64, kind: EffectKind, amount: f64) {
        let label = match kind {
            EffectKind::Steps => "steps",
            EffectKind::Energy => "energy",
        };
        let (left_px, top_px) = effect_offset(id);
        self.effects.push(FloatingText {
            id,
            kind,
            text: format!("+{} {label}", format_amount(amount)),
            left_px,
            top_px,
        });
    }
}

impl GameView for ViewModel {
    fn render(&mut self, snapshot: &Snapshot) {
        self.snapshot = Some(snapshot.clone());
    }

    fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::StepsGained { effect_id, amount } => {
                self.push_effect(effect_id, EffectKind::Steps, amount);
            }
            GameEvent::EnergyGained { effect_id, amount } => {
                self.push_effect(effect_id, EffectKind::Energy, amount);
            }
            GameEvent::EffectExpired { effect_id } => {
                self.effects.retain(|effect| effect.id != effect_id);
            }
            GameEvent::Hunger {
                penguin_id,
                position_pct,
                lane,
            } => {
                self.hunger = Some(HungerNote {
                    penguin_id,
                    position_pct,
                    lane,
                });
            }
            GameEvent::HungerCleared => self.hunger = None,
            GameEvent::ClickHintDismissed => self.click_hint_visible = false,
            GameEvent::GoalReached => self.goal_reached = true,
            GameEvent::PenguinFlewAway { id } => {
                if self.hunger.is_some_and(|note| note.penguin_id == id) {
                    self.hunger = None;
                }
            }
            GameEvent::PhaseChanged { to, .. } => {
                log::info!("game phase is now {to}");
            }
            GameEvent::PenguinSpawned { .. }
            | GameEvent::PenguinRetired { .. }
            | GameEvent::UpgradePurchased { .. } => {}
        }
    }
}

/// Scatter popups over a 300x200 click area without a random source.
#[must_use]
pub const fn effect_offset(id: u64) -> (u32, u32) {
    let left = (id.wrapping_mul(97) % 300) as u32;
    let top = (id.wrapping_mul(61) % 200) as u32;
    (left, top)
}

/// Whole numbers print bare, fractions keep one decimal.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("{amount:.0}")
    } else {
        format!("{amount:.1}")
    }
}

/// Distance and energy are shown floored, like an odometer.
#[must_use]
pub fn format_floor(value: f64) -> String {
    format!("{:.0}", value.max(0.0).floor())
}
