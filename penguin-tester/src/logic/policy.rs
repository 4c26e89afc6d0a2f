use std::fmt;

use penguin_game::{GameEngine, GameError, GamePhase, UpgradeTrack, numbers::u64_to_f64};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Anglers and shoppers go fishing once energy dips under this.
const FISHING_PCT: f64 = 95.0;

/// Policy interface for automated play.
pub trait PlayerPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Take at most one intent for the current step.
    fn act(&mut self, engine: &mut GameEngine);
}

/// Built-in player behaviours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Idle,
    Clicker,
    Angler,
    Shopper,
    Monkey,
}

impl Strategy {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Clicker => "Clicker",
            Self::Angler => "Angler",
            Self::Shopper => "Shopper",
            Self::Monkey => "Monkey",
        }
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn PlayerPolicy> {
        match self {
            Self::Idle => Box::new(IdlePolicy),
            Self::Clicker => Box::new(ClickerPolicy),
            Self::Angler => Box::new(AnglerPolicy),
            Self::Shopper => Box::new(ShopperPolicy),
            Self::Monkey => Box::new(MonkeyPolicy::new(seed)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn attempt<T>(policy: &str, result: Result<T, GameError>) {
    if let Err(err) = result {
        log::trace!("{policy}: {err}");
    }
}

/// Every policy clicks through the welcome popup first.
fn ensure_started(policy: &str, engine: &mut GameEngine) -> bool {
    if engine.phase() == GamePhase::WelcomePending {
        attempt(policy, engine.start());
        return true;
    }
    false
}

fn cheapest_affordable(engine: &GameEngine) -> Option<UpgradeTrack> {
    let balance = engine.ledger().distance_traveled();
    UpgradeTrack::ALL
        .into_iter()
        .map(|track| (engine.upgrade_cost(track), track))
        .filter(|(cost, _)| u64_to_f64(*cost) <= balance)
        .min_by_key(|(cost, _)| *cost)
        .map(|(_, track)| track)
}

struct IdlePolicy;
struct ClickerPolicy;
struct AnglerPolicy;
struct ShopperPolicy;

struct MonkeyPolicy {
    rng: ChaCha20Rng,
}

impl MonkeyPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl PlayerPolicy for IdlePolicy {
    fn name(&self) -> &'static str {
        "Idle"
    }

    fn act(&mut self, engine: &mut GameEngine) {
        ensure_started(self.name(), engine);
    }
}

impl PlayerPolicy for ClickerPolicy {
    fn name(&self) -> &'static str {
        "Clicker"
    }

    fn act(&mut self, engine: &mut GameEngine) {
        if ensure_started(self.name(), engine) {
            return;
        }
        match engine.phase() {
            GamePhase::Running => attempt(self.name(), engine.manual_action()),
            GamePhase::FinalChancePending => {
                attempt(self.name(), engine.dismiss_final_chance(false));
            }
            GamePhase::WelcomePending | GamePhase::GameOver => {}
        }
    }
}

impl PlayerPolicy for AnglerPolicy {
    fn name(&self) -> &'static str {
        "Angler"
    }

    fn act(&mut self, engine: &mut GameEngine) {
        if ensure_started(self.name(), engine) {
            return;
        }
        match engine.phase() {
            GamePhase::Running if engine.ledger().energy_pct() < FISHING_PCT => {
                attempt(self.name(), engine.catch_fish());
            }
            GamePhase::Running => attempt(self.name(), engine.manual_action()),
            GamePhase::FinalChancePending => {
                attempt(self.name(), engine.dismiss_final_chance(true));
            }
            GamePhase::WelcomePending | GamePhase::GameOver => {}
        }
    }
}

impl PlayerPolicy for ShopperPolicy {
    fn name(&self) -> &'static str {
        "Shopper"
    }

    fn act(&mut self, engine: &mut GameEngine) {
        if ensure_started(self.name(), engine) {
            return;
        }
        match engine.phase() {
            GamePhase::Running if engine.ledger().energy_pct() < FISHING_PCT => {
                attempt(self.name(), engine.catch_fish());
            }
            GamePhase::Running => {
                if let Some(track) = cheapest_affordable(engine) {
                    attempt(self.name(), engine.purchase(track));
                } else {
                    attempt(self.name(), engine.manual_action());
                }
            }
            GamePhase::FinalChancePending => {
                attempt(self.name(), engine.dismiss_final_chance(true));
            }
            GamePhase::WelcomePending | GamePhase::GameOver => {}
        }
    }
}

impl PlayerPolicy for MonkeyPolicy {
    fn name(&self) -> &'static str {
        "Monkey"
    }

    fn act(&mut self, engine: &mut GameEngine) {
        if ensure_started(self.name(), engine) {
            return;
        }
        match engine.phase() {
            GamePhase::Running => match self.rng.gen_range(0..10) {
                0..=5 => attempt(self.name(), engine.manual_action()),
                6 | 7 => attempt(self.name(), engine.catch_fish()),
                _ => {
                    let track = UpgradeTrack::ALL[self.rng.gen_range(0..UpgradeTrack::ALL.len())];
                    attempt(self.name(), engine.purchase(track));
                }
            },
            GamePhase::FinalChancePending => {
                let buy = self.rng.gen_bool(0.5);
                attempt(self.name(), engine.dismiss_final_chance(buy));
            }
            GamePhase::WelcomePending | GamePhase::GameOver => {}
        }
    }
}
