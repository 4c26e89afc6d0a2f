use anyhow::{Result, ensure};
use penguin_game::GamePhase;

use crate::logic::{SimulationSummary, Strategy};

pub type Expectation = fn(&SimulationSummary) -> Result<()>;

/// A named policy run plus what must hold at the end of it.
#[derive(Clone)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub strategy: Strategy,
    pub expectations: Vec<Expectation>,
}

fn no_violations(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.violations.is_empty(),
        "snapshot invariants broken: {}",
        summary.violations.join("; ")
    );
    Ok(())
}

fn untouched_colony(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.final_phase == GamePhase::Running,
        "idle game left Running: {}",
        summary.final_phase
    );
    ensure!(summary.penguins == 1, "expected 1 penguin, found {}", summary.penguins);
    ensure!(summary.clicks == 0, "idle player clicked {} times", summary.clicks);
    ensure!(
        (summary.energy - summary.max_energy).abs() < f64::EPSILON,
        "energy drifted to {}",
        summary.energy
    );
    Ok(())
}

fn starves_to_final_chance(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.final_chances >= 1, "final chance never offered");
    ensure!(summary.flew_away > 0, "no penguin flew away");
    ensure!(summary.hunger_warnings >= 1, "no hunger warning before starving");
    ensure!(
        summary.final_phase == GamePhase::GameOver,
        "declined final chance should end the game, phase is {}",
        summary.final_phase
    );
    Ok(())
}

fn well_fed(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.flew_away == 0,
        "{} penguins flew away despite fishing",
        summary.flew_away
    );
    ensure!(summary.final_chances == 0, "angler hit a final chance");
    ensure!(summary.distance_traveled > 0.0, "angler never moved");
    Ok(())
}

fn bought_every_track(summary: &SimulationSummary) -> Result<()> {
    let u = &summary.upgrades;
    ensure!(
        u.click_power.level >= 1
            && u.auto_waddler.level >= 1
            && u.click_multiplier.level >= 1
            && u.auto_boost.level >= 1,
        "missing upgrades: click power {}, auto waddler {}, multiplier {}, auto boost {}",
        u.click_power.level,
        u.auto_waddler.level,
        u.click_multiplier.level,
        u.auto_boost.level
    );
    ensure!(
        summary.purchases >= 4,
        "only {} purchases recorded",
        summary.purchases
    );
    Ok(())
}

#[must_use]
pub fn catalog() -> Vec<TestScenario> {
    vec![
        TestScenario {
            key: "smoke",
            name: "Idle Smoke",
            description: "Start the game and do nothing",
            strategy: Strategy::Idle,
            expectations: vec![no_violations, untouched_colony],
        },
        TestScenario {
            key: "starvation",
            name: "Starving Clicker",
            description: "Click without fishing until the colony starves",
            strategy: Strategy::Clicker,
            expectations: vec![no_violations, starves_to_final_chance],
        },
        TestScenario {
            key: "steady-angler",
            name: "Steady Angler",
            description: "Click and fish below 95% energy, never losing a penguin",
            strategy: Strategy::Angler,
            expectations: vec![no_violations, well_fed],
        },
        TestScenario {
            key: "shopping-spree",
            name: "Shopping Spree",
            description: "Buy the cheapest affordable upgrade until every track is owned",
            strategy: Strategy::Shopper,
            expectations: vec![no_violations, well_fed, bought_every_track],
        },
        TestScenario {
            key: "chaos-monkey",
            name: "Chaos Monkey",
            description: "Random intents; snapshot invariants must hold throughout",
            strategy: Strategy::Monkey,
            expectations: vec![no_violations],
        },
    ]
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog()
        .into_iter()
        .map(|scenario| (scenario.key, scenario.description))
        .collect()
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<TestScenario> {
    catalog().into_iter().find(|scenario| scenario.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{RunBudget, simulate};

    fn passes(key: &str, seed: u64) -> Result<()> {
        let scenario = get_scenario(key).expect("known scenario");
        let summary = simulate(scenario.strategy, seed, RunBudget::default());
        for expectation in &scenario.expectations {
            expectation(&summary)?;
        }
        Ok(())
    }

    #[test]
    fn catalog_keys_are_unique() {
        let mut keys: Vec<_> = list_scenarios().into_iter().map(|(key, _)| key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), catalog().len());
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn built_in_scenarios_pass_on_default_budget() {
        for key in ["smoke", "starvation", "steady-angler", "shopping-spree"] {
            passes(key, 1337).unwrap_or_else(|err| panic!("{key}: {err}"));
        }
    }

    #[test]
    fn short_budget_fails_the_shopper() {
        let scenario = get_scenario("shopping-spree").unwrap();
        let summary = simulate(
            scenario.strategy,
            1,
            RunBudget {
                duration_ms: 1_000,
                step_ms: 100,
            },
        );
        assert!(bought_every_track(&summary).is_err());
    }
}
