use std::cell::{Cell, RefCell};
use std::rc::Rc;

use penguin_game::numbers::floor_f64_to_u64;
use penguin_game::{GameEngine, GameError, GamePhase, UpgradeTrack};
use yew::prelude::*;

use crate::components::controls::Controls;
use crate::components::hud::Hud;
use crate::components::journey_map::JourneyMap;
use crate::components::popups::Popups;
use crate::components::shop::Shop;
use crate::dom::{self, IntervalGuard, KeyListener};
use crate::view_model::ViewModel;

/// How often the browser pumps the engine clock.
const PUMP_INTERVAL_MS: i32 = 100;

type SharedEngine = Rc<RefCell<GameEngine>>;

#[cfg(target_arch = "wasm32")]
fn initial_seed() -> u64 {
    floor_f64_to_u64(js_sys::Math::random() * 9_007_199_254_740_991.0)
}

#[cfg(not(target_arch = "wasm32"))]
const fn initial_seed() -> u64 {
    0x5EED
}

/// Wrap an engine intent so it flushes into the view model afterwards.
/// Rejected intents are logged and otherwise ignored.
fn dispatch<T: 'static>(
    engine: &SharedEngine,
    sync: &Callback<()>,
    name: &'static str,
    intent: impl Fn(&mut GameEngine, T) -> Result<(), GameError> + 'static,
) -> Callback<T> {
    let engine = engine.clone();
    let sync = sync.clone();
    Callback::from(move |arg: T| {
        let result = intent(&mut engine.borrow_mut(), arg);
        if let Err(err) = result {
            log::debug!("{name} ignored: {err}");
        }
        sync.emit(());
    })
}

/// Whether the browser clock should be driving the engine in `phase`.
const fn pump_wanted(phase: GamePhase) -> bool {
    phase.ticks()
}

#[function_component(App)]
pub fn app() -> Html {
    let engine: SharedEngine = use_mut_ref(|| GameEngine::with_seed(initial_seed()));
    let model = use_mut_ref(ViewModel::default);
    let redraw = use_force_update();

    let sync = {
        let engine = engine.clone();
        let model = model.clone();
        Callback::from(move |()| {
            engine.borrow_mut().flush(&mut *model.borrow_mut());
            redraw.force_update();
        })
    };

    // The interval only exists while the engine has timers to fire; the
    // cleanup of the previous run drops it once the game is over.
    let pumping = pump_wanted(engine.borrow().phase());
    {
        let engine = engine.clone();
        let sync = sync.clone();
        use_effect_with(pumping, move |&pumping| {
            let pump = if pumping {
                let last = Rc::new(Cell::new(dom::now_ms()));
                IntervalGuard::start(PUMP_INTERVAL_MS, move || {
                    let now = dom::now_ms();
                    let elapsed = floor_f64_to_u64(now - last.get());
                    if elapsed == 0 {
                        return;
                    }
                    last.set(now);
                    engine.borrow_mut().advance_time(elapsed);
                    sync.emit(());
                })
                .map_err(|err| dom::console_error(&dom::js_error_message(&err)))
                .ok()
            } else {
                None
            };
            move || drop(pump)
        });
    }

    let on_start = dispatch(&engine, &sync, "start", |engine, ()| engine.start());
    let on_waddle = dispatch(&engine, &sync, "waddle", |engine, ()| {
        engine.manual_action().map(|_| ())
    });
    let on_fish = dispatch(&engine, &sync, "fish", |engine, ()| engine.catch_fish());
    let on_buy = dispatch(&engine, &sync, "purchase", |engine, track: UpgradeTrack| {
        engine.purchase(track).map(|_| ())
    });
    let on_final_chance = dispatch(&engine, &sync, "final chance", |engine, bought: bool| {
        engine.dismiss_final_chance(bought).map(|_| ())
    });

    {
        let on_waddle = on_waddle.clone();
        use_effect_with((), move |()| {
            let listener = KeyListener::attach(move |event: web_sys::KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    on_waddle.emit(());
                }
            });
            let listener = match listener {
                Ok(listener) => Some(listener),
                Err(err) => {
                    dom::console_error(&dom::js_error_message(&err));
                    None
                }
            };
            move || drop(listener)
        });
    }

    let model = model.borrow();
    let snapshot = model
        .snapshot
        .clone()
        .unwrap_or_else(|| engine.borrow().snapshot());
    let phase = snapshot.phase;

    html! {
        <main id="main" class="game-container" role="main">
            <h1>{ "Penguin Journey" }</h1>
            if model.goal_reached {
                <p class="goal-banner" role="status">{ "The colony reached the glacier!" }</p>
            }
            <Hud snapshot={snapshot.clone()} />
            <JourneyMap snapshot={snapshot.clone()} hunger={model.hunger} />
            <Controls
                effects={model.effects.clone()}
                click_hint_visible={model.click_hint_visible}
                fish_hint_visible={model.fish_hint_visible()}
                {on_waddle}
                {on_fish}
            />
            <Shop upgrades={snapshot.upgrades.clone()} {on_buy} />
            <Popups {phase} {on_start} {on_final_chance} />
        </main>
    }
}
