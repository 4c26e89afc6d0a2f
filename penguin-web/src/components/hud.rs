use crate::view_model::{format_amount, format_floor};
use penguin_game::Snapshot;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub snapshot: Snapshot,
}

#[function_component(Hud)]
pub fn hud(p: &Props) -> Html {
    let s = &p.snapshot;
    html! {
        <section class="stats" aria-label="Journey stats">
            <div class="stat">
                <span class="stat-label">{ "Steps" }</span>
                <span id="gems" class="stat-value">{ format_floor(s.distance_traveled) }</span>
            </div>
            <div class="stat">
                <span class="stat-label">{ "Per waddle" }</span>
                <span id="clickPower" class="stat-value">{ format_amount(s.effective_click_power) }</span>
            </div>
            <div class="stat">
                <span class="stat-label">{ "Auto waddlers" }</span>
                <span id="autoCollectors" class="stat-value">{ format_amount(s.auto_production_count) }</span>
            </div>
            <div class="stat">
                <span class="stat-label">{ "Per second" }</span>
                <span id="gemsPerSecond" class="stat-value">{ format!("{:.1}", s.production_per_tick) }</span>
            </div>
        </section>
    }
}
