use crate::view_model::{HungerNote, format_floor};
use penguin_game::Snapshot;
use yew::prelude::*;

/// Hunger bubbles float this far above the penguin's lane.
const HUNGER_LIFT_PX: f64 = 80.0;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub snapshot: Snapshot,
    #[prop_or_default]
    pub hunger: Option<HungerNote>,
}

#[function_component(JourneyMap)]
pub fn journey_map(p: &Props) -> Html {
    let s = &p.snapshot;
    let energy_pct = if s.max_energy > 0.0 {
        (s.energy / s.max_energy * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    html! {
        <div id="map-container" class="map">
            <div id="penguin-container" class="penguin-container">
                { for s.penguins.iter().map(|penguin| {
                    let style = format!("left: {:.2}%; bottom: {:.0}px;", penguin.position_pct, penguin.lane);
                    html! {
                        <div key={penguin.id} id={format!("penguin-{}", penguin.id)} class="penguin" {style}>
                            <span class="penguin-sprite" role="img" aria-label="Penguin">{ "🐧" }</span>
                        </div>
                    }
                }) }
            </div>
            { p.hunger.map(|note| {
                let style = format!("left: {:.2}%; bottom: {:.0}px;", note.position_pct, note.lane + HUNGER_LIFT_PX);
                html! { <div class="hunger-message" {style} /> }
            }).unwrap_or_default() }
            <div class="progress-bar">
                <div id="progress-fill" class="progress-fill" style={format!("width: {:.1}%;", s.progress_pct)} />
            </div>
            <div id="distance-text" class="distance-text">
                <span class="feet-icon" aria-hidden="true">{ "👣 " }</span>
                { format_floor(s.distance_traveled) }
            </div>
            <div class="energy-bar">
                <div id="energy-fill" class="energy-fill" style={format!("width: {energy_pct:.1}%;")} />
            </div>
            <div id="energy-text" class="energy-text">{ format!("Energy: {}", format_floor(s.energy)) }</div>
            <div class="hut">{ "🏠 HUT" }</div>
        </div>
    }
}
