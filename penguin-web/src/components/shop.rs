use penguin_game::{UpgradeTrack, UpgradeView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub upgrades: Vec<UpgradeView>,
    pub on_buy: Callback<UpgradeTrack>,
}

#[function_component(Shop)]
pub fn shop(p: &Props) -> Html {
    html! {
        <section class="upgrades" aria-label="Upgrades">
            { for p.upgrades.iter().map(|upgrade| {
                let track = upgrade.track;
                let onclick = {
                    let cb = p.on_buy.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(track))
                };
                let class = classes!(
                    "upgrade",
                    (!upgrade.affordable).then_some("upgrade--locked")
                );
                html! {
                    <button
                        key={track.as_str()}
                        id={format!("buy-{}", track.as_str())}
                        {class}
                        disabled={!upgrade.affordable}
                        {onclick}
                    >
                        <span class="upgrade-name">{ track.label() }</span>
                        <span class="upgrade-level">{ format!("Lv {}", upgrade.level) }</span>
                        <span class="upgrade-cost">{ format!("{} steps", upgrade.cost) }</span>
                    </button>
                }
            }) }
        </section>
    }
}
