use crate::view_model::{EffectKind, FloatingText};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub effects: Vec<FloatingText>,
    pub click_hint_visible: bool,
    pub fish_hint_visible: bool,
    pub on_waddle: Callback<()>,
    pub on_fish: Callback<()>,
}

/// The waddle and fish buttons plus their floating feedback.
#[function_component(Controls)]
pub fn controls(p: &Props) -> Html {
    let on_waddle = {
        let cb = p.on_waddle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_fish = {
        let cb = p.on_fish.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="click-area">
            <button id="collectButton" class="btn btn-primary" onclick={on_waddle}>{ "Waddle" }</button>
            if p.click_hint_visible {
                <div id="click-arrow" class="hint-arrow" aria-hidden="true">{ "⬅ tap or press space" }</div>
            }
            <button id="fishButton" class="btn" onclick={on_fish}>{ "Catch fish" }</button>
            if p.fish_hint_visible {
                <div id="fish-arrow" class="hint-arrow" aria-hidden="true">{ "⬅ they are hungry" }</div>
            }
            { for p.effects.iter().map(|effect| {
                let class = classes!(
                    "click-effect",
                    (effect.kind == EffectKind::Energy).then_some("click-effect--energy")
                );
                let style = format!("left: {}px; top: {}px;", effect.left_px, effect.top_px);
                html! {
                    <div key={effect.id} {class} {style}>{ effect.text.clone() }</div>
                }
            }) }
        </section>
    }
}
