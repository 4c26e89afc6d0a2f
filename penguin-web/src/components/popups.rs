use super::modal::Modal;
use penguin_game::GamePhase;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub phase: GamePhase,
    pub on_start: Callback<()>,
    /// `true` buys energy, `false` gives up.
    pub on_final_chance: Callback<bool>,
}

/// The welcome, final-chance and game-over overlays, chosen by phase.
#[function_component(Popups)]
pub fn popups(p: &Props) -> Html {
    let on_start = {
        let cb = p.on_start.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_buy = {
        let cb = p.on_final_chance.clone();
        Callback::from(move |_: MouseEvent| cb.emit(true))
    };
    let on_decline = {
        let cb = p.on_final_chance.clone();
        Callback::from(move |_: MouseEvent| cb.emit(false))
    };

    html! {
        <>
            <Modal
                open={p.phase == GamePhase::WelcomePending}
                id="welcome-overlay"
                title="Penguin Journey"
                description={AttrValue::from("Waddle your colony to the glacier. Tap to walk, fish to eat, and keep your penguins from flying off.")}
            >
                <button id="start-btn" class="btn" onclick={on_start}>{ "Got it!" }</button>
            </Modal>
            <Modal
                open={p.phase == GamePhase::FinalChancePending}
                id="popup-overlay"
                title="Last penguin standing"
                description={AttrValue::from("Only one penguin is left and the colony is starving.")}
            >
                <button id="buy-energy-btn" class="btn" onclick={on_buy}>{ "Buy energy" }</button>
                <button id="decline-btn" class="btn btn-ghost" onclick={on_decline}>{ "Let them go" }</button>
            </Modal>
            <Modal
                open={p.phase == GamePhase::GameOver}
                id="game-over-overlay"
                title="Game over"
                description={AttrValue::from("The last penguin flew away.")}
            />
        </>
    }
}
