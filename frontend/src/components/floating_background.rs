use log::debug;
use yew::prelude::*;

use crate::interactions::background::Background;

/// Confetti and number tiles drifting behind the page. Generated once per
/// page load.
#[function_component(FloatingBackground)]
pub fn floating_background() -> Html {
    let background = use_state(|| {
        let background = Background::generate(&mut rand::thread_rng());
        debug!(
            "Generated {} confetti and {} floating tiles",
            background.confetti.len(),
            background.tiles.len()
        );
        background
    });

    html! {
        <div id="bgContainer" class="bg-container" aria-hidden="true">
            { for background.confetti.iter().map(|piece| html! {
                <div class="confetti" style={piece.style()}></div>
            }) }
            { for background.tiles.iter().map(|tile| html! {
                <div class="floating-element tile" style={tile.style()}>{tile.label}</div>
            }) }
        </div>
    }
}
