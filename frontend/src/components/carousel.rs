use log::{debug, error};
use yew::prelude::*;

use crate::dom;
use crate::interactions::carousel::{CarouselTrack, Direction};

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    /// Id of the moving track, e.g. `featuresGrid`.
    pub track_id: AttrValue,
    /// Card width plus gap, in pixels.
    pub stride: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Horizontally scrolled row of cards with previous/next buttons.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let stride = props.stride;
    let track = use_state(move || CarouselTrack::new(stride));
    let item_count = props.children.len();

    let scroll = |direction: Direction| {
        let track = track.clone();
        let track_id = props.track_id.clone();
        Callback::from(move |_: MouseEvent| {
            let viewport_width = match dom::viewport_size() {
                Ok((width, _)) => width,
                Err(e) => {
                    error!("Failed to read viewport width: {:?}", e);
                    return;
                }
            };
            let mut next = (*track).clone();
            let offset = next.scroll(direction, item_count, viewport_width);
            debug!("{} scrolled {:?} to {}px", track_id, direction, offset);
            track.set(next);
        })
    };

    html! {
        <div class={classes!("carousel", props.class.clone())}>
            <button class="scroll-btn scroll-btn-left" aria-label="Previous" onclick={scroll(Direction::Previous)}>
                {"‹"}
            </button>
            <div class="carousel-viewport">
                <div
                    id={props.track_id.clone()}
                    class="carousel-track"
                    style={format!("transform: {};", track.transform())}
                >
                    { for props.children.iter() }
                </div>
            </div>
            <button class="scroll-btn scroll-btn-right" aria-label="Next" onclick={scroll(Direction::Next)}>
                {"›"}
            </button>
        </div>
    }
}
