use log::info;
use yew::prelude::*;

pub mod config;
pub mod dom;
pub mod interactions {
    pub mod background;
    pub mod carousel;
    pub mod counter;
    pub mod header;
    pub mod parallax;
    pub mod theme;
}
pub mod components {
    pub mod anchor_link;
    pub mod carousel;
    pub mod feature_card;
    pub mod floating_background;
    pub mod image_modal;
    pub mod site_header;
    pub mod stat_badge;
    pub mod theme_picker;
}
pub mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
pub fn App() -> Html {
    info!("Rendering Landing page");
    html! { <Landing /> }
}
