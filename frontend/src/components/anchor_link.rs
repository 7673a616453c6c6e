use log::error;
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after the link is followed, e.g. to close the drawer.
    #[prop_or_default]
    pub on_follow: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Link that smoothly scrolls to an element on this page instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_follow = props.on_follow.clone();
        Callback::from(move |e: MouseEvent| {
            if dom::is_in_page_anchor(&href) {
                e.prevent_default();
                if let Err(err) = dom::smooth_scroll_to_anchor(&href) {
                    error!("Failed to scroll to {}: {:?}", href, err);
                }
            }
            if let Some(on_follow) = &on_follow {
                on_follow.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
