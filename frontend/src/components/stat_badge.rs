use log::{debug, error, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, WatchOptions};
use crate::interactions::counter::{parse_leading_int, CountUp};

const STAT_THRESHOLD: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct StatBadgeProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

/// Statistic that counts up from zero the first time half of it is visible.
#[function_component(StatBadge)]
pub fn stat_badge(props: &StatBadgeProps) -> Html {
    let badge_ref = use_node_ref();
    let value_ref = use_node_ref();

    {
        let badge_ref = badge_ref.clone();
        let value_ref = value_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(badge) = badge_ref.cast::<Element>() {
                    let options = WatchOptions {
                        threshold: STAT_THRESHOLD,
                        root_margin: None,
                        once: true,
                    };
                    let watched = dom::watch_intersections(&[badge], options, move |_| {
                        if let Some(strong) = value_ref.cast::<Element>() {
                            count_up(strong);
                        }
                    });
                    if let Err(e) = watched {
                        error!("Failed to watch stat badge: {:?}", e);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="stat-badge" ref={badge_ref}>
            <strong ref={value_ref}>{props.value.clone()}</strong>
            <span>{props.label.clone()}</span>
        </div>
    }
}

/// Animates the text of `strong` from 0 to the integer it currently shows.
fn count_up(strong: Element) {
    let text = strong.text_content().unwrap_or_default();
    let Some(target) = parse_leading_int(&text) else {
        warn!("Stat badge text {:?} is not a number, leaving it as is", text);
        return;
    };
    debug!("Counting stat up to {}", target);

    let mut count = CountUp::new(target);
    let started = dom::on_every_frame(move |timestamp| {
        let (value, done) = count.frame(timestamp);
        strong.set_text_content(Some(&value.to_string()));
        !done
    });
    if let Err(e) = started {
        error!("Failed to start stat animation: {:?}", e);
    }
}
