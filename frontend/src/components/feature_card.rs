use gloo_timers::callback::Timeout;
use yew::prelude::*;

const BOUNCE_HOVER: &str = "bounce 0.6s ease";
const BOUNCE_IDLE: &str = "bounce 2s infinite";
const IDLE_RESUME_MS: u32 = 600;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub text: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let icon_animation = use_state(|| BOUNCE_IDLE);

    let onmouseenter = {
        let icon_animation = icon_animation.clone();
        Callback::from(move |_: MouseEvent| icon_animation.set(BOUNCE_HOVER))
    };

    let onmouseleave = {
        let icon_animation = icon_animation.clone();
        Callback::from(move |_: MouseEvent| {
            let icon_animation = icon_animation.clone();
            Timeout::new(IDLE_RESUME_MS, move || icon_animation.set(BOUNCE_IDLE)).forget();
        })
    };

    html! {
        <div class="feature-card" {onmouseenter} {onmouseleave}>
            <div class="feature-icon" style={format!("animation: {};", *icon_animation)}>
                {props.icon.clone()}
            </div>
            <h3>{props.title.clone()}</h3>
            <p>{props.text.clone()}</p>
        </div>
    }
}
