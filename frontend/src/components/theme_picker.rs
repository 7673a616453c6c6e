use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::interactions::theme::{ThemeSelection, RESHOW_DELAY_MS};

pub const THEMES: &[(&str, &str)] = &[
    ("classic", "Classic"),
    ("dark", "Dark"),
    ("neon", "Neon"),
    ("pastel", "Pastel"),
    ("ocean", "Ocean"),
];

#[function_component(ThemePicker)]
pub fn theme_picker() -> Html {
    let selection = use_state(|| ThemeSelection::new(THEMES[0].0));
    let preview_visible = use_state(|| true);

    let select_theme = |theme_id: &'static str| {
        let selection = selection.clone();
        let preview_visible = preview_visible.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*selection).clone();
            let preview = next.select(theme_id);
            info!("Theme preview switched to {}", preview.src);
            selection.set(next);

            // Hide, then re-show so the reveal transition replays.
            preview_visible.set(false);
            let preview_visible = preview_visible.clone();
            Timeout::new(RESHOW_DELAY_MS, move || {
                preview_visible.set(true);
            })
            .forget();
        })
    };

    let preview = selection.preview();

    html! {
        <div class="theme-picker">
            <div class="theme-badges">
                { for THEMES.iter().map(|(id, label)| html! {
                    <button
                        class={classes!("theme-badge", selection.is_active(id).then_some("active"))}
                        data-theme={*id}
                        onclick={select_theme(*id)}
                    >
                        {*label}
                    </button>
                }) }
            </div>
            <div
                id="themePreview"
                class={classes!("theme-preview", (*preview_visible).then_some("active"))}
            >
                <img id="themeImage" src={preview.src} alt={preview.alt} />
            </div>
        </div>
    }
}
