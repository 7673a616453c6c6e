use log::{debug, error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::dom;
use crate::interactions::header::HeaderVisibility;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#themes", "Themes"),
    ("#screenshots", "Screenshots"),
    ("#download", "Download"),
];

fn set_menu_open(menu_open: &UseStateHandle<bool>, open: bool) {
    menu_open.set(open);
    if let Err(e) = dom::lock_page_scroll(open) {
        error!("Failed to toggle page scroll: {:?}", e);
    }
    debug!("Mobile menu {}", if open { "opened" } else { "closed" });
}

/// Fixed header with the desktop nav, the burger button and the mobile drawer.
#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu_open = use_state(|| false);
    let header_hidden = use_state(|| false);
    let visibility = use_mut_ref(HeaderVisibility::new);

    {
        let header_hidden = header_hidden.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match dom::window() {
                    Ok(window) => {
                        let scroll_callback = Closure::wrap(Box::new(move || {
                            match dom::scroll_top() {
                                Ok(scroll_top) => {
                                    let mut visibility = visibility.borrow_mut();
                                    let was_hidden = visibility.is_hidden();
                                    let hidden = visibility.on_scroll(scroll_top);
                                    if was_hidden != hidden {
                                        header_hidden.set(hidden);
                                    }
                                }
                                Err(e) => error!("Failed to read scroll offset: {:?}", e),
                            }
                        }) as Box<dyn FnMut()>);

                        if let Err(e) = window.add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            error!("Failed to watch scrolling: {:?}", e);
                        }

                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    Err(e) => {
                        error!("Header scroll tracking disabled: {:?}", e);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *menu_open {
                info!("Closing mobile menu on Escape");
                set_menu_open(&menu_open, false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let open = !*menu_open;
            set_menu_open(&menu_open, open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| set_menu_open(&menu_open, false))
    };

    let active = (*menu_open).then_some("active");

    html! {
        <>
            <header class={classes!((*header_hidden).then_some("hidden"))}>
                <nav class="nav-content">
                    <AnchorLink href="#top" class="nav-logo">
                        {"Merge Tiles"}
                    </AnchorLink>
                    <ul class="nav-links">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li><AnchorLink href={*href}>{*label}</AnchorLink></li>
                        }) }
                    </ul>
                    <button
                        id="mobileMenuBtn"
                        class={classes!("mobile-menu-btn", active)}
                        aria-label="Toggle menu"
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </nav>
            </header>
            <div
                id="mobileMenuBackdrop"
                class={classes!("mobile-menu-backdrop", active)}
                onclick={close_menu.reform(|_: MouseEvent| ())}
            ></div>
            <aside id="mobileMenuDrawer" class={classes!("mobile-menu-drawer", active)}>
                <ul class="mobile-menu-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li>
                            <AnchorLink href={*href} on_follow={close_menu.clone()}>
                                {*label}
                            </AnchorLink>
                        </li>
                    }) }
                </ul>
            </aside>
        </>
    }
}
