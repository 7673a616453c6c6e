#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use landing::components::anchor_link::{AnchorLink, AnchorLinkProps};
use landing::components::carousel::{Carousel, CarouselProps};
use landing::components::feature_card::{FeatureCard, FeatureCardProps};
use landing::components::site_header::SiteHeader;
use landing::components::stat_badge::{StatBadge, StatBadgeProps};
use landing::components::theme_picker::ThemePicker;
use landing::interactions::carousel::{FEATURE_CARD_STRIDE, SCREENSHOT_CARD_STRIDE};
use landing::pages::landing::Landing;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent};
use yew::html::ChildrenRenderer;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root(id: &str) -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let root = document.create_element("div").expect("create test root");
    root.set_id(id);
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("append test root");
    root
}

/// Root pinned to the top of the viewport, whatever the page scroll is.
fn mount_pinned_root(id: &str) -> Element {
    let root = mount_root(id);
    root.set_attribute("style", "position: fixed; top: 0; left: 0; z-index: 1000;")
        .expect("pin test root");
    root
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{} rendered", selector))
}

fn click(element: &Element) {
    element
        .dyn_ref::<HtmlElement>()
        .expect("clickable element")
        .click();
}

fn is_active(element: &Element) -> bool {
    element.class_list().contains("active")
}

fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("create keydown");
    web_sys::window()
        .expect("window available")
        .dispatch_event(&event)
        .expect("dispatch keydown");
}

fn body_overflow() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .map(|body| body.style().get_property_value("overflow").unwrap_or_default())
        .unwrap_or_default()
}

async fn settle() {
    TimeoutFuture::new(0).await;
}

#[wasm_bindgen_test]
async fn menu_toggle_twice_returns_to_closed() {
    let root = mount_root("menu-toggle-root");
    let _app = yew::Renderer::<SiteHeader>::with_root(root.clone()).render();
    settle().await;

    let button = find(&root, "#mobileMenuBtn");
    let backdrop = find(&root, "#mobileMenuBackdrop");
    let drawer = find(&root, "#mobileMenuDrawer");

    click(&button);
    settle().await;
    assert!(is_active(&button) && is_active(&backdrop) && is_active(&drawer));
    assert_eq!(body_overflow(), "hidden");

    click(&button);
    settle().await;
    assert!(!is_active(&button) && !is_active(&backdrop) && !is_active(&drawer));
    assert_eq!(body_overflow(), "auto");
}

#[wasm_bindgen_test]
async fn backdrop_and_escape_close_the_menu() {
    let root = mount_root("menu-close-root");
    let _app = yew::Renderer::<SiteHeader>::with_root(root.clone()).render();
    settle().await;

    let button = find(&root, "#mobileMenuBtn");
    let drawer = find(&root, "#mobileMenuDrawer");

    click(&button);
    settle().await;
    click(&find(&root, "#mobileMenuBackdrop"));
    settle().await;
    assert!(!is_active(&drawer));

    click(&button);
    settle().await;
    press_escape();
    settle().await;
    assert!(!is_active(&drawer));
    assert!(!is_active(&button));
}

#[wasm_bindgen_test]
async fn selecting_a_theme_swaps_preview_and_replays_reveal() {
    let root = mount_root("theme-root");
    let _app = yew::Renderer::<ThemePicker>::with_root(root.clone()).render();
    settle().await;

    click(&find(&root, ".theme-badge[data-theme='dark']"));
    settle().await;

    let image = find(&root, "#themeImage");
    assert_eq!(image.get_attribute("src").as_deref(), Some("dark.png"));
    assert_eq!(image.get_attribute("alt").as_deref(), Some("dark Theme"));

    let active = root
        .query_selector_all(".theme-badge.active")
        .expect("valid selector");
    assert_eq!(active.length(), 1);
    let active_badge = active
        .item(0)
        .and_then(|node| node.dyn_into::<Element>().ok())
        .expect("active badge");
    assert_eq!(active_badge.get_attribute("data-theme").as_deref(), Some("dark"));

    let preview = find(&root, "#themePreview");
    assert!(!is_active(&preview), "preview hides right after the swap");
    TimeoutFuture::new(120).await;
    assert!(is_active(&preview), "preview is shown again after the delay");
}

#[wasm_bindgen_test]
async fn screenshot_opens_modal_and_escape_closes_it() {
    let root = mount_root("landing-root");
    let _app = yew::Renderer::<Landing>::with_root(root.clone()).render();
    settle().await;

    click(&find(&root, ".screenshot-card"));
    settle().await;

    let modal = find(&root, "#imageModal");
    assert!(is_active(&modal));
    let image = find(&root, "#modalImage");
    assert_eq!(image.get_attribute("src").as_deref(), Some("screenshot-1.png"));
    assert_eq!(body_overflow(), "hidden");

    press_escape();
    settle().await;
    assert!(!is_active(&modal));
    assert_eq!(body_overflow(), "auto");
}

#[wasm_bindgen_test]
async fn background_renders_confetti_and_tiles() {
    let root = mount_root("background-root");
    let _app = yew::Renderer::<Landing>::with_root(root.clone()).render();
    settle().await;

    let container = find(&root, "#bgContainer");
    let confetti = container.query_selector_all(".confetti").expect("valid selector");
    let tiles = container
        .query_selector_all(".floating-element.tile")
        .expect("valid selector");
    assert_eq!(confetti.length(), 30);
    assert_eq!(tiles.length(), 20);
    let eleventh = tiles
        .item(10)
        .and_then(|node| node.text_content())
        .unwrap_or_default();
    assert_eq!(eleventh, "2048");
}

fn style_of(element: &Element) -> String {
    element.get_attribute("style").unwrap_or_default()
}

fn play_state(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .expect("styled element")
        .style()
        .get_property_value("animation-play-state")
        .unwrap_or_default()
}

fn dispatch_mouse(element: &Element, event_type: &str) {
    let event = MouseEvent::new(event_type).expect("create mouse event");
    element.dispatch_event(&event).expect("dispatch mouse event");
}

fn cards(count: usize) -> ChildrenRenderer<Html> {
    ChildrenRenderer::new(
        (0..count)
            .map(|i| html! { <div class="card">{i}</div> })
            .collect(),
    )
}

#[wasm_bindgen_test]
async fn drawer_link_closes_the_menu() {
    let root = mount_root("drawer-link-root");
    let _app = yew::Renderer::<SiteHeader>::with_root(root.clone()).render();
    settle().await;

    let button = find(&root, "#mobileMenuBtn");
    let backdrop = find(&root, "#mobileMenuBackdrop");
    let drawer = find(&root, "#mobileMenuDrawer");

    click(&button);
    settle().await;
    assert!(is_active(&drawer));
    assert_eq!(body_overflow(), "hidden");

    click(&find(&root, ".mobile-menu-links a"));
    settle().await;
    assert!(!is_active(&button) && !is_active(&backdrop) && !is_active(&drawer));
    assert_eq!(body_overflow(), "auto");
}

#[wasm_bindgen_test]
async fn link_to_missing_target_does_nothing() {
    let window = web_sys::window().expect("window available");
    let hash_before = window.location().hash().unwrap_or_default();
    let scroll_before = window.scroll_y().unwrap_or_default();

    let root = mount_root("missing-anchor-root");
    let props = AnchorLinkProps {
        href: "#no-such-section".into(),
        class: Classes::new(),
        on_follow: None,
        children: ChildrenRenderer::new(vec![html! { {"Nowhere"} }]),
    };
    let _app = yew::Renderer::<AnchorLink>::with_root_and_props(root.clone(), props).render();
    settle().await;

    click(&find(&root, "a"));
    TimeoutFuture::new(50).await;

    assert_eq!(window.location().hash().unwrap_or_default(), hash_before);
    assert_eq!(window.scroll_y().unwrap_or_default(), scroll_before);
}

#[wasm_bindgen_test]
async fn carousel_buttons_translate_the_track_by_one_card() {
    for (track_id, stride, expected) in [
        ("testFeaturesGrid", FEATURE_CARD_STRIDE, "translateX(-315px)"),
        ("testScreenshotsGrid", SCREENSHOT_CARD_STRIDE, "translateX(-385px)"),
    ] {
        let root = mount_root(&format!("{}-root", track_id));
        let props = CarouselProps {
            track_id: track_id.into(),
            stride,
            class: Classes::new(),
            children: cards(12),
        };
        let _app = yew::Renderer::<Carousel>::with_root_and_props(root.clone(), props).render();
        settle().await;

        let track = find(&root, &format!("#{}", track_id));
        click(&find(&root, ".scroll-btn-left"));
        settle().await;
        assert!(style_of(&track).contains("translateX(0px)"));

        click(&find(&root, ".scroll-btn-right"));
        settle().await;
        assert!(style_of(&track).contains(expected), "{}: {}", track_id, style_of(&track));

        click(&find(&root, ".scroll-btn-left"));
        settle().await;
        assert!(style_of(&track).contains("translateX(0px)"));
    }
}

#[wasm_bindgen_test]
async fn carousel_with_every_card_visible_stays_put() {
    let root = mount_root("single-card-root");
    let props = CarouselProps {
        track_id: "singleCardGrid".into(),
        stride: FEATURE_CARD_STRIDE,
        class: Classes::new(),
        children: cards(1),
    };
    let _app = yew::Renderer::<Carousel>::with_root_and_props(root.clone(), props).render();
    settle().await;

    click(&find(&root, ".scroll-btn-right"));
    settle().await;
    assert!(style_of(&find(&root, "#singleCardGrid")).contains("translateX(0px)"));
}

#[wasm_bindgen_test]
async fn feature_icon_bounces_on_hover_and_idles_after_leaving() {
    let root = mount_root("feature-card-root");
    let props = FeatureCardProps {
        icon: "🎮".into(),
        title: "Classic Gameplay".into(),
        text: "Slide and merge.".into(),
    };
    let _app = yew::Renderer::<FeatureCard>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let card = find(&root, ".feature-card");
    let icon = find(&root, ".feature-icon");
    assert!(style_of(&icon).contains("bounce 2s infinite"));

    dispatch_mouse(&card, "mouseenter");
    settle().await;
    assert!(style_of(&icon).contains("bounce 0.6s ease"));

    dispatch_mouse(&card, "mouseleave");
    settle().await;
    assert!(style_of(&icon).contains("bounce 0.6s ease"), "idle resumes only after a delay");
    TimeoutFuture::new(700).await;
    assert!(style_of(&icon).contains("bounce 2s infinite"));
}

#[wasm_bindgen_test]
async fn stat_counts_up_once_and_is_not_restarted() {
    let root = mount_pinned_root("stat-root");
    let props = StatBadgeProps {
        value: "2048".into(),
        label: "tile to beat".into(),
    };
    let _app = yew::Renderer::<StatBadge>::with_root_and_props(root.clone(), props).render();
    settle().await;

    TimeoutFuture::new(2000).await;
    let value = find(&root, ".stat-badge strong");
    assert_eq!(value.text_content().unwrap_or_default(), "2048");

    // Leave the viewport and come back; the watcher is gone after the first run.
    root.set_attribute("style", "position: fixed; top: 300vh; left: 0;")
        .expect("move badge away");
    TimeoutFuture::new(200).await;
    root.set_attribute("style", "position: fixed; top: 0; left: 0; z-index: 1000;")
        .expect("move badge back");
    TimeoutFuture::new(200).await;
    assert_eq!(value.text_content().unwrap_or_default(), "2048");
}

#[wasm_bindgen_test]
async fn entrance_animations_start_only_on_screen() {
    let window = web_sys::window().expect("window available");
    let document = window.document().expect("document available");

    // Make every section a screen and a half tall so the download block is
    // well below the fold.
    let spacing = document.create_element("style").expect("create style");
    spacing.set_text_content(Some("#reveal-root .section { min-height: 150vh; }"));
    document
        .head()
        .expect("head available")
        .append_child(&spacing)
        .expect("append style");

    let root = mount_root("reveal-root");
    root.set_attribute("style", "position: absolute; top: 0; left: 0; width: 100%;")
        .expect("position reveal root");
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let _app = yew::Renderer::<Landing>::with_root(root.clone()).render();
    settle().await;
    TimeoutFuture::new(300).await;

    let title = find(&root, ".hero h1.fade-in");
    assert_eq!(play_state(&title), "running");

    let download = find(&root, "#download");
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    assert!(download.get_bounding_client_rect().top() > viewport_height);
    assert_eq!(play_state(&download), "paused");
}
