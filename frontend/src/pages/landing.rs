use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::carousel::Carousel;
use crate::components::feature_card::FeatureCard;
use crate::components::floating_background::FloatingBackground;
use crate::components::image_modal::ImageModal;
use crate::components::site_header::SiteHeader;
use crate::components::stat_badge::StatBadge;
use crate::components::theme_picker::ThemePicker;
use crate::dom::{self, WatchOptions};
use crate::interactions::carousel::{FEATURE_CARD_STRIDE, SCREENSHOT_CARD_STRIDE};
use crate::interactions::parallax::Parallax;

const REVEAL_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right, .scale-in";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

const FEATURES: &[(&str, &str, &str)] = &[
    ("🎮", "Classic Gameplay", "Slide, merge and chase the 2048 tile with smooth, responsive swipes."),
    ("↩️", "Unlimited Undo", "Take back a bad move any time. No ads, no waiting."),
    ("🎨", "Beautiful Themes", "Pick from hand-tuned color palettes for day and night."),
    ("🏆", "Best Scores", "Track your personal records and longest streaks."),
    ("📴", "Fully Offline", "Play anywhere. Nothing leaves your device."),
    ("🧩", "Custom Boards", "Try 3x3 for a quick game or 6x6 for a marathon."),
    ("⚡", "Instant Resume", "Pick up exactly where you left off."),
];

const SCREENSHOTS: &[(&str, &str)] = &[
    ("screenshot-1.png", "Game board mid-run"),
    ("screenshot-2.png", "Reaching the 2048 tile"),
    ("screenshot-3.png", "Theme gallery"),
    ("screenshot-4.png", "Statistics screen"),
    ("screenshot-5.png", "Board size picker"),
    ("screenshot-6.png", "Settings"),
];

const STATS: &[(&str, &str)] = &[
    ("2048", "tile to beat"),
    ("5", "themes"),
    ("100", "percent offline"),
];

/// Starts entrance animations the first time their element scrolls into view.
fn install_scroll_reveal() -> Result<(), wasm_bindgen::JsValue> {
    let elements = dom::query_all(REVEAL_SELECTOR)?;
    for element in &elements {
        dom::set_style(element, "animation-play-state", "paused")?;
    }
    let options = WatchOptions {
        threshold: REVEAL_THRESHOLD,
        root_margin: Some(REVEAL_ROOT_MARGIN),
        once: false,
    };
    dom::watch_intersections(&elements, options, |element| {
        if let Err(e) = dom::set_style(element, "animation-play-state", "running") {
            error!("Failed to start entrance animation: {:?}", e);
        }
    })?;
    info!("Scroll reveal watching {} elements", elements.len());
    Ok(())
}

/// Moves the floating tiles toward the smoothed cursor position, forever.
fn install_parallax() -> Result<(), wasm_bindgen::JsValue> {
    let parallax = Rc::new(RefCell::new(Parallax::new()));

    let tracker = parallax.clone();
    let mousemove = Closure::wrap(Box::new(move |e: MouseEvent| {
        match dom::viewport_size() {
            Ok((width, height)) => tracker.borrow_mut().set_pointer(
                e.client_x() as f64,
                e.client_y() as f64,
                width,
                height,
            ),
            Err(err) => error!("Failed to read viewport size: {:?}", err),
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    dom::document()?
        .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
    mousemove.forget();

    let mut report = dom::ReportOnce::default();
    dom::on_every_frame(move |_| {
        let mut state = parallax.borrow_mut();
        state.step();
        let moved = dom::query_all(".floating-element").and_then(|elements| {
            elements.iter().enumerate().try_for_each(|(index, element)| {
                dom::set_style(element, "transform", &state.transform_for(index))
            })
        });
        if let Err(e) = moved {
            // Fails the same way every frame; say it once.
            if report.first() {
                error!("Failed to move floating elements: {:?}", e);
            }
        }
        true
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);
    let modal_src = use_state(String::new);

    // Document-level effects, installed once after the first render.
    use_effect_with_deps(
        move |_| {
            if let Err(e) = install_scroll_reveal() {
                error!("Scroll reveal disabled: {:?}", e);
            }
            if let Err(e) = install_parallax() {
                error!("Parallax disabled: {:?}", e);
            }
            || ()
        },
        (),
    );

    let open_modal = {
        let modal_open = modal_open.clone();
        let modal_src = modal_src.clone();
        Callback::from(move |src: String| {
            info!("Opening image modal for {}", src);
            modal_src.set(src);
            modal_open.set(true);
            if let Err(e) = dom::lock_page_scroll(true) {
                error!("Failed to lock page scroll: {:?}", e);
            }
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            modal_open.set(false);
            if let Err(e) = dom::lock_page_scroll(false) {
                error!("Failed to restore page scroll: {:?}", e);
            }
        })
    };

    html! {
        <div class="landing-page" id="top">
            <style>{LANDING_CSS}</style>
            <FloatingBackground />
            <SiteHeader />

            <section class="hero">
                <h1 class="fade-in">{"Merge Tiles"}</h1>
                <p class="hero-subtitle fade-in">
                    {"The sliding number puzzle, done right. No ads, no tracking, just you and the 2048 tile."}
                </p>
                <div class="hero-cta-group scale-in">
                    <AnchorLink href="#download" class="hero-cta">{"Get the App"}</AnchorLink>
                    <AnchorLink href="#features" class="hero-secondary">{"See Features"}</AnchorLink>
                </div>
                <div class="stats">
                    { for STATS.iter().map(|(value, label)| html! {
                        <StatBadge value={*value} label={*label} />
                    }) }
                </div>
            </section>

            <section id="features" class="section">
                <h2 class="section-title slide-in-left">{"Features"}</h2>
                <Carousel track_id="featuresGrid" stride={FEATURE_CARD_STRIDE} class="features">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <FeatureCard icon={*icon} title={*title} text={*text} />
                    }) }
                </Carousel>
            </section>

            <section id="themes" class="section">
                <h2 class="section-title slide-in-right">{"Pick Your Theme"}</h2>
                <ThemePicker />
            </section>

            <section id="screenshots" class="section">
                <h2 class="section-title slide-in-left">{"Screenshots"}</h2>
                <Carousel track_id="screenshotsGrid" stride={SCREENSHOT_CARD_STRIDE} class="screenshots">
                    { for SCREENSHOTS.iter().map(|(src, alt)| {
                        let full_src = src.to_string();
                        let onclick = open_modal.reform(move |_: MouseEvent| full_src.clone());
                        html! {
                            <div class="screenshot-card" {onclick}>
                                <img src={*src} alt={*alt} loading="lazy" />
                            </div>
                        }
                    }) }
                </Carousel>
            </section>

            <section id="download" class="section download scale-in">
                <h2 class="section-title">{"Ready to Merge?"}</h2>
                <p>{"Free on iOS and Android."}</p>
                <div class="store-links">
                    <a class="store-link" href="https://apps.apple.com/" target="_blank" rel="noopener noreferrer">
                        {"App Store"}
                    </a>
                    <a class="store-link" href="https://play.google.com/store" target="_blank" rel="noopener noreferrer">
                        {"Google Play"}
                    </a>
                </div>
            </section>

            <footer class="footer">
                <AnchorLink href="#top">{"Back to top"}</AnchorLink>
            </footer>

            <ImageModal open={*modal_open} src={(*modal_src).clone()} on_close={close_modal} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        position: relative;
        min-height: 100vh;
        color: #2d3436;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(10px);
        transition: transform 0.3s ease;
    }
    header.hidden {
        transform: translateY(-100%);
    }
    .nav-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 2rem;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
        list-style: none;
    }
    .mobile-menu-btn {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .mobile-menu-btn span {
        width: 24px;
        height: 3px;
        background: #2d3436;
        border-radius: 2px;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    .mobile-menu-btn.active span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
    .mobile-menu-btn.active span:nth-child(2) { opacity: 0; }
    .mobile-menu-btn.active span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
    .mobile-menu-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.4);
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
        z-index: 150;
    }
    .mobile-menu-backdrop.active {
        opacity: 1;
        pointer-events: auto;
    }
    .mobile-menu-drawer {
        position: fixed;
        top: 0;
        right: 0;
        width: 280px;
        height: 100vh;
        background: #fff;
        transform: translateX(100%);
        transition: transform 0.3s ease;
        z-index: 200;
    }
    .mobile-menu-drawer.active {
        transform: translateX(0);
    }
    @media (max-width: 768px) {
        .nav-links { display: none; }
        .mobile-menu-btn { display: flex; }
    }

    .bg-container {
        position: fixed;
        inset: 0;
        overflow: hidden;
        pointer-events: none;
        z-index: -1;
    }
    .confetti {
        position: absolute;
        top: -20px;
        width: 10px;
        height: 10px;
        opacity: 0.7;
        animation: confettiFall linear infinite;
    }
    .floating-element.tile {
        position: absolute;
        padding: 0.6rem 0.8rem;
        border-radius: 8px;
        background: rgba(237, 194, 46, 0.25);
        font-weight: bold;
        animation: float ease-in-out infinite;
    }
    @keyframes confettiFall {
        from { transform: translateY(0) rotate(0deg); }
        to { transform: translateY(110vh) rotate(720deg); }
    }
    @keyframes float {
        0%, 100% { margin-top: 0; }
        50% { margin-top: -20px; }
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }

    .fade-in { animation: fadeIn 0.8s ease-out both; }
    .slide-in-left { animation: slideInLeft 0.8s ease-out both; }
    .slide-in-right { animation: slideInRight 0.8s ease-out both; }
    .scale-in { animation: scaleIn 0.6s ease-out both; }
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes slideInLeft {
        from { opacity: 0; transform: translateX(-50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes slideInRight {
        from { opacity: 0; transform: translateX(50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes scaleIn {
        from { opacity: 0; transform: scale(0.9); }
        to { opacity: 1; transform: scale(1); }
    }

    .hero {
        padding: 10rem 2rem 4rem;
        text-align: center;
    }
    .stats {
        display: flex;
        justify-content: center;
        gap: 1.5rem;
        margin-top: 3rem;
    }
    .stat-badge {
        padding: 1rem 1.5rem;
        border-radius: 16px;
        background: #fff;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
    }
    .stat-badge strong {
        display: block;
        font-size: 2rem;
    }
    .section {
        padding: 4rem 2rem;
    }
    .carousel {
        position: relative;
        display: flex;
        align-items: center;
    }
    .carousel-viewport {
        overflow: hidden;
        flex: 1;
    }
    .carousel-track {
        display: flex;
        gap: 35px;
        transition: transform 0.5s ease;
    }
    .feature-card {
        flex: 0 0 280px;
        padding: 2rem;
        border-radius: 20px;
        background: #fff;
    }
    .feature-icon {
        font-size: 2.5rem;
    }
    .screenshot-card {
        flex: 0 0 350px;
        cursor: zoom-in;
    }
    .screenshot-card img {
        width: 100%;
        border-radius: 20px;
    }
    .theme-badge {
        padding: 0.5rem 1.2rem;
        border-radius: 999px;
        border: 2px solid transparent;
        cursor: pointer;
    }
    .theme-badge.active {
        border-color: #f67c5f;
    }
    .theme-preview {
        opacity: 0;
        transform: translateY(10px);
        transition: opacity 0.4s ease, transform 0.4s ease;
    }
    .theme-preview.active {
        opacity: 1;
        transform: translateY(0);
    }
    .modal {
        display: none;
        position: fixed;
        inset: 0;
        z-index: 300;
        background: rgba(0, 0, 0, 0.9);
        align-items: center;
        justify-content: center;
    }
    .modal.active {
        display: flex;
    }
    .modal-content {
        max-width: 90vw;
        max-height: 90vh;
    }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 2rem;
        color: #fff;
        font-size: 2.5rem;
        cursor: pointer;
    }
"#;
