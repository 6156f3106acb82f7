//! wasm entry points: page loaders and chrome wiring for the live document.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::chrome::{
    anchor_scroll_top, is_local_anchor, navbar_style, reveal_transition, NavMenu, RevealStyle,
    BODY_FADE_DELAY_MS, BODY_FADE_TRANSITION, REVEAL_HIDDEN, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR,
    REVEAL_SHOWN, REVEAL_THRESHOLD,
};
use crate::config::SiteConfig;
use crate::dom::web::BrowserDom;
use crate::fetch::HttpFetcher;
use crate::render::{fallback, LoadState, Loader};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Fill the portfolio page. `config_json` overrides the published
/// `folio.json`; the data resource comes from its `portfolio_data`.
#[wasm_bindgen]
pub async fn render_portfolio_page(config_json: Option<String>) {
    let Some((fetcher, mut dom)) = page_fetcher() else {
        return;
    };
    let config = SiteConfig::for_page(&fetcher, config_json.as_deref()).await;
    let mut loader = Loader::new(fetcher, &config);
    if let LoadState::Rendered(_) = loader.load_portfolio(&mut dom, &config.portfolio_data).await {
        if let Err(e) = reveal_tiles() {
            log::warn!("Tile fade-in unavailable: {:?}", e);
        }
    }
}

/// Fill a project page. Pages pass their data resource explicitly; without
/// one it is resolved from the current path against the site config.
#[wasm_bindgen]
pub async fn render_project_page(resource: Option<String>, config_json: Option<String>) {
    let Some((fetcher, mut dom)) = page_fetcher() else {
        return;
    };
    let config = SiteConfig::for_page(&fetcher, config_json.as_deref()).await;
    let path = web_sys::window().and_then(|w| w.location().pathname().ok());

    match config.project_resource(resource, path.as_deref()) {
        Some(resource) => {
            Loader::new(fetcher, &config).load_project(&mut dom, &resource).await;
        }
        None => {
            log::error!("No data resource for this project page");
            fallback::project(&mut dom, &config.containers);
        }
    }
}

fn page_fetcher() -> Option<(HttpFetcher, BrowserDom)> {
    let window = web_sys::window()?;
    let href = window.location().href().ok()?;
    let fetcher = match HttpFetcher::from_base(&href) {
        Ok(f) => f,
        Err(e) => {
            log::error!("Cannot fetch page data: {}", e);
            return None;
        }
    };
    let dom = BrowserDom::new(window.document()?);
    Some((fetcher, dom))
}

fn apply_reveal(el: &HtmlElement, style: RevealStyle) {
    let css = el.style();
    let _ = css.set_property("opacity", style.opacity);
    let _ = css.set_property("transform", style.transform);
}

/// Hide the rendered tiles and fade each in, staggered, once it scrolls into view.
fn reveal_tiles() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let on_visible = Closure::<dyn FnMut(Array)>::new(|entries: Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(tile) = entry.target().dyn_into::<HtmlElement>() {
                apply_reveal(&tile, REVEAL_SHOWN);
            }
        }
    });
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(on_visible.as_ref().unchecked_ref(), &options)?;
    on_visible.forget();

    let tiles = document.query_selector_all(REVEAL_SELECTOR)?;
    for i in 0..tiles.length() {
        let Some(tile) = tiles.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        apply_reveal(&tile, REVEAL_HIDDEN);
        let _ = tile.style().set_property("transition", &reveal_transition(i as usize));
        observer.observe(&tile);
    }
    Ok(())
}

/// Attach the page chrome: nav toggle, navbar scroll styling, smooth anchor
/// scrolling and the body fade-in.
#[wasm_bindgen]
pub fn install_chrome() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    install_nav_toggle(&document)?;
    install_navbar_scroll(&window, &document)?;
    install_smooth_scroll(&window, &document)?;
    fade_in_body(&window, &document)?;
    Ok(())
}

fn fade_in_body(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let css = body.style();
    css.set_property("opacity", "0")?;
    css.set_property("transition", BODY_FADE_TRANSITION)?;

    let show = Closure::once(move || {
        let _ = body.style().set_property("opacity", "1");
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        show.as_ref().unchecked_ref(),
        BODY_FADE_DELAY_MS,
    )?;
    show.forget();
    Ok(())
}

fn install_nav_toggle(document: &Document) -> Result<(), JsValue> {
    let (Some(hamburger), Some(menu)) = (
        document.query_selector(".hamburger")?,
        document.query_selector(".nav-menu")?,
    ) else {
        return Ok(());
    };
    let state = Rc::new(RefCell::new(NavMenu::default()));

    let on_toggle = {
        let (state, hamburger, menu) = (state.clone(), hamburger.clone(), menu.clone());
        Closure::<dyn FnMut()>::new(move || {
            let open = state.borrow_mut().toggle();
            set_active(&hamburger, &menu, open);
        })
    };
    hamburger.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    let links = document.query_selector_all(".nav-menu a")?;
    for i in 0..links.length() {
        let Some(link) = links.item(i) else {
            continue;
        };
        let on_close = {
            let (state, hamburger, menu) = (state.clone(), hamburger.clone(), menu.clone());
            Closure::<dyn FnMut()>::new(move || {
                state.borrow_mut().close();
                set_active(&hamburger, &menu, false);
            })
        };
        link.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
    }
    Ok(())
}

fn set_active(hamburger: &Element, menu: &Element, open: bool) {
    let _ = hamburger.class_list().toggle_with_force("active", open);
    let _ = menu.class_list().toggle_with_force("active", open);
}

fn install_navbar_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(nav) = document.query_selector("nav")? else {
        return Ok(());
    };
    let nav: HtmlElement = nav.dyn_into()?;

    let on_scroll = {
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let style = navbar_style(window.scroll_y().unwrap_or(0.0));
            let css = nav.style();
            let _ = css.set_property("background", style.background);
            let _ = css.set_property("box-shadow", style.box_shadow);
        })
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

fn install_smooth_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all("a[href^=\"#\"]")?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        if !is_local_anchor(&href) {
            continue;
        }

        let on_click = {
            let (window, document) = (window.clone(), document.clone());
            Closure::<dyn FnMut(Event)>::new(move |e: Event| {
                e.prevent_default();
                let target = document
                    .query_selector(&href)
                    .ok()
                    .flatten()
                    .and_then(|t| t.dyn_into::<HtmlElement>().ok());
                if let Some(target) = target {
                    let opts = ScrollToOptions::new();
                    opts.set_top(anchor_scroll_top(target.offset_top() as f64));
                    opts.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&opts);
                }
            })
        };
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}
