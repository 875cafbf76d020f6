//! Listener wiring - connects page events to the controller
//!
//! One listener per event per element, registered once at boot and kept alive
//! for the page lifetime. Every listener only translates the DOM event into a
//! [`UiEvent`] and hands it to [`ViewController::dispatch`].
//!
//! ```text
//! click / keydown ──Closure──► UiEvent ──► Rc<RefCell<ViewController>>
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlAnchorElement, HtmlElement, KeyboardEvent};

use crate::config::{ViewConfig, CONFIG_SCRIPT_ID};
use crate::controller::{UiEvent, ViewController};
use crate::error::{FolioError, Result};

type SharedController = Rc<RefCell<ViewController<HtmlElement>>>;

/// Build the controller for `document` and install every listener.
pub fn boot(document: &Document) -> Result<()> {
    if document.body().is_none() {
        return Err(FolioError::NoBody);
    }
    let config = read_config(document);
    let controller = ViewController::from_source(document, config);
    let elements = controller.elements().clone();
    tracing::info!("folio-ui ready: {}", elements.summary());

    let shared: SharedController = Rc::new(RefCell::new(controller));

    for link in &elements.brand_links {
        on_click(link, &shared, |_| Some(UiEvent::BrandClick))?;
    }
    if let Some(button) = &elements.explore_button {
        on_click(button, &shared, |_| Some(UiEvent::ExploreClick))?;
    }
    if let Some(arrow) = &elements.arrow {
        on_click(arrow, &shared, |_| Some(UiEvent::ArrowClick))?;
    }
    if let Some(link) = &elements.projects_link {
        on_click(link, &shared, |_| Some(UiEvent::ProjectsLinkClick))?;
    }
    for trigger in &elements.about_triggers {
        on_click(trigger, &shared, |_| Some(UiEvent::AboutClick))?;
    }
    for (index, control) in elements.filters.iter().enumerate() {
        on_click(control, &shared, move |_| Some(UiEvent::FilterClick { index }))?;
    }
    for (index, pill) in elements.flow_pills.iter().enumerate() {
        on_click(pill, &shared, move |_| Some(UiEvent::FlowPillClick { index }))?;
    }
    if let Some(close) = &elements.modal_close {
        on_click(close, &shared, |_| Some(UiEvent::ModalCloseClick))?;
    }
    if let Some(modal) = &elements.modal {
        listen(modal, "click", &shared, |event| {
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok());
            Some(UiEvent::OverlayClick { target })
        })?;
    }

    listen(document, "keydown", &shared, |event| {
        event
            .dyn_ref::<KeyboardEvent>()
            .map(|key_event| UiEvent::KeyDown { key: key_event.key() })
    })?;

    Ok(())
}

/// Load the inline JSON override, falling back to defaults.
fn read_config(document: &Document) -> ViewConfig {
    let raw = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
        .unwrap_or_default();
    match ViewConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{}; using default configuration", err);
            ViewConfig::default()
        }
    }
}

/// Click listener that also suppresses the jump of `href="#..."` links.
fn on_click<F>(element: &HtmlElement, shared: &SharedController, translate: F) -> Result<()>
where
    F: Fn(&Event) -> Option<UiEvent<HtmlElement>> + 'static,
{
    let hash_link = is_hash_link(element);
    listen(element, "click", shared, move |event| {
        if hash_link {
            event.prevent_default();
        }
        translate(event)
    })
}

fn listen<F>(
    target: &EventTarget,
    name: &str,
    shared: &SharedController,
    translate: F,
) -> Result<()>
where
    F: Fn(&Event) -> Option<UiEvent<HtmlElement>> + 'static,
{
    let controller = Rc::clone(shared);
    let callback = Closure::wrap(Box::new(move |event: Event| {
        let Some(ui_event) = translate(&event) else {
            return;
        };
        match controller.try_borrow_mut() {
            Ok(mut controller) => controller.dispatch(ui_event),
            Err(_) => tracing::debug!("Controller busy; nested event dropped"),
        }
    }) as Box<dyn FnMut(Event)>);

    target.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())?;

    // Listeners live as long as the page
    callback.forget();
    Ok(())
}

fn is_hash_link(element: &HtmlElement) -> bool {
    element
        .dyn_ref::<HtmlAnchorElement>()
        .and_then(|anchor| anchor.get_attribute("href"))
        .is_some_and(|href| href.starts_with('#'))
}
