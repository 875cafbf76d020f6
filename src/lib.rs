//! Folio UI - client-side interactivity for the Folio static site
//!
//! Section navigation, the collection filter over project cards, and the
//! About modal. The page loads the WASM module, which waits for the document
//! to be ready, resolves the elements it knows about and wires listeners.
//!
//! The controller is generic over [`dom::UiNode`], so all behavior can be
//! exercised natively against [`dom::MemoryDocument`].

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod filter;
pub mod modal;
pub mod registry;

#[cfg(target_arch = "wasm32")]
mod bind;

pub use config::ViewConfig;
pub use controller::{UiEvent, ViewController};
pub use error::FolioError;
pub use filter::FilterSelection;
pub use registry::ElementRegistry;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(err) = boot_when_ready() {
        tracing::error!("folio-ui failed to start: {}", err);
    }
}

/// Boot now if the document is parsed, otherwise on `DOMContentLoaded`.
#[cfg(target_arch = "wasm32")]
fn boot_when_ready() -> error::Result<()> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or(FolioError::NoWindow)?;
    let document = window.document().ok_or(FolioError::NoDocument)?;

    if document.ready_state() != web_sys::DocumentReadyState::Loading {
        return bind::boot(&document);
    }

    let ready_document = document.clone();
    let on_ready = Closure::once(move || {
        if let Err(err) = bind::boot(&ready_document) {
            tracing::error!("folio-ui failed to start: {}", err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}
