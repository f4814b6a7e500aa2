// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::state::{AppEvent, AppState};
use crate::stores::SessionStore;
use crate::views::{render_app, update_app, AppElements};

/// Aplicación principal
pub struct App {
    state: AppState,
    elements: Rc<AppElements>,
    root: Element,
}

impl App {
    /// Crear nueva aplicación y montar el DOM en #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(SessionStore::browser());

        let (view, elements) = render_app(&state)?;
        clear_children(&root);
        append_child(&root, &view)?;
        let elements = Rc::new(elements);

        // Re-pintar tras cada lote de eventos
        {
            let elements = elements.clone();
            let state_for_render = state.clone();
            state.subscribe_to_changes(move || {
                if let Err(e) = update_app(&elements, &state_for_render.snapshot()) {
                    log::error!("❌ [APP] Error actualizando la vista: {:?}", e);
                }
            });
        }

        Ok(Self {
            state,
            elements,
            root,
        })
    }

    /// Decide la vista inicial según el token guardado
    pub fn start(&self) -> Result<(), JsValue> {
        log::info!("🎬 [APP] Arrancando en #{}", self.root.id());
        self.state.send(AppEvent::Started);
        // Primer pintado síncrono, sin esperar al timer
        update_app(&self.elements, &self.state.snapshot())
    }
}
