// ============================================================================
// QUALITY DASHBOARD - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que construyen/actualizan DOM (sin lógica)
// - ViewModels: máquina de estados Login/Dashboard + ejecución de comandos
// - Services: SOLO comunicación HTTP
// - Stores: token persistido
// - State: Rc<RefCell> + cola de eventos
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod stores;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

// Instancia única de la App mientras viva la página
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Quality Dashboard - Rust Puro + MVVM");

    let app = App::new()?;
    app.start()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}
