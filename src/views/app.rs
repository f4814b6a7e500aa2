// ============================================================================
// APP VIEW - Esqueleto de la página + actualización incremental
// ============================================================================
// El DOM se construye una sola vez; cada cambio de estado solo toca
// visibilidad, textos y listas (así no se pierde lo escrito en el form).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, clear_children, set_disabled, set_text_content, set_visible, ElementBuilder,
};
use crate::state::{AppState, SessionState, View};
use crate::views::dashboard::{render_dashboard, DashboardElements};
use crate::views::lists::{badge_items, leaderboard_items, project_items, render_list};
use crate::views::login::{render_login, LoginElements};

pub struct AppElements {
    pub login: LoginElements,
    pub dashboard: DashboardElements,
}

/// Construye el DOM completo (ambas vistas, ocultas hasta el primer update)
pub fn render_app(state: &AppState) -> Result<(Element, AppElements), JsValue> {
    let container = ElementBuilder::new("main")?.class("app-container").build();

    let login = render_login(state)?;
    let dashboard = render_dashboard(state)?;

    set_visible(&login.section, false)?;
    set_visible(&dashboard.section, false)?;

    append_child(&container, &login.section)?;
    append_child(&container, &dashboard.section)?;

    Ok((container, AppElements { login, dashboard }))
}

/// Aplica el estado de presentación al DOM ya construido
pub fn update_app(elements: &AppElements, state: &SessionState) -> Result<(), JsValue> {
    let login = &elements.login;
    let dashboard = &elements.dashboard;

    // Nunca las dos vistas a la vez
    set_visible(&login.section, state.view == View::Login)?;
    set_visible(&dashboard.section, state.view == View::Dashboard)?;

    set_text_content(&login.error, state.login_error.as_deref().unwrap_or(""));
    set_disabled(&login.submit, state.login_pending)?;

    set_text_content(&dashboard.welcome, &state.welcome_name);

    match &state.dashboard {
        Some(data) => {
            render_list(&dashboard.projects, &project_items(&data.projects))?;
            render_list(&dashboard.leaderboard, &leaderboard_items(&data.leaderboard))?;
            render_list(&dashboard.badges, &badge_items(&data.badges))?;
        }
        None => {
            clear_children(&dashboard.projects);
            clear_children(&dashboard.leaderboard);
            clear_children(&dashboard.badges);
        }
    }

    Ok(())
}
