// ============================================================================
// DASHBOARD VIEW - bienvenida, logout y las tres listas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppEvent, AppState};

pub struct DashboardElements {
    pub section: Element,
    pub welcome: Element,
    pub projects: Element,
    pub leaderboard: Element,
    pub badges: Element,
}

pub fn render_dashboard(state: &AppState) -> Result<DashboardElements, JsValue> {
    log::debug!("🎬 [DASHBOARD] render_dashboard()");

    let section = ElementBuilder::new("section")?
        .id("dashboard-section")?
        .class("dashboard-section")
        .build();

    let welcome = ElementBuilder::new("span")?.id("welcome-username")?.build();

    let greeting = ElementBuilder::new("h2")?.text("Welcome, ").build();
    append_child(&greeting, &welcome)?;

    let logout = ElementBuilder::new("button")?
        .id("logout-button")?
        .attr("type", "button")?
        .class("btn-logout")
        .text("Logout")
        .build();
    {
        let state = state.clone();
        on_click(&logout, move |_| state.send(AppEvent::LogoutClicked))?;
    }

    let header = ElementBuilder::new("header")?
        .class("dashboard-header")
        .child(&greeting)?
        .child(&logout)?
        .build();

    let projects = ElementBuilder::new("ul")?.id("projects-ul")?.build();
    let leaderboard = ElementBuilder::new("ol")?.id("leaderboard-ol")?.build();
    let badges = ElementBuilder::new("ul")?.id("badges-ul")?.build();

    append_child(&section, &header)?;
    append_child(&section, &panel("My Projects", &projects)?)?;
    append_child(&section, &panel("Leaderboard", &leaderboard)?)?;
    append_child(&section, &panel("My Badges", &badges)?)?;

    Ok(DashboardElements {
        section,
        welcome,
        projects,
        leaderboard,
        badges,
    })
}

fn panel(title: &str, list: &Element) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h3")?.text(title).build();
    Ok(ElementBuilder::new("div")?
        .class("dashboard-panel")
        .child(&heading)?
        .child(list)?
        .build())
}
