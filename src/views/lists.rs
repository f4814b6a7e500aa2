// ============================================================================
// LIST RENDERERS - proyectos, leaderboard y badges
// ============================================================================
// La parte pura (`*_items`) decide qué <li> hay; `render_list` solo los pinta.
// Todo texto del servidor entra como textContent, nunca como HTML.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, append_text, clear_children, create_element, set_text_content, ElementBuilder,
};
use crate::models::{BadgeAward, LeaderboardEntry, Project};
use crate::utils::{EMPTY_BADGES, EMPTY_LEADERBOARD, EMPTY_PROJECTS};

/// Contenido de un <li>
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Text(String),
    /// `<strong>label</strong>: text`
    Labeled { label: String, text: String },
}

/// Un item por elemento, en orden, o un único item con el mensaje vacío
pub fn list_items<T>(
    items: &[T],
    empty_message: &str,
    format: impl Fn(&T) -> ListItem,
) -> Vec<ListItem> {
    if items.is_empty() {
        return vec![ListItem::Text(empty_message.to_string())];
    }
    items.iter().map(format).collect()
}

pub fn project_items(projects: &[Project]) -> Vec<ListItem> {
    list_items(projects, EMPTY_PROJECTS, |project| ListItem::Text(project.display_text()))
}

pub fn leaderboard_items(entries: &[LeaderboardEntry]) -> Vec<ListItem> {
    list_items(entries, EMPTY_LEADERBOARD, |entry| ListItem::Text(entry.display_text()))
}

pub fn badge_items(awards: &[BadgeAward]) -> Vec<ListItem> {
    list_items(awards, EMPTY_BADGES, |award| ListItem::Labeled {
        label: award.badge.name.clone(),
        text: award.badge.description.clone(),
    })
}

/// Reemplaza el contenido del contenedor por los items
pub fn render_list(container: &Element, items: &[ListItem]) -> Result<(), JsValue> {
    clear_children(container);

    for item in items {
        let li = create_element("li")?;
        match item {
            ListItem::Text(text) => set_text_content(&li, text),
            ListItem::Labeled { label, text } => {
                let strong = ElementBuilder::new("strong")?.text(label).build();
                append_child(&li, &strong)?;
                append_text(&li, &format!(": {}", text))?;
            }
        }
        append_child(container, &li)?;
    }

    Ok(())
}
