// ============================================================================
// LOGIN VIEW - Formulario usuario/contraseña + error inline
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, input_value, on_submit, ElementBuilder};
use crate::models::Credentials;
use crate::state::{AppEvent, AppState};

/// Elementos del login que se actualizan después del primer render
pub struct LoginElements {
    pub section: Element,
    pub error: Element,
    pub submit: Element,
}

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<LoginElements, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");

    let section = ElementBuilder::new("section")?
        .id("login-section")?
        .class("login-section")
        .build();

    let title = ElementBuilder::new("h2")?.text("Login").build();

    let username = text_input("username", "text", "username")?;
    let password = text_input("password", "password", "current-password")?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text("Login")
        .build();

    let form = ElementBuilder::new("form")?
        .id("login-form")?
        .class("login-form")
        .child(&field_label("username", "Username")?)?
        .child(&username)?
        .child(&field_label("password", "Password")?)?
        .child(&password)?
        .child(&submit)?
        .build();

    let error = ElementBuilder::new("p")?
        .id("login-error")?
        .class("login-error")
        .attr("role", "alert")?
        .build();

    // Los valores se leen en el momento del submit, no se guardan antes
    {
        let state = state.clone();
        on_submit(&form, move || {
            let credentials = match (input_value(&username), input_value(&password)) {
                (Ok(user), Ok(pass)) => Credentials::new(user, pass),
                _ => {
                    log::error!("❌ [LOGIN] No se pudieron leer los campos del formulario");
                    return;
                }
            };
            state.send(AppEvent::LoginSubmitted(credentials));
        })?;
    }

    append_child(&section, &title)?;
    append_child(&section, &form)?;
    append_child(&section, &error)?;

    Ok(LoginElements {
        section,
        error,
        submit,
    })
}

fn field_label(target: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?.attr("for", target)?.text(text).build())
}

fn text_input(id: &str, kind: &str, autocomplete: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("input")?
        .id(id)?
        .attr("name", id)?
        .attr("type", kind)?
        .attr("autocomplete", autocomplete)?
        .attr("required", "true")?
        .class("form-input")
        .build())
}
