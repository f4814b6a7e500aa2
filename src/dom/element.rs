// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Obtener document
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar el contenido (equivalente a innerHTML = '')
pub fn clear_children(element: &Element) {
    element.set_text_content(None);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Agregar un nodo de texto sin crear elemento
pub fn append_text(parent: &Element, text: &str) -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    parent.append_child(&doc.create_text_node(text)).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Mostrar/ocultar con `display` (block / none)
pub fn set_visible(element: &Element, visible: bool) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property("display", if visible { "block" } else { "none" })
}

/// Valor actual de un <input>
pub fn input_value(element: &Element) -> Result<String, JsValue> {
    element
        .dyn_ref::<HtmlInputElement>()
        .map(|input| input.value())
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlInputElement"))
}

pub fn set_disabled(element: &Element, disabled: bool) -> Result<(), JsValue> {
    if disabled {
        element.set_attribute("disabled", "true")
    } else {
        element.remove_attribute("disabled")
    }
}
