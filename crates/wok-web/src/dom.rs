use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current value of an `<input>` or `<select>` by id.
pub fn control_value(document: &web::Document, element_id: &str) -> Option<String> {
    let el = document.get_element_by_id(element_id)?;
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlSelectElement>().map(|s| s.value())
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.set_attribute("style", if visible { "" } else { "display:none" });
    }
}

/// Listen for `input` and `change` on an element; both bubble, so a form
/// element sees edits to every control inside it.
pub fn add_edit_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure =
        Closure::wrap(Box::new(move |_ev: web::Event| handler()) as Box<dyn FnMut(web::Event)>);
    for kind in ["input", "change"] {
        let _ = el.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
    true
}
