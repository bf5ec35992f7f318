//! Warning banners under the quote.

use wasm_bindgen::JsValue;
use web_sys as web;
use wok_core::Warning;

pub const WARNINGS_ID: &str = "fit-warnings";

pub fn show(document: &web::Document, warnings: &[Warning]) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(WARNINGS_ID) else {
        return Ok(());
    };
    container.set_inner_html("");
    for warning in warnings {
        let banner = document.create_element("div")?;
        banner.set_class_name("warning");
        banner.set_text_content(Some(&warning.to_string()));
        container.append_child(&banner)?;
    }
    let _ = container.set_attribute(
        "style",
        if warnings.is_empty() { "display:none" } else { "" },
    );
    Ok(())
}
