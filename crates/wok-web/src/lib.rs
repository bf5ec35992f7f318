#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;
use wok_core::{compose_scene, Camera, Primitive, RangeOptions};

mod dom;
mod form;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wok-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let committed = Rc::new(RefCell::new(RangeOptions::default()));

    form::refresh(&document, &mut committed.borrow_mut());

    let doc_for_edit = document.clone();
    let committed_for_edit = committed.clone();
    let wired = dom::add_edit_listener(&document, form::FORM_ID, move || {
        form::refresh(&doc_for_edit, &mut committed_for_edit.borrow_mut());
        notify_changed(&doc_for_edit);
    });
    if !wired {
        anyhow::bail!("missing #{}", form::FORM_ID);
    }
    Ok(())
}

/// Tell the renderer the configuration changed; it pulls fresh geometry via
/// `sceneFor`.
fn notify_changed(document: &web::Document) {
    match web::Event::new("wok-range-changed") {
        Ok(ev) => {
            let _ = document.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[form] change event error: {:?}", e),
    }
}

fn options_from_js(options: JsValue) -> Result<RangeOptions, JsError> {
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

/// Full report (layout, quote, warnings) for an options object.
#[wasm_bindgen]
pub fn evaluate(options: JsValue) -> Result<JsValue, JsError> {
    let report = wok_core::evaluate(&options_from_js(options)?);
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsError::new(&e.to_string()))
}

/// Primitives to draw and a camera that frames them.
#[wasm_bindgen(js_name = sceneFor)]
pub fn scene_for(options: JsValue, aspect: f32) -> Result<JsValue, JsError> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SceneOut {
        primitives: Vec<Primitive>,
        view_proj: [f32; 16],
    }

    let report = wok_core::evaluate(&options_from_js(options)?);
    let camera = Camera::framing(&report.layout.chassis, aspect);
    let out = SceneOut {
        primitives: compose_scene(&report.layout, report.options.top),
        view_proj: (camera.projection_matrix() * camera.view_matrix()).to_cols_array(),
    };
    serde_wasm_bindgen::to_value(&out).map_err(|e| JsError::new(&e.to_string()))
}

/// Quote from raw form labels; unknown labels price at zero.
#[wasm_bindgen]
pub fn quote(style: &str, top: &str, burner_count: u32) -> u32 {
    wok_core::quote_labels(style, top, burner_count)
}
