//! Options form glue: raw control values in, price lines and warnings out.

use crate::dom;
use crate::overlay;
use web_sys as web;
use wok_core::{
    evaluate, format_usd, parse_or_fallback, BurnerKind, BurnerSize, ConstructionStyle,
    RangeOptions, Report, TopMaterial,
};

pub const FORM_ID: &str = "options-form";
const BURNER_COUNT_ID: &str = "burner-count";
const KITCHEN_WIDTH_ID: &str = "kitchen-width";
const UNIT_SCALE_ID: &str = "unit-scale";
const STYLE_ID: &str = "construction-style";
const TOP_ID: &str = "top-material";
const SUBTOTAL_ID: &str = "price-subtotal";
const SURCHARGE_ROW_ID: &str = "price-surcharge-row";
const SURCHARGE_ID: &str = "price-surcharge";
const TOTAL_ID: &str = "price-total";

/// Fold the form's current control values over the last committed options.
/// Anything missing or unparseable keeps its previous value.
pub fn read_options(document: &web::Document, previous: &RangeOptions) -> RangeOptions {
    let mut options = previous.clone();

    if let Some(raw) = dom::control_value(document, BURNER_COUNT_ID) {
        let count = parse_or_fallback(&raw, options.burner_count() as f32);
        options.set_burner_count(count.max(0.0) as usize);
    }
    for (i, spec) in options.burners.iter_mut().enumerate() {
        if let Some(size) = dom::control_value(document, &format!("burner-size-{i}"))
            .and_then(|v| v.parse::<BurnerSize>().ok())
        {
            spec.size = size;
        }
        if let Some(kind) = dom::control_value(document, &format!("burner-kind-{i}"))
            .and_then(|v| v.parse::<BurnerKind>().ok())
        {
            spec.kind = kind;
        }
    }
    if let Some(raw) = dom::control_value(document, KITCHEN_WIDTH_ID) {
        options.kitchen_width_in = parse_or_fallback(&raw, options.kitchen_width_in);
    }
    if let Some(raw) = dom::control_value(document, UNIT_SCALE_ID) {
        options.unit_scale = parse_or_fallback(&raw, options.unit_scale);
    }
    if let Some(style) =
        dom::control_value(document, STYLE_ID).and_then(|v| v.parse::<ConstructionStyle>().ok())
    {
        options.style = style;
    }
    if let Some(top) =
        dom::control_value(document, TOP_ID).and_then(|v| v.parse::<TopMaterial>().ok())
    {
        options.top = top;
    }
    options.sanitized()
}

pub fn render_report(document: &web::Document, report: &Report) {
    let q = &report.quote;
    dom::set_text(
        document,
        SUBTOTAL_ID,
        &format!(
            "{} × {} = {}",
            q.burner_count,
            format_usd(q.per_burner),
            format_usd(q.burner_subtotal)
        ),
    );
    dom::set_visible(document, SURCHARGE_ROW_ID, q.surcharge > 0);
    dom::set_text(document, SURCHARGE_ID, &format_usd(q.surcharge));
    dom::set_text(document, TOTAL_ID, &format_usd(q.total));
    if let Err(e) = overlay::show(document, &report.warnings) {
        log::error!("[form] warning banner error: {:?}", e);
    }
}

/// Re-read the form, re-run every engine and update the page.
pub fn refresh(document: &web::Document, committed: &mut RangeOptions) -> Report {
    *committed = read_options(document, committed);
    let report = evaluate(committed);
    log::info!(
        "[form] burners={} total={} fits={} warnings={}",
        report.options.burner_count(),
        report.quote.total,
        report.fits,
        report.warnings.len()
    );
    render_report(document, &report);
    report
}
