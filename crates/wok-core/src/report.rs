//! One evaluation pass: options in, everything the form displays out.

use crate::fit::fits;
use crate::layout::{compute_layout, Layout, LayoutParams};
use crate::options::RangeOptions;
use crate::pricing::{format_usd, quote_breakdown, Quote};
use crate::warnings::{clamp_warnings, kind_warnings, Warning};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// The sanitized options the rest of the report was computed from.
    pub options: RangeOptions,
    pub layout: Layout,
    pub required_width_in: f32,
    pub fits: bool,
    pub quote: Quote,
    pub warnings: Vec<Warning>,
}

impl Report {
    /// Price lines in display order: subtotal, surcharge (single-burner units
    /// only), total.
    pub fn price_lines(&self) -> Vec<(String, String)> {
        let q = &self.quote;
        let mut lines = vec![(
            format!("{} × {}", q.burner_count, format_usd(q.per_burner)),
            format_usd(q.burner_subtotal),
        )];
        if q.surcharge > 0 {
            lines.push(("Single-unit surcharge".to_string(), format_usd(q.surcharge)));
        }
        lines.push(("Total".to_string(), format_usd(q.total)));
        lines
    }
}

pub fn evaluate(options: &RangeOptions) -> Report {
    let options = options.sanitized();
    let layout = compute_layout(&LayoutParams::from_options(&options));
    let required_width_in = layout.required_width_in;
    let fits = fits(required_width_in, options.kitchen_width_in);
    let quote = quote_breakdown(options.style, options.top, options.burner_count() as u32);

    let mut warnings = Vec::new();
    if !fits {
        warnings.push(Warning::KitchenWidthExceeded {
            required_in: required_width_in,
            available_in: options.kitchen_width_in,
        });
    }
    warnings.extend(kind_warnings(&options.burners));
    warnings.extend(clamp_warnings(&layout));

    log::debug!(
        "[report] total={} fits={} warnings={}",
        quote.total,
        fits,
        warnings.len()
    );
    Report {
        options,
        layout,
        required_width_in,
        fits,
        quote,
        warnings,
    }
}
