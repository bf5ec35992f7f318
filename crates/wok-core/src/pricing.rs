//! Per-burner base rates and the quote built from them. Whole US dollars.

use crate::constants::SINGLE_UNIT_SURCHARGE_USD;
use crate::options::{ConstructionStyle, TopMaterial};
use serde::{Deserialize, Serialize};

/// Base rate per burner for a style and top.
pub const fn per_burner_rate(style: ConstructionStyle, top: TopMaterial) -> u32 {
    match (style, top) {
        (ConstructionStyle::NewYork, TopMaterial::Black) => 850,
        (ConstructionStyle::NewYork, TopMaterial::Stainless) => 950,
        (ConstructionStyle::California, TopMaterial::Black) => 950,
        (ConstructionStyle::California, TopMaterial::Stainless) => 1100,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub per_burner: u32,
    pub burner_count: u32,
    pub burner_subtotal: u32,
    /// Only charged on single-burner units.
    pub surcharge: u32,
    pub total: u32,
}

pub fn quote_breakdown(style: ConstructionStyle, top: TopMaterial, burner_count: u32) -> Quote {
    let per_burner = per_burner_rate(style, top);
    let burner_subtotal = per_burner.saturating_mul(burner_count);
    let surcharge = if burner_count == 1 {
        SINGLE_UNIT_SURCHARGE_USD
    } else {
        0
    };
    Quote {
        per_burner,
        burner_count,
        burner_subtotal,
        surcharge,
        total: burner_subtotal.saturating_add(surcharge),
    }
}

pub fn quote(style: ConstructionStyle, top: TopMaterial, burner_count: u32) -> u32 {
    quote_breakdown(style, top, burner_count).total
}

/// Quote straight from the form's raw labels. An unknown style or top prices
/// at zero instead of failing.
pub fn quote_labels(style: &str, top: &str, burner_count: u32) -> u32 {
    match (style.parse::<ConstructionStyle>(), top.parse::<TopMaterial>()) {
        (Ok(style), Ok(top)) => quote(style, top, burner_count),
        _ => 0,
    }
}

/// `$1,234` style rendering.
pub fn format_usd(dollars: u32) -> String {
    let digits = dollars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
