//! User-editable configuration as held by the options form.
//!
//! Raw input is coerced here, at the boundary; everything downstream of
//! [`RangeOptions::sanitized`] can assume in-range values.

use crate::burner::BurnerSpec;
use crate::constants::*;
use crate::error::OptionsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionStyle {
    /// One faucet per burner.
    #[default]
    #[serde(rename = "california")]
    California,
    /// Faucets shared between neighbouring burners.
    #[serde(rename = "newyork", alias = "new", alias = "new-york")]
    NewYork,
}

impl FromStr for ConstructionStyle {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "california" | "ca" => Ok(ConstructionStyle::California),
            "newyork" | "new-york" | "new" | "ny" => Ok(ConstructionStyle::NewYork),
            _ => Err(OptionsError::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for ConstructionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstructionStyle::California => "California",
            ConstructionStyle::NewYork => "New York",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopMaterial {
    Black,
    #[default]
    Stainless,
}

impl FromStr for TopMaterial {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(TopMaterial::Black),
            "stainless" => Ok(TopMaterial::Stainless),
            _ => Err(OptionsError::UnknownTop(s.to_string())),
        }
    }
}

impl fmt::Display for TopMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TopMaterial::Black => "Black",
            TopMaterial::Stainless => "Stainless",
        })
    }
}

/// Everything the customer can choose, in inches where it is a length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeOptions {
    pub burners: Vec<BurnerSpec>,
    pub min_gap_in: f32,
    pub kitchen_width_in: f32,
    pub unit_scale: f32,
    pub style: ConstructionStyle,
    pub top: TopMaterial,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            burners: vec![BurnerSpec::default(); DEFAULT_BURNER_COUNT],
            min_gap_in: DEFAULT_MIN_GAP_IN,
            kitchen_width_in: DEFAULT_KITCHEN_WIDTH_IN,
            unit_scale: DEFAULT_UNIT_SCALE,
            style: ConstructionStyle::default(),
            top: TopMaterial::default(),
        }
    }
}

impl RangeOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    #[inline]
    pub fn burner_count(&self) -> usize {
        self.burners.len()
    }

    /// Resize the burner list. New slots copy the last existing slot; slots
    /// past `count` are dropped.
    pub fn set_burner_count(&mut self, count: usize) {
        let count = count.clamp(MIN_BURNERS, MAX_BURNERS);
        let fill = self.burners.last().copied().unwrap_or_default();
        self.burners.resize(count, fill);
    }

    pub fn set_burner(&mut self, index: usize, spec: BurnerSpec) -> Result<(), OptionsError> {
        let count = self.burners.len();
        let slot = self
            .burners
            .get_mut(index)
            .ok_or(OptionsError::SlotOutOfRange { index, count })?;
        *slot = spec;
        Ok(())
    }

    pub fn replace_burners(&mut self, specs: impl IntoIterator<Item = BurnerSpec>) {
        self.burners = specs.into_iter().collect();
        self.sanitize_burners();
    }

    /// Copy with every field forced into its accepted range.
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        out.sanitize_burners();
        out.min_gap_in =
            positive_or(out.min_gap_in, DEFAULT_MIN_GAP_IN).clamp(MIN_GAP_MIN_IN, MIN_GAP_MAX_IN);
        out.kitchen_width_in = finite_or(out.kitchen_width_in, DEFAULT_KITCHEN_WIDTH_IN)
            .clamp(KITCHEN_WIDTH_MIN_IN, KITCHEN_WIDTH_MAX_IN);
        out.unit_scale =
            finite_or(out.unit_scale, DEFAULT_UNIT_SCALE).clamp(UNIT_SCALE_MIN, UNIT_SCALE_MAX);
        out
    }

    fn sanitize_burners(&mut self) {
        if self.burners.is_empty() {
            self.burners.push(BurnerSpec::default());
        }
        self.burners.truncate(MAX_BURNERS);
    }
}

/// Parse a free-entry numeric field, keeping `fallback` for anything that is
/// not a finite number.
pub fn parse_or_fallback(raw: &str, fallback: f32) -> f32 {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

#[inline]
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[inline]
fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
