//! Advisory warnings shown as banners next to the quote. None of them stop a
//! configuration from being laid out or priced.

use crate::burner::{BurnerKind, BurnerSize, BurnerSpec};
use crate::fit::overrun_inches;
use crate::layout::Layout;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Warning {
    #[serde(rename_all = "camelCase")]
    KitchenWidthExceeded { required_in: f32, available_in: f32 },
    #[serde(rename_all = "camelCase")]
    BurnerBelowMinimum {
        slot: usize,
        kind: BurnerKind,
        size: BurnerSize,
        minimum: BurnerSize,
    },
    /// The well was drawn smaller than declared to stay inside the chassis.
    #[serde(rename_all = "camelCase")]
    RadiusClamped {
        slot: usize,
        declared_radius: f32,
        radius: f32,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::KitchenWidthExceeded {
                required_in,
                available_in,
            } => write!(
                f,
                "Range needs {required_in:.1}\" but the kitchen has {available_in:.1}\" \
                 available ({:.1}\" over).",
                overrun_inches(*required_in, *available_in)
            ),
            Warning::BurnerBelowMinimum {
                slot,
                kind,
                size,
                minimum,
            } => write!(
                f,
                "Burner {}: {kind} needs at least {minimum}, {size} selected.",
                slot + 1
            ),
            Warning::RadiusClamped {
                slot,
                declared_radius,
                radius,
            } => write!(
                f,
                "Burner {}: well drawn at radius {radius:.2} instead of \
                 {declared_radius:.2} to fit the chassis depth.",
                slot + 1
            ),
        }
    }
}

pub fn kind_warnings(burners: &[BurnerSpec]) -> impl Iterator<Item = Warning> + '_ {
    burners.iter().enumerate().filter_map(|(slot, spec)| {
        let minimum = spec.kind.min_diameter()?;
        (!spec.meets_minimum()).then_some(Warning::BurnerBelowMinimum {
            slot,
            kind: spec.kind,
            size: spec.size,
            minimum,
        })
    })
}

pub fn clamp_warnings(layout: &Layout) -> impl Iterator<Item = Warning> + '_ {
    layout
        .burners
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_clamped())
        .map(|(slot, b)| Warning::RadiusClamped {
            slot,
            declared_radius: b.declared_radius,
            radius: b.radius,
        })
}
