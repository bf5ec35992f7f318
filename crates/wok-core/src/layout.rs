//! Parametric layout: turns burner diameters, gap, scale and chassis
//! parameters into the positions of every physical sub-part.
//!
//! All functions here are pure. Coordinates are scene units with the chassis
//! centered on the origin: `x` runs along the long axis (left to right), `z`
//! along the depth axis (negative toward the rear lip) and `y` up from the
//! floor.

use crate::constants::*;
use crate::options::{ConstructionStyle, RangeOptions};
use crate::units::to_scene_units;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Room for the largest configuration without spilling to the heap.
pub type Slots<T> = SmallVec<[T; MAX_BURNERS]>;

/// Immutable input bundle for one layout pass. Lengths in inches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutParams {
    pub diameters_in: Slots<f32>,
    pub min_gap_in: f32,
    pub scale: f32,
    pub chassis_depth_in: f32,
    pub lip_height_in: f32,
    pub tray_thickness_in: f32,
    pub well_depth_in: f32,
    pub style: ConstructionStyle,
}

impl LayoutParams {
    /// Stock chassis around the given burners.
    pub fn new(
        diameters_in: impl IntoIterator<Item = f32>,
        min_gap_in: f32,
        scale: f32,
        style: ConstructionStyle,
    ) -> Self {
        Self {
            diameters_in: diameters_in.into_iter().collect(),
            min_gap_in,
            scale,
            chassis_depth_in: CHASSIS_DEPTH_IN,
            lip_height_in: LIP_HEIGHT_IN,
            tray_thickness_in: TRAY_THICKNESS_IN,
            well_depth_in: WELL_DEPTH_IN,
            style,
        }
    }

    /// Expects options that already went through [`RangeOptions::sanitized`].
    pub fn from_options(options: &RangeOptions) -> Self {
        Self::new(
            options.burners.iter().map(|b| b.size.inches_f32()),
            options.min_gap_in,
            options.unit_scale,
            options.style,
        )
    }

    #[inline]
    fn scene(&self, inches: f32) -> f32 {
        to_scene_units(inches, self.scale)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnerSlot {
    pub x: f32,
    pub z: f32,
    /// Rendered radius, after clamping to the usable depth.
    pub radius: f32,
    /// Half the declared diameter, before clamping.
    pub declared_radius: f32,
}

impl BurnerSlot {
    #[inline]
    pub fn is_clamped(&self) -> bool {
        self.radius < self.declared_radius
    }
}

/// Faucets sit on a fixed line (see [`ChassisDimensions::faucet_z`]), so only
/// `x` varies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaucetSlot {
    pub x: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegSlot {
    pub x: f32,
    pub z: f32,
}

/// Derived chassis extents and heights, in scene units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChassisDimensions {
    pub width: f32,
    pub depth: f32,
    pub tray_thickness: f32,
    pub tray_center_y: f32,
    pub leg_height: f32,
    /// Top of the rear lip.
    pub back_height: f32,
    pub lip_height: f32,
    pub well_depth: f32,
    pub faucet_y: f32,
    pub faucet_z: f32,
}

/// Result of one layout pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub style: ConstructionStyle,
    pub scale: f32,
    pub chassis: ChassisDimensions,
    pub required_width_in: f32,
    pub usable_half_depth: f32,
    pub burners: Slots<BurnerSlot>,
    pub faucets: Slots<FaucetSlot>,
    pub legs: Vec<LegSlot>,
}

/// Sum of diameters, the gaps between them and padding at both ends.
///
/// Unit-agnostic: pass everything in inches or everything in scene units.
fn span_width(diameters: impl Iterator<Item = f32>, gap: f32, side_padding: f32) -> f32 {
    let (count, sum) = diameters.fold((0usize, 0.0f32), |(n, s), d| (n + 1, s + d));
    sum + count.saturating_sub(1) as f32 * gap + 2.0 * side_padding
}

/// Minimum chassis width in inches for the given burners.
pub fn required_width_inches(diameters_in: &[f32], min_gap_in: f32) -> f32 {
    span_width(diameters_in.iter().copied(), min_gap_in, SIDE_PADDING_IN)
}

/// Overall chassis width in scene units.
pub fn chassis_width(params: &LayoutParams) -> f32 {
    span_width(
        params.diameters_in.iter().map(|&d| params.scene(d)),
        params.scene(params.min_gap_in),
        params.scene(SIDE_PADDING_IN),
    )
}

/// Largest well radius (scene units) that keeps a well inside the chassis
/// depth, behind the rear lip and clear of the safety margin.
pub fn usable_half_depth_clamp(chassis_depth_in: f32, lip_height_in: f32, scale: f32) -> f32 {
    let usable = chassis_depth_in * 0.5 - lip_height_in - DEPTH_SAFETY_MARGIN_IN;
    to_scene_units(usable.max(0.0), scale)
}

pub fn chassis_dimensions(params: &LayoutParams) -> ChassisDimensions {
    let s = |inches: f32| params.scene(inches);
    ChassisDimensions {
        width: chassis_width(params),
        depth: s(params.chassis_depth_in),
        tray_thickness: s(params.tray_thickness_in),
        tray_center_y: s(COUNTER_HEIGHT_IN - params.tray_thickness_in * 0.5),
        leg_height: s(COUNTER_HEIGHT_IN - params.tray_thickness_in),
        back_height: s(COUNTER_HEIGHT_IN + params.lip_height_in),
        lip_height: s(params.lip_height_in),
        well_depth: s(params.well_depth_in),
        faucet_y: s(COUNTER_HEIGHT_IN + FAUCET_HEIGHT_IN),
        faucet_z: s(params.chassis_depth_in * 0.5 - DEPTH_SAFETY_MARGIN_IN),
    }
}

/// Burner centers and radii, strictly left to right in input order.
///
/// Nothing is reordered or shrunk to fit; an oversize configuration still
/// gets laid out and the fit check reports it.
pub fn place_burners(params: &LayoutParams) -> Slots<BurnerSlot> {
    let clamp =
        usable_half_depth_clamp(params.chassis_depth_in, params.lip_height_in, params.scale);
    let slot = |x: f32, z: f32, diameter: f32| {
        let declared_radius = diameter * 0.5;
        BurnerSlot {
            x,
            z,
            radius: declared_radius.min(clamp),
            declared_radius,
        }
    };

    let diameters: Slots<f32> = params.diameters_in.iter().map(|&d| params.scene(d)).collect();
    match diameters.as_slice() {
        [] => Slots::new(),
        [only] => std::iter::once(slot(0.0, 0.0, *only)).collect(),
        [first, ..] => {
            let gap = params.scene(params.min_gap_in);
            let padding = params.scene(SIDE_PADDING_IN);
            let total_width = span_width(diameters.iter().copied(), gap, padding);
            let z = -params.scene(params.lip_height_in) * 0.5;

            let mut cursor = -total_width * 0.5 + padding + first * 0.5;
            let mut slots = Slots::with_capacity(diameters.len());
            for (i, &d) in diameters.iter().enumerate() {
                slots.push(slot(cursor, z, d));
                if let Some(next) = diameters.get(i + 1) {
                    cursor += d * 0.5 + gap + next * 0.5;
                }
            }
            slots
        }
    }
}

/// Faucet positions for the construction style.
///
/// California gets one faucet per burner. New York shares one faucet
/// between each adjacent pair, at the midpoint of their centers, which gives
/// `n - 1` faucets; a lone burner still gets its own.
pub fn place_faucets(style: ConstructionStyle, burners: &[BurnerSlot]) -> Slots<FaucetSlot> {
    match (style, burners) {
        (ConstructionStyle::California, _) | (ConstructionStyle::NewYork, [_]) => {
            burners.iter().map(|b| FaucetSlot { x: b.x }).collect()
        }
        (ConstructionStyle::NewYork, _) => burners
            .windows(2)
            .map(|pair| FaucetSlot {
                x: (pair[0].x + pair[1].x) * 0.5,
            })
            .collect(),
    }
}

/// Legs in a front and a back row, inset from the chassis edges, with no
/// more than [`MAX_LEG_SPAN_IN`] between neighbours in a row.
///
/// A row never holds more than [`MAX_LEGS_PER_ROW`] legs; past that the
/// spacing grows instead.
pub fn place_legs(params: &LayoutParams, chassis: &ChassisDimensions) -> Vec<LegSlot> {
    let inset = params.scene(LEG_INSET_IN);
    let half_span = (chassis.width * 0.5 - inset).max(0.0);
    let row_z = (chassis.depth * 0.5 - inset).max(0.0);

    let max_span = params.scene(MAX_LEG_SPAN_IN);
    let per_row = legs_per_row(2.0 * half_span, max_span);
    let step = 2.0 * half_span / (per_row - 1) as f32;

    [row_z, -row_z]
        .into_iter()
        .flat_map(|z| (0..per_row).map(move |i| LegSlot {
            x: -half_span + step * i as f32,
            z,
        }))
        .collect()
}

/// Legs needed so no gap in a row exceeds `max_span`, within
/// `2..=MAX_LEGS_PER_ROW`. Bounded in `f32` before the cast so huge or
/// non-finite spans cannot overflow.
fn legs_per_row(span: f32, max_span: f32) -> usize {
    let max_gaps = (MAX_LEGS_PER_ROW - 1) as f32;
    let gaps = if max_span > 0.0 { (span / max_span).ceil() } else { 1.0 };
    if gaps.is_nan() {
        return MAX_LEGS_PER_ROW;
    }
    gaps.clamp(1.0, max_gaps) as usize + 1
}

/// Run a full layout pass.
pub fn compute_layout(params: &LayoutParams) -> Layout {
    let chassis = chassis_dimensions(params);
    let burners = place_burners(params);
    let faucets = place_faucets(params.style, &burners);
    let legs = place_legs(params, &chassis);
    log::debug!(
        "[layout] burners={} width={:.3} faucets={} legs={}",
        burners.len(),
        chassis.width,
        faucets.len(),
        legs.len()
    );
    for (i, b) in burners.iter().enumerate() {
        log::trace!(
            "[layout] slot {} x={:.3} z={:.3} r={:.3}{}",
            i,
            b.x,
            b.z,
            b.radius,
            if b.is_clamped() { " (clamped)" } else { "" }
        );
    }
    Layout {
        style: params.style,
        scale: params.scale,
        chassis,
        required_width_in: required_width_inches(&params.diameters_in, params.min_gap_in),
        usable_half_depth: usable_half_depth_clamp(
            params.chassis_depth_in,
            params.lip_height_in,
            params.scale,
        ),
        burners,
        faucets,
        legs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_width_guards_empty_gap_term() {
        assert_eq!(span_width(std::iter::empty(), 4.0, 1.0), 2.0);
        assert_eq!(span_width([13.0].into_iter(), 4.0, 1.0), 15.0);
    }

    #[test]
    fn legs_per_row_is_bounded() {
        assert_eq!(legs_per_row(0.0, 4.8), 2);
        assert_eq!(legs_per_row(4.8, 4.8), 2);
        assert_eq!(legs_per_row(5.0, 4.8), 3);
        assert_eq!(legs_per_row(1e30, 4.8), MAX_LEGS_PER_ROW);
        assert_eq!(legs_per_row(f32::INFINITY, 4.8), MAX_LEGS_PER_ROW);
        assert_eq!(legs_per_row(f32::NAN, 4.8), MAX_LEGS_PER_ROW);
        assert_eq!(legs_per_row(10.0, 0.0), 2);
    }
}
