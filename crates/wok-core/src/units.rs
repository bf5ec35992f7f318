/// Convert a length in inches to scene units.
///
/// Non-positive `scale` yields zero or negative output; rejecting it is the
/// input boundary's job (see [`crate::RangeOptions::sanitized`]).
#[inline]
pub fn to_scene_units(value_inches: f32, scale: f32) -> f32 {
    value_inches * scale
}
