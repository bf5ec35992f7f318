/// True when the required chassis width fits the space available.
#[inline]
pub fn fits(required_width_in: f32, available_width_in: f32) -> bool {
    required_width_in <= available_width_in
}

/// How much wider than the available space the chassis is; zero when it fits.
#[inline]
pub fn overrun_inches(required_width_in: f32, available_width_in: f32) -> f32 {
    (required_width_in - available_width_in).max(0.0)
}
