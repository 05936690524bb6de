/// Folds a signed scalar from `[-range, range]` into the unit interval, with
/// 0.5 as the origin. Out-of-range input is clamped at the boundary.
///
/// This is the canonical register representation of a transform component:
/// the sign rides in the upper/lower half of the interval, so the most
/// significant quantized bit of a folded value is the sign bit.
///
/// # Examples
/// ```
/// # use aldis_serde::fold;
/// assert_eq!(fold(0.0, 128.0), 0.5);
/// assert_eq!(fold(128.0, 128.0), 1.0);
/// assert_eq!(fold(-128.0, 128.0), 0.0);
/// assert_eq!(fold(-64.0, 128.0), 0.25);
/// ```
pub fn fold(value: f32, range: f32) -> f32 {
    let clamped = value.clamp(-range, range);
    0.5 + clamped / (2.0 * range)
}

/// Inverse of [`fold`]: maps a folded value from `[0, 1]` back onto
/// `[-range, range]`. Input outside the unit interval is clamped first.
///
/// # Examples
/// ```
/// # use aldis_serde::unfold;
/// assert_eq!(unfold(0.5, 128.0), 0.0);
/// assert_eq!(unfold(1.0, 128.0), 128.0);
/// assert_eq!(unfold(0.25, 128.0), -64.0);
/// ```
pub fn unfold(folded: f32, range: f32) -> f32 {
    let clamped = folded.clamp(0.0, 1.0);
    (clamped - 0.5) * 2.0 * range
}
