//! Progress ring geometry

/// Circumference of the ring path (radius 45 in a 100x100 viewBox).
pub const FULL_DASH_LENGTH: u32 = 283;

/// Fraction of the ring that stays visible for the given remaining time.
///
/// The raw `remaining / total` ratio is pulled down by `(1/total) * (1 - raw)`
/// so the ring runs one tick ahead of the label. It is exactly 1 at
/// `remaining == total` and reaches `-1/total` at zero.
pub fn time_fraction(remaining: i64, total: u64) -> f64 {
    let total = total as f64;
    let raw = remaining as f64 / total;
    raw - (1.0 / total) * (1.0 - raw)
}

/// Build the `stroke-dasharray` value for a fraction of the ring.
pub fn stroke_dash_array(fraction: f64, full_length: u32) -> String {
    let visible = (fraction * f64::from(full_length)).round() as i64;
    format!("{} {}", visible, full_length)
}
