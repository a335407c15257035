/// Formats a real number for output.
///
/// Integral finite values keep one fractional digit so that reals stay
/// distinguishable from integers (`2.0`, not `2`). Everything else uses the
/// shortest representation that round-trips.
///
/// ## Example
/// ```
/// use arrowlang::util::num::format_real;
///
/// assert_eq!(format_real(2.0), "2.0");
/// assert_eq!(format_real(2.5), "2.5");
/// assert_eq!(format_real(-0.125), "-0.125");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
