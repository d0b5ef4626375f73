//! Rendering of float tables as `<value>f` literal lists that can be pasted
//! straight into a C float array.

/// Magnitudes below this are written in exponent form.
const EXPONENT_BELOW: f64 = 1e-4;

/// Magnitudes from this up are written in exponent form.
const EXPONENT_FROM: f64 = 1e16;

/// Round `value` to `places` decimal digits.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10_f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Write `value` as `<mantissa>e<sign><exponent>`, with at least 2 exponent
/// digits, e.g. `9e-05` or `1.5e+16`.
fn exponent_form(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Format a single value as the shortest decimal that reads back to the same
/// float, followed by the `f` suffix. Plain decimals always keep a fractional
/// part, very small and very large magnitudes use exponent form instead.
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    let mut token = if value.is_finite()
        && magnitude != 0.0
        && (magnitude < EXPONENT_BELOW || magnitude >= EXPONENT_FROM)
    {
        exponent_form(value)
    } else {
        let mut token = value.to_string();
        if value.is_finite() && !token.contains('.') {
            token.push_str(".0");
        }
        token
    };
    token.push('f');
    token
}

/// Join the values of a table into a single `", "` separated literal list.
pub fn join_literals<I>(values: I) -> String
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(", ")
}
