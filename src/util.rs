// Shared display helpers for the panels.

use wasm_bindgen::JsValue;

/// Decimal string with a comma every three digits, e.g. `1234567` -> `"1,234,567"`.
///
/// The sign is a grouping boundary: `-1234` -> `"-1,234"`.
pub fn format_number(num: i64) -> String {
    let raw = num.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let mut out = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    out.push_str(sign);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Coarse human-readable difference between two millisecond timestamps.
///
/// Floors to whole seconds, then picks a tier: seconds only, minutes and
/// seconds, or hours and minutes (seconds dropped past the hour).
/// A negative difference is not clamped and formats as negative seconds.
pub fn format_time_diff(start_ms: f64, end_ms: f64) -> String {
    let diff = ((end_ms - start_ms) / 1000.0).floor() as i64;

    if diff < 60 {
        format!("{} seconds", diff)
    } else if diff < 3600 {
        let minutes = diff / 60;
        let seconds = diff % 60;
        format!("{} min {} sec", minutes, seconds)
    } else {
        let hours = diff / 3600;
        let minutes = (diff % 3600) / 60;
        format!("{} hr {} min", hours, minutes)
    }
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
