//! Pure formatting of simulation outcomes for display.
//!
//! No side effects and no mutation; absent figures render as a sentinel
//! instead of propagating a formatting error.

/// Sentinel shown when a figure is absent.
const MISSING: &str = "—";

/// Formats a ruin probability as a percentage with one decimal place.
///
/// `0.237` renders as `"23.7%"`.
pub fn format_ruin_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Formats a net-worth figure as a comma-grouped whole number.
///
/// An absent or non-finite figure renders as `"—"`.
pub fn format_net_worth(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => group_thousands(value),
        _ => MISSING.to_string(),
    }
}

/// Formats a change in ruin probability as a signed percentage.
pub fn format_ruin_delta(delta: f64) -> String {
    format!("{:+.1}%", delta * 100.0)
}

/// Formats a change in net worth as a signed, comma-grouped whole number.
pub fn format_net_worth_delta(delta: f64) -> String {
    if !delta.is_finite() {
        return MISSING.to_string();
    }
    if delta.round() < 0.0 {
        group_thousands(delta)
    } else {
        format!("+{}", group_thousands(delta))
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
