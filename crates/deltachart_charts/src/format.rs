//! Number formatting for axis labels and selection summaries.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed-point text; non-finite values render as `NaN`, `Inf` or `-Inf`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    match value {
        v if v.is_nan() => "NaN".to_string(),
        v if v == f64::INFINITY => "Inf".to_string(),
        v if v == f64::NEG_INFINITY => "-Inf".to_string(),
        v => format!("{v:.decimals$}"),
    }
}

/// Round to `decimals` places, halves away from zero.
///
/// Ties are decided on the exact stored value of `value`, so `10.344999999999999`
/// rounds to `10.34` even though `1034.4999999999999` would scale to `1034.5`.
pub fn round_half_away(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Out of Decimal range means far beyond 2^53: already integral.
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    let rounded = exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    // Parsing the decimal text yields the nearest f64.
    rounded.to_string().parse().unwrap_or(value)
}

/// `+` for non-negative values, the natural `-` otherwise.
fn sign_prefix(value: f64) -> &'static str {
    if value >= 0.0 {
        "+"
    } else {
        ""
    }
}

pub fn format_signed_fixed(value: f64, decimals: usize) -> String {
    format!("{}{}", sign_prefix(value), format_fixed(value, decimals))
}

/// Signed by the rendered text, so values that round to zero show `+0`.
pub fn format_signed_grouped(value: f64) -> String {
    let grouped = format_grouped(value);
    if value.is_finite() && !grouped.starts_with('-') {
        format!("+{grouped}")
    } else {
        grouped
    }
}

/// Thousands-separated value with at most three decimals, e.g. `1,234.5`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return format_fixed(value, 0);
    }
    let s = trim_trailing_zeroes(format!("{:.3}", value.abs()));
    let (int_part, frac_part) = match s.find('.') {
        Some(dot) => s.split_at(dot),
        None => (s.as_str(), ""),
    };

    let mut grouped = String::with_capacity(s.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(frac_part);

    if value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{grouped}")
    } else {
        grouped
    }
}

const COMPACT_SUFFIXES: [(f64, &str); 3] = [
    (1_000_000_000.0, "B"),
    (1_000_000.0, "M"),
    (1_000.0, "K"),
];

/// Short axis label: `12.4K`, `2M`, or up to three decimals below a thousand.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return format_fixed(value, 0);
    }
    match COMPACT_SUFFIXES
        .iter()
        .find(|(scale, _)| value.abs() >= *scale)
    {
        Some(&(scale, suffix)) => format_with_suffix(value / scale, suffix),
        None => trim_trailing_zeroes(format!("{value:.3}")),
    }
}

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human-readable byte count with 1024-based units, e.g. `1536` -> `2 KB`.
///
/// Zero reports `n/a`.
pub fn bytes_to_size(bytes: u64) -> String {
    if bytes == 0 {
        return "n/a".to_string();
    }
    let b = bytes as f64;
    let i = ((b.ln() / 1024f64.ln()).floor() as usize).min(SIZE_UNITS.len() - 1);
    let scaled = (b / 1024f64.powi(i as i32)).round();
    format!("{} {}", scaled, SIZE_UNITS[i])
}

fn format_with_suffix(value: f64, suffix: &str) -> String {
    format!("{}{}", trim_trailing_zeroes(format!("{value:.2}")), suffix)
}

fn trim_trailing_zeroes(mut s: String) -> String {
    if let Some(dot) = s.find('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.len() == dot + 1 {
            s.pop();
        }
    }
    s
}
