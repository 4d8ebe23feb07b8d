//! Storage unit conversion and number formatting helpers.

/// Bytes in one mebibyte. All `*_mb` values in this crate are in these units.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Megabytes in one gigabyte.
pub const MB_PER_GB: f64 = 1024.0;

/// Convert megabytes to gigabytes.
pub fn mb_to_gb(megabytes: f64) -> f64 {
    megabytes / MB_PER_GB
}

/// Percentage of `baseline` saved by `candidate`.
///
/// Positive when `candidate` is smaller. Returns `0.0` for a zero baseline so
/// that reports never print `NaN`.
pub fn savings_percent(baseline: f64, candidate: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    (baseline - candidate) / baseline * 100.0
}

/// Format an integer with `,` thousands separators (`18000` → `"18,000"`).
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format a float with a fixed number of decimals and `,` thousands
/// separators (`384857.4, 1` → `"384,857.4"`).
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::with_capacity(formatted.len() + formatted.len() / 3 + 1);
    if value.is_sign_negative() && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.push('-');
    }
    result.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
