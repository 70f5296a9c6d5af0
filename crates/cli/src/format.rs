//! Locale-style numeric formatting for the terminal dashboard.
//!
//! Formatting is display-only: values are rounded here and nowhere else, so
//! the domain keeps full precision.

use rust_decimal::Decimal;

/// Formats with en-US thousands grouping and a fixed number of fraction
/// digits, e.g. `3026.58` -> `"3,026.58"`.
pub fn format_num(value: Decimal, digits: u32) -> String {
    let rounded = value.round_dp(digits);
    let text = format!("{rounded:.prec$}", prec = digits as usize);

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `$`-prefixed two-digit currency, e.g. `"$1,000.00"`.
pub fn format_currency(value: Decimal) -> String {
    format!("${}", format_num(value, 2))
}

/// Compact dollar figure for large totals, e.g. `"$429.3M"`.
pub fn format_compact_usd(value: Decimal) -> String {
    let billion = Decimal::from(1_000_000_000u64);
    let million = Decimal::from(1_000_000u64);

    if value.abs() >= billion {
        format!("${}B", format_num(value / billion, 1))
    } else if value.abs() >= million {
        format!("${}M", format_num(value / million, 1))
    } else {
        format_currency(value)
    }
}
