//! en-US display formatting. Stateless helpers injected at each call site;
//! there is no process-wide formatting configuration.

use chrono::NaiveDate;

/// Groups the integer digits of an already-formatted decimal with commas.
fn group_thousands(formatted: &str) -> String {
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted, None),
    };

    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    let mut digits = 0;
    for c in chars {
        if digits > 0 && digits % 3 == 0 && c.is_ascii_digit() {
            grouped.push(',');
        }
        if c.is_ascii_digit() {
            digits += 1;
        }
        grouped.push(c);
    }
    let integer: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", integer, d),
        None => integer,
    }
}

/// USD currency with cents and thousands grouping: `$1,234.56`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&format!("{:.2}", value.abs())))
}

/// Strips a trailing ".0" left by one-decimal formatting.
fn trim_decimal(formatted: String) -> String {
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

/// Compact USD for chart axes: `$999`, `$1.5K`, `$140K`, `$1.2M`.
pub fn format_currency_compact(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let body = if abs >= 1_000_000.0 {
        format!("{}M", trim_decimal(format!("{:.1}", abs / 1_000_000.0)))
    } else if abs >= 1_000.0 {
        format!("{}K", trim_decimal(format!("{:.1}", abs / 1_000.0)))
    } else {
        format!("{:.0}", abs)
    };
    format!("{}${}", sign, body)
}

/// en-US short date: `1/15/2023`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.9), "$999.90");
        assert_eq!(format_currency(-1234.56), "-$1,234.56");
    }

    #[test]
    fn compact_currency_scales_units() {
        assert_eq!(format_currency_compact(999.0), "$999");
        assert_eq!(format_currency_compact(1500.0), "$1.5K");
        assert_eq!(format_currency_compact(140_000.0), "$140K");
        assert_eq!(format_currency_compact(1_200_000.0), "$1.2M");
        assert_eq!(format_currency_compact(25_000.0), "$25K");
        assert_eq!(format_currency_compact(-4_000.0), "-$4K");
    }

    #[test]
    fn dates_render_without_leading_zeros() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 5).expect("valid date");
        assert_eq!(format_date(date), "1/5/2023");
        let date = NaiveDate::from_ymd_opt(2023, 11, 25).expect("valid date");
        assert_eq!(format_date(date), "11/25/2023");
    }
}
