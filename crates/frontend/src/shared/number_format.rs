//! Number formatting for the price list (es-MX, MXN, no fraction digits)

/// Groups the integer part with `,` every 3 digits.
///
/// # Examples
///
/// ```
/// # use rental_frontend::shared::number_format::format_number_int;
/// assert_eq!(format_number_int(1234567.0), "1,234,567");
/// ```
pub fn format_number_int(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());

    let mut result = String::new();
    for (i, c) in rounded.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();

    if value < 0.0 && grouped != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats a money value the way `Intl.NumberFormat('es-MX', { currency: 'MXN' })`
/// does with zero fraction digits.
///
/// ```
/// # use rental_frontend::shared::number_format::format_currency;
/// assert_eq!(format_currency(1500.0), "$1,500");
/// ```
pub fn format_currency(value: f64) -> String {
    let digits = format_number_int(value);
    match digits.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", digits),
    }
}

pub fn format_currency_int(value: i64) -> String {
    format_currency(value as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(1000.0), "1,000");
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(-1234.0), "-1,234");
        assert_eq!(format_number_int(-0.2), "0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(100.0), "$100");
        assert_eq!(format_currency(99.6), "$100");
        assert_eq!(format_currency(12500.0), "$12,500");
        assert_eq!(format_currency(-70.0), "-$70");
        assert_eq!(format_currency_int(630), "$630");
    }
}
