/// Currency unit conversion and display formatting
///
/// Invoice amounts are persisted as integer cents to avoid floating-point
/// rounding error. Conversion to and from decimal dollars happens only at
/// the read/write boundary: `dollars_to_cents` on the way into the
/// database, `cents_to_dollars` or `format_currency` on the way out.
/// The two conversions are a strict inverse pair.

/// Converts a decimal dollar amount to integer cents for storage
///
/// Rounds to the nearest cent so that decimal inputs such as `19.99`
/// (which have no exact binary representation) store the expected value.
pub fn dollars_to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Converts stored integer cents back to decimal dollars
pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Formats integer cents as a display currency string, e.g. `$1,234.56`
pub fn format_currency(cents: i64) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let remainder = abs % 100;

    // Group the dollar part with thousands separators
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{:02}", grouped, remainder)
    } else {
        format!("${}.{:02}", grouped, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollars_to_cents() {
        assert_eq!(dollars_to_cents(50.0), 5000);
        assert_eq!(dollars_to_cents(0.01), 1);
        assert_eq!(dollars_to_cents(19.99), 1999);
        assert_eq!(dollars_to_cents(0.0), 0);
    }

    #[test]
    fn test_cents_to_dollars() {
        assert_eq!(cents_to_dollars(5000), 50.0);
        assert_eq!(cents_to_dollars(1), 0.01);
        assert_eq!(cents_to_dollars(0), 0.0);
    }

    #[test]
    fn test_round_trip_is_strict_inverse() {
        for dollars in [50.0, 0.01, 19.99, 1234.56, 999999.99] {
            let cents = dollars_to_cents(dollars);
            assert_eq!(cents_to_dollars(cents), dollars);
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(5000), "$50.00");
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(1), "$0.01");
        assert_eq!(format_currency(123456), "$1,234.56");
        assert_eq!(format_currency(100000000), "$1,000,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-5000), "-$50.00");
        assert_eq!(format_currency(-1), "-$0.01");
    }
}
