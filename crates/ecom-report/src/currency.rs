use ecom_schemas::{Cents, CENTS_SCALE};

/// Render an amount as dollars with thousands separators and two decimals.
///
/// Negative amounts keep the sign after the symbol: `$-1,234.50`.
pub fn format_currency(amount: Cents) -> String {
    let raw = amount.raw();
    let abs = raw.unsigned_abs();
    let scale = CENTS_SCALE.unsigned_abs();
    let units = (abs / scale).to_string();
    let frac = abs % scale;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if raw < 0 { "-" } else { "" };
    format!("${sign}{grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_currency(Cents::ZERO), "$0.00");
        assert_eq!(format_currency(Cents::new(5)), "$0.05");
        assert_eq!(format_currency(Cents::new(99_999)), "$999.99");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_currency(Cents::new(123_456)), "$1,234.56");
        assert_eq!(format_currency(Cents::new(100_000_000)), "$1,000,000.00");
        assert_eq!(format_currency(Cents::new(123_456_789)), "$1,234,567.89");
    }

    #[test]
    fn negatives_keep_sign_after_symbol() {
        assert_eq!(format_currency(Cents::new(-500)), "$-5.00");
        assert_eq!(format_currency(Cents::new(-123_450)), "$-1,234.50");
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(
            format_currency(Cents::new(i64::MIN)),
            "$-92,233,720,368,547,758.08"
        );
    }
}
