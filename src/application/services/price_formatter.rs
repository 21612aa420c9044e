//! Price conversion and currency formatting.

/// Scale from the service's unit (lakhs) to rupees.
const PRICE_SCALE: f64 = 100_000.0;

/// Fixed rupee-to-dollar rate inherited from the original client.
const USD_RATE: f64 = 0.011;

/// Converts a raw estimate and formats it for display.
///
/// Example: a raw estimate of `50` renders as `Estimated Price: $55,000.00`.
#[must_use]
pub fn format_estimate(raw: f64) -> String {
    format!("Estimated Price: {}", format_usd(raw * PRICE_SCALE * USD_RATE))
}

/// Formats an amount as USD with thousands grouping and two fractional
/// digits, e.g. `$1,234.50`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }

    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_conversion() {
        // 50 * 100000 * 0.011 = 55000
        assert_eq!(format_estimate(50.0), "Estimated Price: $55,000.00");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.0), "$999.00");
        assert_eq!(format_usd(1000.0), "$1,000.00");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_fraction_rounds() {
        assert_eq!(format_usd(12.3456), "$12.35");
        assert_eq!(format_usd(12.342), "$12.34");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_usd(-1234.5), "-$1,234.50");
    }
}
