/// Integer cents to a USD display string.
///
/// Zero is "Free". Everything else is `$` + dollars with thousands
/// separators + exactly two decimals, computed with integer arithmetic only.
pub fn format_price_cents(cents: i64) -> String {
    if cents == 0 {
        return "Free".to_string();
    }

    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let dollars = magnitude / 100;
    let remainder = magnitude % 100;

    format!("{}${}.{:02}", sign, group_thousands(dollars), remainder)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_free() {
        assert_eq!(format_price_cents(0), "Free");
    }

    #[test]
    fn test_two_decimals_without_float_artifacts() {
        assert_eq!(format_price_cents(12999), "$129.99");
        assert_eq!(format_price_cents(15099), "$150.99");
        assert_eq!(format_price_cents(100), "$1.00");
        assert_eq!(format_price_cents(1), "$0.01");
        assert_eq!(format_price_cents(10), "$0.10");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_price_cents(123_456_789), "$1,234,567.89");
        assert_eq!(format_price_cents(100_000), "$1,000.00");
        assert_eq!(format_price_cents(99_999), "$999.99");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_price_cents(-100), "-$1.00");
        assert_eq!(format_price_cents(i64::MIN), "-$92,233,720,368,547,758.08");
    }
}
