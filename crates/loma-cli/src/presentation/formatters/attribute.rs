use loma_types::AttributeValue;

use super::date::format_date;

/// Text verbatim, numbers with their decimal text, dates as "Mar 22, 2024"
pub fn format_attribute_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Number(n) => n.to_string(),
        AttributeValue::Date(d) => format_date(*d),
        AttributeValue::Text(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_attribute_value() {
        assert_eq!(format_attribute_value(&AttributeValue::from(12i64)), "12");
        assert_eq!(format_attribute_value(&AttributeValue::from(109.99)), "109.99");
        assert_eq!(format_attribute_value(&AttributeValue::from("Nike")), "Nike");
        assert_eq!(
            format_attribute_value(&AttributeValue::from(
                NaiveDate::from_ymd_opt(2020, 1, 9).unwrap()
            )),
            "Jan 9, 2020"
        );
    }
}
