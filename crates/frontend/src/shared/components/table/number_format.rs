//! Number formatting for tables and cards (en-IN grouping: 12,34,567.89)

/// Formats a number with Indian digit grouping.
///
/// The fraction is rounded to `max_decimals`, trailing zeros are dropped, then
/// padded back to `min_decimals`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_number_en_in(1234567.891, 0, 2), "12,34,567.89");
/// assert_eq!(format_number_en_in(1500.0, 2, 2), "1,500.00");
/// ```
pub fn format_number_en_in(value: f64, min_decimals: usize, max_decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let max_decimals = max_decimals.max(min_decimals);
    let formatted = format!("{:.*}", max_decimals, value.abs());
    let (integer_part, fraction_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    let mut fraction = fraction_part.trim_end_matches('0').to_string();
    while fraction.len() < min_decimals {
        fraction.push('0');
    }

    let is_zero = integer_part.chars().all(|c| c == '0') && fraction.chars().all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let grouped = group_indian(integer_part);
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Last three digits, then groups of two: "1234567" -> "12,34,567"
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

/// Amount as shown in the table: grouping, up to two decimals
pub fn format_amount(value: f64) -> String {
    format_number_en_in(value, 0, 2)
}

/// Money with exactly two decimals
pub fn format_money(value: f64) -> String {
    format_number_en_in(value, 2, 2)
}

/// Whole number with grouping
pub fn format_count(value: f64) -> String {
    format_number_en_in(value, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1000.0), "1,000");
        assert_eq!(format_count(12345.0), "12,345");
        assert_eq!(format_count(1234567.0), "12,34,567");
        assert_eq!(format_count(123456789.0), "12,34,56,789");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234567.5), "12,34,567.5");
        assert_eq!(format_amount(2499.999), "2,500");
        assert_eq!(format_amount(87.25), "87.25");
        assert_eq!(format_amount(-1234.5), "-1,234.5");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(1500.0), "1,500.00");
        assert_eq!(format_money(1234.567), "1,234.57");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_amount(-0.001), "0");
    }
}
