//! Phone number display formatting

/// Group the digits of a phone number for display.
///
/// Non-digits are stripped first. Ten digits render as `XXXXX XXXXX`, twelve
/// as `+CC XXX XXX XXXX`; anything else is shown as the bare digit string.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_phone("9876543210"), "98765 43210");
/// assert_eq!(format_phone("+91 98765-43210"), "+91 987 654 3210");
/// ```
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        10 => format!("{} {}", &digits[..5], &digits[5..]),
        12 => format!(
            "+{} {} {} {}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..]
        ),
        _ => digits,
    }
}
