use crate::core::transaction::Amount;

/// ISO 4217 code of the Mongolian tögrög.
pub const CURRENCY_CODE: &str = "MNT";

/// Formats an amount with thousands separators and two decimals,
/// e.g. `399999000.0` becomes `"399,999,000.00"`.
pub fn format_amount(amount: Amount) -> String {
    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = (cents % 100) as u32;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (position, digit) in whole.chars().enumerate() {
        if position > 0 && (whole.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    return format!("{}{}.{:02}", sign, grouped, frac);
}

/// Amount with the currency code attached, e.g. `"1,000.00 MNT"`.
pub fn format_mnt(amount: Amount) -> String {
    return format!("{} {}", format_amount(amount), CURRENCY_CODE);
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, "0.00")]
    #[case(12.5, "12.50")]
    #[case(1000.0, "1,000.00")]
    #[case(1234567.891, "1,234,567.89")]
    #[case(399999000.0, "399,999,000.00")]
    #[case(-50.0, "-50.00")]
    fn groups_thousands_and_keeps_two_decimals(#[case] amount: Amount, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn currency_code_is_appended() {
        assert_eq!(format_mnt(400000000.0), "400,000,000.00 MNT");
    }
}
