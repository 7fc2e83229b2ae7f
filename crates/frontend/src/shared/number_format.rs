//! Amount formatting for order cards and bills

use super::config::CURRENCY_SYMBOL;

/// Group the integer part by thousands with `,`, keeping `decimals` digits.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money amount with currency prefix. Whole amounts drop the decimals.
pub fn format_amount(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    format!(
        "{}{}",
        CURRENCY_SYMBOL,
        format_number_with_decimals(value, decimals)
    )
}
