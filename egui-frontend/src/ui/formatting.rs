//! Text formatting for amounts and percentages.

/// Format an amount as dollars with thousands separators.
///
/// Whole amounts have no decimals (`$4,000`), others show cents (`$12.50`).
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    // Amounts that round to zero never get a sign
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = group_thousands(cents / 100);

    if cents % 100 == 0 {
        format!("{}${}", sign, whole)
    } else {
        format!("{}${}.{:02}", sign, whole, cents % 100)
    }
}

/// Dollar amount without separators, as used in compact rows and tooltips
pub fn format_plain_currency(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Format a stored percentage the way it was written (30, 12.5)
pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        let text = format!("{:.2}", value);
        format!("{}%", text.trim_end_matches('0').trim_end_matches('.'))
    }
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
