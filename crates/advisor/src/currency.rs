//! Display-side amount formatting.
//!
//! The snapshot carries a free-text currency symbol that never enters the
//! arithmetic; this module is where it is finally used. Formatting is a
//! symbol prefix plus thousands separators, with cents shown only when the
//! amount is not whole.

/// Formats `amount` for display: `format_amount("$", 12000.0)` is
/// `"$12,000"`, `format_amount("€", -1234.5)` is `"-€1,234.50"`.
#[must_use]
pub fn format_amount(symbol: &str, amount: f64) -> String {
    let negative = amount < 0.0;
    // Round to cents once so "x.999..." does not split inconsistently.
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let units = total_cents / 100;
    let cents = total_cents % 100;

    let sign = if negative { "-" } else { "" };
    let grouped = group_thousands(units);
    if cents == 0 {
        format!("{sign}{symbol}{grouped}")
    } else {
        format!("{sign}{symbol}{grouped}.{cents:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
