//! Cell formatting for the money and EPS columns.

/// Formats a whole-unit amount as dollars with thousands separators, e.g.
/// `365817000000` becomes `$365,817,000,000`. Negative amounts render with a
/// leading minus: `-$1,234`.
pub fn currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}${}", thousands(amount.unsigned_abs()))
}

/// EPS renders as the plain numeric value, not as a currency amount.
pub fn eps(value: f64) -> String {
    value.to_string()
}

fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
