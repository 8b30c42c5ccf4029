/// Groups digits in thousands with commas: 1234567 -> "1,234,567"
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Brazilian real amount with two decimals, e.g. "R$1,234.50"
pub fn format_money(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{}R${}.{:02}", sign, format_number(cents / 100), cents % 100)
}

/// One decimal place, e.g. "42.5%"
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
