/// Render a nullable charge the way the ContPAQ export prints amounts:
/// two decimals, comma grouping, parentheses for negatives, and an empty
/// cell when no amount was captured.
pub fn charge(val: Option<f64>) -> String {
    let Some(val) = val else {
        return String::new();
    };
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().rev().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if val < 0.0 {
        format!("({grouped}.{dec_part})")
    } else {
        format!("{grouped}.{dec_part}")
    }
}
