//! Number formatting matching the webview's en-US `toLocaleString`.

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole dollars, no cents: `"$500,000"`.
pub fn format_currency(amount: u64) -> String {
    format!("${}", format_thousands(amount))
}

pub fn format_area(sqft: u32) -> String {
    format!("{} sqft", format_thousands(u64::from(sqft)))
}

/// Rounds to the nearest whole percent: `"17%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(25_000), "25,000");
        assert_eq!(format_thousands(500_000), "500,000");
        assert_eq!(format_thousands(2_000_000), "2,000,000");
    }

    #[test]
    fn currency_area_and_percent() {
        assert_eq!(format_currency(85_000), "$85,000");
        assert_eq!(format_area(2_000), "2,000 sqft");
        assert_eq!(format_percentage(17.0), "17%");
        assert_eq!(format_percentage(12.6), "13%");
    }
}
