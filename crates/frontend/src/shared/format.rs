/// Display formatting for listing numbers.
///
/// Brazilian grouping: a dot every three digits, no decimal part — prices
/// and areas in the catalog are whole numbers ("R$ 1.200.000", "300 m²").

pub fn format_price(value: f64) -> String {
    format!("R$ {}", group_thousands(value.round() as i64))
}

pub fn format_area(value: f64) -> String {
    format!("{} m²", group_thousands(value.round() as i64))
}

fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(750_000.0), "R$ 750.000");
        assert_eq!(format_price(5_500_000.0), "R$ 5.500.000");
        assert_eq!(format_price(980.0), "R$ 980");
        assert_eq!(format_price(0.0), "R$ 0");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(90.0), "90 m²");
        assert_eq!(format_area(1_000_000.0), "1.000.000 m²");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1), "1");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1.000");
        assert_eq!(group_thousands(123_456_789), "123.456.789");
        assert_eq!(group_thousands(-1_234), "-1.234");
    }
}
