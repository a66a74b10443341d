//! Number formatting shared by feed rows

/// `$1.23T`, `$4.56B`, `$7.89M`, or plain dollars below a million.
pub fn usd_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format!("${:.2}", value)
    }
}

/// Price with precision that suits its magnitude.
pub fn usd_price(value: f64) -> String {
    if value >= 1000.0 {
        format!("${:.0}", value)
    } else if value >= 1.0 {
        format!("${:.4}", value)
    } else {
        format!("${:.6}", value)
    }
}

pub fn percent_signed(value: f64) -> String {
    format!("{:+.2}%", value)
}

pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_compact() {
        assert_eq!(usd_compact(180_000_000_000.0), "$180.00B");
        assert_eq!(usd_compact(3_400_000_000_000.0), "$3.40T");
        assert_eq!(usd_compact(8_500_000.0), "$8.50M");
        assert_eq!(usd_compact(950.0), "$950.00");
    }

    #[test]
    fn test_usd_price_precision() {
        assert_eq!(usd_price(97_500.0), "$97500");
        assert_eq!(usd_price(3.15), "$3.1500");
        assert_eq!(usd_price(0.38), "$0.380000");
    }

    #[test]
    fn test_percent_signed() {
        assert_eq!(percent_signed(5.8), "+5.80%");
        assert_eq!(percent_signed(-0.9), "-0.90%");
    }
}
