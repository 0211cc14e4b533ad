//! Shared formatting helpers for terminal output

/// Format an amount with a leading currency symbol and two decimals
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Horizontal bar for a value in [0, 1]
pub fn format_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Pad or cut `s` to exactly `width` characters
pub fn truncate(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count <= width {
        format!("{:width$}", s, width = width)
    } else if width <= 3 {
        s.chars().take(width).collect()
    } else {
        let cut: String = s.chars().take(width - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(45.0), "$45.00");
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(-12.5), "-$12.50");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0.5, 4), "██░░");
        assert_eq!(format_bar(1.7, 3), "███");
        assert_eq!(format_bar(f64::NAN, 2), "░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc  ");
        assert_eq!(truncate("Chain & Sprockets", 10), "Chain &...");
        assert_eq!(truncate("Öl und Filter", 4), "Ö...");
    }
}
