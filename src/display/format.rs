//! Formatting helpers shared by reports and listings

use crate::models::Money;

/// Money with the configured currency symbol, e.g. `$12.50`
pub fn money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Percentage with two decimals, e.g. `45.00%`
pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Horizontal bar filled in proportion to `percent` of 100
///
/// Values outside 0..=100 are clamped, so an overspent budget shows a full bar.
pub fn format_bar(percent: f64, width: usize) -> String {
    let clamped = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Section title underlined to its own length
pub fn section(title: &str) -> String {
    format!("{}\n{}\n", title, "─".repeat(title.chars().count()))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(Money::from_cents(1250), "$"), "$12.50");
        assert_eq!(money(Money::from_cents(-5), "€"), "-€0.05");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0), "50.00%");
        assert_eq!(format_percentage(80.1), "80.10%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);

        assert_eq!(format_bar(250.0, 4), "████");
        assert_eq!(format_bar(-10.0, 4), "░░░░");
    }

    #[test]
    fn test_section() {
        assert_eq!(section("Top"), "Top\n───\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }
}
