//! Formatting for the assistant views: daily check, advice, alerts and goals

use super::format::{format_bar, money, section};
use crate::analytics::{Alert, DailyCheck, GoalProgress, Recommendation, SavingsOpportunity};

const GOAL_BAR_WIDTH: usize = 30;

pub fn format_daily_check(check: &DailyCheck, symbol: &str) -> String {
    let mut output = section(&format!(
        "Daily Financial Check ({})",
        check.date.format("%b %d, %Y")
    ));
    output.push_str(&format!(
        "Today's Spending: {}\n",
        money(check.spent_today, symbol)
    ));
    output.push_str(&format!(
        "Daily Budget:     {}\n",
        money(check.daily_budget, symbol)
    ));
    output.push_str(&format!(
        "Remaining:        {}\n",
        money(check.remaining, symbol)
    ));

    if !check.alerts.is_empty() {
        output.push_str("\nAlerts:\n");
        for alert in &check.alerts {
            output.push_str(&format!("• {}\n", format_alert(alert, symbol)));
        }
    }

    output.push_str(&format!("\nQuick Tip: {}\n", check.tip));
    output
}

/// Alert text with amounts shown in the configured currency
pub fn format_alert(alert: &Alert, symbol: &str) -> String {
    match alert {
        Alert::LargeTransaction {
            amount,
            description,
            ..
        } => format!(
            "Large Transaction: A transaction of {} for {} was detected.",
            money(*amount, symbol),
            description
        ),
        other => other.to_string(),
    }
}

pub fn format_alerts(alerts: &[Alert], symbol: &str) -> String {
    let mut output = section("Active Spending Alerts");
    if alerts.is_empty() {
        output.push_str("• No special alerts at the moment. Keep up the good work!\n");
        return output;
    }
    let (warnings, notes): (Vec<&Alert>, Vec<&Alert>) =
        alerts.iter().partition(|alert| alert.is_warning());
    if warnings.is_empty() {
        output.push_str("• No budget or large-transaction warnings.\n");
    }
    for alert in warnings {
        output.push_str(&format!("• {}\n", format_alert(alert, symbol)));
    }
    if !notes.is_empty() {
        output.push_str("\nFor your information:\n");
        for alert in notes {
            output.push_str(&format!("• {}\n", format_alert(alert, symbol)));
        }
    }
    output
}

pub fn format_recommendations(recommendations: &[Recommendation], symbol: &str) -> String {
    let mut output = section("Smart Recommendations");
    for rec in recommendations {
        let text = match rec {
            Recommendation::ReduceCategorySpending { category, overage } => format!(
                "Consider reducing spending in the {} category. You are over budget by {}.",
                category,
                money(*overage, symbol)
            ),
            other => other.to_string(),
        };
        output.push_str(&format!("• {}\n", text));
    }
    output
}

pub fn format_savings_opportunities(opportunities: &[SavingsOpportunity], symbol: &str) -> String {
    if opportunities.is_empty() {
        return "No spending this month to analyze.\n".to_string();
    }

    let mut output = section("Savings Opportunities");
    output.push_str("You could save money in these categories:\n\n");
    for opp in opportunities {
        output.push_str(&format!(
            "• {}: You spent {}. Try reducing it by 10% to save {}.\n",
            opp.category,
            money(opp.spent, symbol),
            money(opp.potential_savings, symbol)
        ));
    }
    output
}

pub fn format_goals_progress(progress: &[GoalProgress], symbol: &str) -> String {
    if progress.is_empty() {
        return "No savings goals set. Set one to get started!\n".to_string();
    }

    let mut output = section("Goals Progress");
    for goal in progress {
        output.push_str(&format!(
            "{} ({} / {}){}\n{} {:.2}%\n\n",
            goal.name,
            money(goal.saved, symbol),
            money(goal.target, symbol),
            if goal.is_reached() { " - reached!" } else { "" },
            format_bar(goal.display_percent(), GOAL_BAR_WIDTH),
            goal.percent
        ));
    }
    output
}
