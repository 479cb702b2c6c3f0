//! Rule-based recommendations and savings opportunities

use std::fmt;

use chrono::NaiveDate;

use super::aggregator::PeriodAggregator;
use super::budget::evaluate_budgets;
use super::comparison::income_stability;
use super::health::rate_at_least;
use crate::models::{Budgets, Money, Month, Transaction, TransactionKind};

/// Savings rate at or above this earns praise instead of the 50/30/20 tip
pub const GOOD_SAVINGS_RATE_PERCENT: i128 = 20;

/// How many categories the savings opportunities cover
pub const OPPORTUNITY_CATEGORIES: usize = 3;

/// A single recommendation
///
/// Rules are evaluated in a fixed order and every rule that applies is
/// included. Amounts stay in minor units; `Display` renders plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// A budgeted category spent more than its limit this month
    ReduceCategorySpending { category: String, overage: Money },
    /// Savings rate under 20% of income
    AdoptFiftyThirtyTwenty { savings_rate: f64 },
    /// Savings rate of 20% or more
    KeepSaving { savings_rate: f64 },
    /// Income over the last 90 days looks irregular
    BuildEmergencyFund,
    /// No budgets have been set
    SetBudgets,
    /// Nothing else applied
    KeepItUp,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReduceCategorySpending { category, overage } => write!(
                f,
                "Consider reducing spending in the {} category. You are over budget by {}.",
                category, overage
            ),
            Self::AdoptFiftyThirtyTwenty { .. } => write!(
                f,
                "Your savings rate is below 20%. Try the 50/30/20 rule (50% needs, 30% wants, 20% savings)."
            ),
            Self::KeepSaving { .. } => write!(
                f,
                "Great job on your savings rate! Keep it up or consider increasing your savings goal."
            ),
            Self::BuildEmergencyFund => write!(
                f,
                "Your income seems irregular. Consider building an emergency fund covering 3-6 months of expenses."
            ),
            Self::SetBudgets => write!(
                f,
                "You haven't set any budgets. Setting budgets can help you take control of your spending."
            ),
            Self::KeepItUp => write!(f, "You are doing great! Keep up the good financial habits."),
        }
    }
}

/// Recommendations for the month containing `today`
///
/// Order: over-budget categories (budget map order), savings rate (only when
/// the month has income), irregular income, missing budgets. When none of
/// these apply the list holds a single [`Recommendation::KeepItUp`].
pub fn recommendations(
    transactions: &[Transaction],
    budgets: &Budgets,
    today: NaiveDate,
) -> Vec<Recommendation> {
    let month = Month::containing(today);
    let mut recs = Vec::new();

    let evaluation = evaluate_budgets(transactions, budgets, month);
    for category in evaluation.categories.iter().filter(|c| c.is_over_budget()) {
        recs.push(Recommendation::ReduceCategorySpending {
            category: category.category.clone(),
            overage: category.overage(),
        });
    }

    let totals = PeriodAggregator::new(transactions, month).totals();
    if totals.income.is_positive() {
        let savings_rate = totals.savings_rate();
        if rate_at_least(totals.savings(), totals.income, GOOD_SAVINGS_RATE_PERCENT) {
            recs.push(Recommendation::KeepSaving { savings_rate });
        } else {
            recs.push(Recommendation::AdoptFiftyThirtyTwenty { savings_rate });
        }
    }

    if income_stability(transactions, today).is_irregular() {
        recs.push(Recommendation::BuildEmergencyFund);
    }

    if budgets.is_empty() {
        recs.push(Recommendation::SetBudgets);
    }

    if recs.is_empty() {
        recs.push(Recommendation::KeepItUp);
    }
    recs
}

/// A category worth trimming by 10%
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsOpportunity {
    pub category: String,
    pub spent: Money,
    /// 10% of `spent`, rounded half up
    pub potential_savings: Money,
}

/// The month's three largest expense categories with a 10% reduction target
///
/// Ties keep the order in which categories first appeared.
pub fn savings_opportunities(transactions: &[Transaction], month: Month) -> Vec<SavingsOpportunity> {
    PeriodAggregator::new(transactions, month)
        .total_by_category(TransactionKind::Expense)
        .top(OPPORTUNITY_CATEGORIES)
        .into_iter()
        .map(|c| SavingsOpportunity {
            category: c.category.clone(),
            spent: c.amount,
            potential_savings: c.amount.fraction(1, 10),
        })
        .collect()
}
