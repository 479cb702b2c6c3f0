//! Financial health score
//!
//! Four capped sub-scores summed to a 0-100 total. Every threshold is compared
//! on integer minor units so boundary cases land exactly.

use std::fmt;

use super::aggregator::PeriodAggregator;
use crate::models::{Budgets, Money, Month, Transaction};

pub const SAVINGS_RATE_MAX: u32 = 30;
pub const BUDGET_ADHERENCE_MAX: u32 = 25;
pub const INCOME_VS_EXPENSES_MAX: u32 = 25;
pub const DEBT_MANAGEMENT_MAX: u32 = 20;

/// Savings rate below this many percent earns the "increase savings" tip
pub const LOW_SAVINGS_TIP_PERCENT: i128 = 10;

/// Sub-scores for one month
#[derive(Debug, Clone, PartialEq)]
pub struct HealthScore {
    pub month: Month,
    pub income: Money,
    pub expenses: Money,
    /// `savings / income * 100`, 0 without income
    pub savings_rate: f64,
    pub savings_rate_score: u32,
    pub budget_adherence_score: u32,
    pub income_vs_expenses_score: u32,
    /// No debt is tracked; always the full 20
    pub debt_management_score: u32,
}

/// Improvement hint attached to a score below its cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTip {
    IncreaseSavingsRate,
    ReviewBudgetAdherence,
    BalanceIncomeAndExpenses,
}

impl fmt::Display for ScoreTip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncreaseSavingsRate => write!(f, "Try to increase your savings rate."),
            Self::ReviewBudgetAdherence => write!(f, "Review your budget adherence."),
            Self::BalanceIncomeAndExpenses => {
                write!(f, "Try to increase your income or reduce expenses.")
            }
        }
    }
}

/// Display band for a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthGrade {
    pub fn from_total(total: u32) -> Self {
        match total {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

impl fmt::Display for HealthGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::Poor => write!(f, "Needs work"),
        }
    }
}

impl HealthScore {
    pub fn savings(&self) -> Money {
        self.income - self.expenses
    }

    /// Sum of the four sub-scores, always within 0..=100
    pub fn total(&self) -> u32 {
        self.savings_rate_score
            + self.budget_adherence_score
            + self.income_vs_expenses_score
            + self.debt_management_score
    }

    pub fn grade(&self) -> HealthGrade {
        HealthGrade::from_total(self.total())
    }

    pub fn tips(&self) -> Vec<ScoreTip> {
        let mut tips = Vec::new();
        if !rate_at_least(self.savings(), self.income, LOW_SAVINGS_TIP_PERCENT) {
            tips.push(ScoreTip::IncreaseSavingsRate);
        }
        if self.budget_adherence_score < BUDGET_ADHERENCE_MAX {
            tips.push(ScoreTip::ReviewBudgetAdherence);
        }
        if self.income_vs_expenses_score < INCOME_VS_EXPENSES_MAX {
            tips.push(ScoreTip::BalanceIncomeAndExpenses);
        }
        tips
    }
}

/// `savings / income * 100 >= percent`, false when there is no income
pub(crate) fn rate_at_least(savings: Money, income: Money, percent: i128) -> bool {
    income.is_positive() && savings.cents() as i128 * 100 >= percent * income.cents() as i128
}

fn savings_rate_score(savings: Money, income: Money) -> u32 {
    if rate_at_least(savings, income, 20) {
        SAVINGS_RATE_MAX
    } else if rate_at_least(savings, income, 10) {
        20
    } else if income.is_positive() && savings.is_positive() {
        10
    } else {
        0
    }
}

fn budget_adherence_score(expenses: Money, budgets: &Budgets) -> u32 {
    let total_budget: Money = budgets.values().sum();
    if budgets.is_empty() || !total_budget.is_positive() {
        return 0;
    }

    let expenses = expenses.cents() as i128;
    let budget = total_budget.cents() as i128;
    if expenses <= budget {
        BUDGET_ADHERENCE_MAX
    } else if expenses * 10 <= budget * 11 {
        15
    } else {
        0
    }
}

fn income_vs_expenses_score(income: Money, expenses: Money) -> u32 {
    if income > expenses {
        INCOME_VS_EXPENSES_MAX
    } else if income.is_positive() {
        10
    } else {
        0
    }
}

/// Score `month` against the budget map
///
/// Budget adherence compares all of the month's expenses, budgeted or not,
/// with the sum of every budget.
pub fn health_score(transactions: &[Transaction], budgets: &Budgets, month: Month) -> HealthScore {
    let totals = PeriodAggregator::new(transactions, month).totals();
    let savings = totals.savings();

    HealthScore {
        month,
        income: totals.income,
        expenses: totals.expense,
        savings_rate: totals.savings_rate(),
        savings_rate_score: savings_rate_score(savings, totals.income),
        budget_adherence_score: budget_adherence_score(totals.expense, budgets),
        income_vs_expenses_score: income_vs_expenses_score(totals.income, totals.expense),
        debt_management_score: DEBT_MANAGEMENT_MAX,
    }
}
