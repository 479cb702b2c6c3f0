//! Analytics over a snapshot of transactions, budgets and goals
//!
//! Everything here is a pure function of its arguments: no I/O, no clock
//! reads. Callers pass the month or the day being evaluated.
//!
//! - [`aggregator`] sums transactions per month and per category
//! - [`comparison`] compares months and classifies income stability
//! - [`budget`] evaluates budgets against spending
//! - [`health`], [`advice`], [`alerts`] and [`goals`] build the scored and
//!   rule-based outputs on top of those

pub mod advice;
pub mod aggregator;
pub mod alerts;
pub mod budget;
pub mod comparison;
pub mod goals;
pub mod health;

pub use advice::{recommendations, savings_opportunities, Recommendation, SavingsOpportunity};
pub use aggregator::{
    lifetime_savings, monthly_series, total_by_kind_all_time, total_on_day, CategoryTotal,
    CategoryTotals, MonthTotals, PeriodAggregator,
};
pub use alerts::{
    budget_warnings, daily_check, large_transactions, spending_alerts, Alert, DailyCheck,
    QUICK_TIPS,
};
pub use budget::{evaluate_budgets, BudgetEvaluation, BudgetStatus, CategoryBudget};
pub use comparison::{
    compare_months, income_stability, savings_trend, Delta, Direction, IncomeStability,
    MonthComparison, TrendPoint,
};
pub use goals::{goals_progress, GoalProgress};
pub use health::{health_score, HealthGrade, HealthScore, ScoreTip};
