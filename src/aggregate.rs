// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read-side dashboard views, computed as pure functions over a
//! snapshot of one user's rows. No hidden state: callers load the
//! snapshot through `store` and every function here is deterministic
//! in its arguments.
//!
//! Sign convention: expenses are stored negative, income positive.
//! "Spend" figures are reported as positive magnitudes. With no
//! matching rows every function returns its identity value (zero or
//! an empty list); missing or foreign-owned entities are rejected by
//! the store before a snapshot ever reaches this module.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Budget, Category, Investment, SavingsGoal, SavingsRule, SavingsRuleType, Transaction};

/// Sum of every transaction dated on or before `as_of`, uncategorized
/// rows included.
pub fn balance(txns: &[Transaction], as_of: NaiveDate) -> Decimal {
    txns.iter()
        .filter(|t| t.date <= as_of)
        .map(|t| t.amount)
        .sum()
}

/// Positive total of expense magnitudes falling in the given month.
pub fn monthly_spend(txns: &[Transaction], month: u32, year: i32) -> Decimal {
    txns.iter()
        .filter(|t| in_month(t.date, month, year) && t.amount < Decimal::ZERO)
        .map(|t| -t.amount)
        .sum()
}

fn in_month(date: NaiveDate, month: u32, year: i32) -> bool {
    use chrono::Datelike;
    date.month() == month && date.year() == year
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetLine {
    pub category_id: i64,
    pub category: String,
    pub budgeted: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
}

/// Budget-vs-actual for one month. One line per budget row; categories
/// without a budget row for (month, year) are omitted, never
/// zero-filled. Spending outside any budgeted category does not appear.
pub fn budget_status(
    budgets: &[Budget],
    categories: &[Category],
    txns: &[Transaction],
    month: u32,
    year: i32,
) -> Vec<BudgetLine> {
    let names: HashMap<i64, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut spent_by_category: HashMap<i64, Decimal> = HashMap::new();
    for t in txns {
        if t.amount >= Decimal::ZERO || !in_month(t.date, month, year) {
            continue;
        }
        let Some(cid) = t.category_id else { continue };
        *spent_by_category.entry(cid).or_insert(Decimal::ZERO) += -t.amount;
    }

    let mut lines: Vec<BudgetLine> = budgets
        .iter()
        .filter(|b| b.month == month && b.year == year)
        .map(|b| {
            let spent = spent_by_category
                .get(&b.category_id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            BudgetLine {
                category_id: b.category_id,
                category: names.get(&b.category_id).unwrap_or(&"(deleted)").to_string(),
                budgeted: b.amount,
                spent,
                remaining: b.amount - spent,
            }
        })
        .collect();
    lines.sort_by(|a, b| a.category.cmp(&b.category));
    lines
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    /// In [0, 1] regardless of overshoot.
    pub percent_complete: Decimal,
    /// Floored at zero.
    pub remaining: Decimal,
    pub is_overdue: bool,
}

pub fn goal_progress(goal: &SavingsGoal, today: NaiveDate) -> GoalProgress {
    let ratio = if goal.target_amount <= Decimal::ZERO {
        Decimal::ONE
    } else {
        (goal.current_amount / goal.target_amount).round_dp(4)
    };
    let percent_complete = ratio.clamp(Decimal::ZERO, Decimal::ONE);
    let remaining = (goal.target_amount - goal.current_amount).max(Decimal::ZERO);
    let is_overdue = match goal.target_date {
        Some(d) => d < today && !goal.is_completed,
        None => false,
    };
    GoalProgress {
        percent_complete,
        remaining,
        is_overdue,
    }
}

pub fn portfolio_value(investments: &[Investment]) -> Decimal {
    investments.iter().map(|i| i.current_value).sum()
}

pub fn portfolio_return(investments: &[Investment]) -> Decimal {
    investments.iter().map(|i| i.total_return).sum()
}

/// Contribution one savings rule derives from a single expense, given
/// as a positive magnitude. Inactive rules contribute nothing.
pub fn savings_contribution(rule: &SavingsRule, expense: Decimal) -> Decimal {
    if !rule.is_active || expense <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match rule.r#type {
        SavingsRuleType::Percentage => (expense * rule.value / Decimal::ONE_HUNDRED).round_dp(2),
        SavingsRuleType::Fixed => rule.value,
        SavingsRuleType::RoundUp => {
            let rem = expense % rule.value;
            if rem.is_zero() {
                Decimal::ZERO
            } else {
                (rule.value - rem).round_dp(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn txn(id: i64, amount: &str, d: &str, category_id: Option<i64>) -> Transaction {
        Transaction {
            id,
            user_id: 1,
            category_id,
            amount: dec(amount),
            description: format!("txn {id}"),
            date: date(d),
            is_recurring: false,
            ai_categorized: false,
            external_id: None,
        }
    }

    #[test]
    fn balance_includes_uncategorized_and_respects_as_of() {
        let txns = vec![
            txn(1, "-50.00", "2025-01-05", Some(1)),
            txn(2, "-25.50", "2025-01-12", None),
            txn(3, "2000.00", "2025-01-31", None),
            txn(4, "-10.00", "2025-02-01", Some(1)),
        ];
        assert_eq!(balance(&txns, date("2025-01-31")), dec("1924.50"));
        assert_eq!(balance(&txns, date("2025-01-12")), dec("-75.50"));
        assert_eq!(balance(&[], date("2025-01-01")), Decimal::ZERO);
    }

    #[test]
    fn monthly_spend_sums_expense_magnitudes_only() {
        let txns = vec![
            txn(1, "-50.00", "2025-01-05", Some(1)),
            txn(2, "-25.50", "2025-01-12", None),
            txn(3, "2000.00", "2025-01-31", None),
        ];
        assert_eq!(monthly_spend(&txns, 1, 2025), dec("75.50"));
        assert_eq!(monthly_spend(&txns, 2, 2025), Decimal::ZERO);
    }

    #[test]
    fn budget_status_omits_unbudgeted_categories() {
        let categories = vec![
            Category {
                id: 1,
                user_id: 1,
                name: "Dining".into(),
                emoji: "🍜".into(),
                budget_amount: dec("0"),
            },
            Category {
                id: 2,
                user_id: 1,
                name: "Travel".into(),
                emoji: "✈️".into(),
                budget_amount: dec("0"),
            },
        ];
        let budgets = vec![Budget {
            id: 1,
            user_id: 1,
            category_id: 1,
            amount: dec("100.00"),
            month: 1,
            year: 2025,
        }];
        let txns = vec![
            txn(1, "-30.00", "2025-01-10", Some(1)),
            txn(2, "-999.00", "2025-01-11", Some(2)), // no budget row
            txn(3, "-5.00", "2024-12-31", Some(1)),   // wrong month
        ];
        let lines = budget_status(&budgets, &categories, &txns, 1, 2025);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].category, "Dining");
        assert_eq!(lines[0].spent, dec("30.00"));
        assert_eq!(lines[0].remaining, dec("70.00"));
    }

    #[test]
    fn goal_progress_clamps_overshoot() {
        let goal = SavingsGoal {
            id: 1,
            user_id: 1,
            name: "Emergency".into(),
            target_amount: dec("1000.00"),
            current_amount: dec("1500.00"),
            target_date: None,
            is_completed: true,
        };
        let p = goal_progress(&goal, date("2025-06-01"));
        assert_eq!(p.percent_complete, Decimal::ONE);
        assert_eq!(p.remaining, Decimal::ZERO);
        assert!(!p.is_overdue);
    }

    #[test]
    fn goal_progress_flags_overdue_incomplete_goals() {
        let goal = SavingsGoal {
            id: 1,
            user_id: 1,
            name: "Trip".into(),
            target_amount: dec("800.00"),
            current_amount: dec("200.00"),
            target_date: Some(date("2025-01-01")),
            is_completed: false,
        };
        let p = goal_progress(&goal, date("2025-06-01"));
        assert_eq!(p.percent_complete, dec("0.25"));
        assert_eq!(p.remaining, dec("600.00"));
        assert!(p.is_overdue);
    }

    #[test]
    fn portfolio_totals_are_plain_sums() {
        let investments = vec![
            Investment {
                id: 1,
                user_id: 1,
                symbol: "VTI".into(),
                name: "Total Market".into(),
                shares: dec("10"),
                avg_cost_per_share: dec("100.00"),
                current_value: dec("1200.00"),
                total_return: dec("200.00"),
            },
            Investment {
                id: 2,
                user_id: 1,
                symbol: "BND".into(),
                name: "Bonds".into(),
                shares: dec("5"),
                avg_cost_per_share: dec("80.00"),
                current_value: dec("390.00"),
                total_return: dec("-10.00"),
            },
        ];
        assert_eq!(portfolio_value(&investments), dec("1590.00"));
        assert_eq!(portfolio_return(&investments), dec("190.00"));
        assert_eq!(portfolio_value(&[]), Decimal::ZERO);
    }

    #[test]
    fn savings_contribution_per_rule_type() {
        let rule = |t, v: &str| SavingsRule {
            id: 1,
            user_id: 1,
            name: "r".into(),
            r#type: t,
            value: dec(v),
            is_active: true,
        };
        assert_eq!(
            savings_contribution(&rule(SavingsRuleType::Percentage, "10"), dec("45.00")),
            dec("4.50")
        );
        assert_eq!(
            savings_contribution(&rule(SavingsRuleType::Fixed, "5.00"), dec("45.00")),
            dec("5.00")
        );
        assert_eq!(
            savings_contribution(&rule(SavingsRuleType::RoundUp, "1.00"), dec("4.35")),
            dec("0.65")
        );
        assert_eq!(
            savings_contribution(&rule(SavingsRuleType::RoundUp, "1.00"), dec("4.00")),
            Decimal::ZERO
        );
        let mut inactive = rule(SavingsRuleType::Fixed, "5.00");
        inactive.is_active = false;
        assert_eq!(savings_contribution(&inactive, dec("45.00")), Decimal::ZERO);
    }
}
