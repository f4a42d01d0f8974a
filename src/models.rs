// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read model for a user. The password hash stays in the database;
/// only the auth collaborator ever compares against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub emoji: String,
    pub budget_amount: Decimal,
}

/// Sign convention: expenses are negative, income is positive. All
/// aggregation arithmetic depends on this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub category_id: Option<i64>,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub is_recurring: bool,
    pub ai_categorized: bool,
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub amount: Decimal,
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Trend,
    Alert,
    Recommendation,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::Trend => "trend",
            InsightType::Alert => "alert",
            InsightType::Recommendation => "recommendation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trend" => Some(InsightType::Trend),
            "alert" => Some(InsightType::Alert),
            "recommendation" => Some(InsightType::Recommendation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub id: i64,
    pub user_id: i64,
    pub r#type: InsightType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub is_read: bool,
}

/// Read model for a bank connection. The access token is deliberately
/// not a field here: no read path may carry it out of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankConnection {
    pub id: i64,
    pub user_id: i64,
    pub external_item_id: String,
    pub institution_name: String,
    pub account_ids: Vec<String>,
    pub is_active: bool,
    pub last_sync: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsRuleType {
    /// `value` is a percentage of each expense, 0-100.
    Percentage,
    /// `value` is a flat currency amount per expense.
    Fixed,
    /// `value` is the rounding unit; the contribution is the round-up
    /// remainder.
    RoundUp,
}

impl SavingsRuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SavingsRuleType::Percentage => "percentage",
            SavingsRuleType::Fixed => "fixed",
            SavingsRuleType::RoundUp => "round_up",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "percentage" => Some(SavingsRuleType::Percentage),
            "fixed" => Some(SavingsRuleType::Fixed),
            "round_up" => Some(SavingsRuleType::RoundUp),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsRule {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub r#type: SavingsRuleType,
    pub value: Decimal,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub id: i64,
    pub user_id: i64,
    pub symbol: String,
    pub name: String,
    /// Share count, 6 decimal places.
    pub shares: Decimal,
    pub avg_cost_per_share: Decimal,
    pub current_value: Decimal,
    /// Always current_value - shares * avg_cost_per_share.
    pub total_return: Decimal,
}

// Insert drafts. The owning user id is never part of a draft; the
// access layer supplies it separately so a payload cannot re-target
// another tenant.

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub emoji: String,
    pub budget_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    pub category_id: Option<i64>,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub is_recurring: Option<bool>,
    pub ai_categorized: Option<bool>,
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBudget {
    pub category_id: i64,
    pub amount: Decimal,
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewInsight {
    pub r#type: InsightType,
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBankConnection {
    pub external_item_id: String,
    pub access_token: String,
    pub institution_name: String,
    pub account_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSavingsGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSavingsRule {
    pub name: String,
    pub r#type: SavingsRuleType,
    pub value: Decimal,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewInvestment {
    pub symbol: String,
    pub name: String,
    pub shares: Decimal,
    pub avg_cost_per_share: Decimal,
    pub current_value: Decimal,
}
