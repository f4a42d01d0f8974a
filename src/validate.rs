// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Insert and select normalization, one explicit pair of functions per
//! entity. Insert normalizers take a draft, apply declared defaults,
//! and collect every field violation before rejecting. Select
//! normalizers take the raw stored representation (decimal strings,
//! enum text, date text) and produce a typed model, so rows read back
//! from the database or an external import pass the same contract.
//!
//! Referential checks that need the live connection (a category id
//! naming a category owned by the same user) live in `store`, not here.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{FieldErrors, Result};
use crate::models::*;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

const CURRENCY_DP: u32 = 2;
const SHARES_DP: u32 = 6;

fn require(errs: &mut FieldErrors, field: &'static str, value: &str) -> String {
    let v = value.trim();
    if v.is_empty() {
        errs.push(field, "must not be empty");
    }
    v.to_string()
}

fn non_negative(errs: &mut FieldErrors, field: &'static str, value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        errs.push(field, "must not be negative");
    }
    value.round_dp(CURRENCY_DP)
}

fn stored_decimal(errs: &mut FieldErrors, field: &'static str, s: &str) -> Decimal {
    match s.parse::<Decimal>() {
        Ok(d) => d,
        Err(_) => {
            errs.push(field, format!("invalid decimal '{}'", s));
            Decimal::ZERO
        }
    }
}

fn stored_date(errs: &mut FieldErrors, field: &'static str, s: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            errs.push(field, format!("invalid date '{}'", s));
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        }
    }
}

// ---- users ----

pub fn user_insert(draft: &NewUser) -> Result<NewUser> {
    let mut errs = FieldErrors::new();
    let email = require(&mut errs, "email", &draft.email).to_lowercase();
    if !email.is_empty() && !EMAIL_RE.is_match(&email) {
        errs.push("email", format!("'{}' is not a valid address", email));
    }
    let name = require(&mut errs, "name", &draft.name);
    let password_hash = require(&mut errs, "password_hash", &draft.password_hash);
    errs.into_result(NewUser {
        email,
        name,
        password_hash,
    })
}

// ---- categories ----

pub fn category_insert(draft: &NewCategory) -> Result<NewCategory> {
    let mut errs = FieldErrors::new();
    let name = require(&mut errs, "name", &draft.name);
    let emoji = require(&mut errs, "emoji", &draft.emoji);
    let budget_amount = non_negative(
        &mut errs,
        "budget_amount",
        draft.budget_amount.unwrap_or(Decimal::ZERO),
    );
    errs.into_result(NewCategory {
        name,
        emoji,
        budget_amount: Some(budget_amount),
    })
}

pub struct RawCategory {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub emoji: String,
    pub budget_amount: String,
}

pub fn category_select(raw: RawCategory) -> Result<Category> {
    let mut errs = FieldErrors::new();
    let budget_amount = stored_decimal(&mut errs, "budget_amount", &raw.budget_amount);
    errs.into_result(Category {
        id: raw.id,
        user_id: raw.user_id,
        name: raw.name,
        emoji: raw.emoji,
        budget_amount,
    })
}

// ---- transactions ----

pub fn transaction_insert(draft: &NewTransaction) -> Result<NewTransaction> {
    let mut errs = FieldErrors::new();
    let description = require(&mut errs, "description", &draft.description);
    let amount = draft.amount.round_dp(CURRENCY_DP);
    let external_id = draft
        .external_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    errs.into_result(NewTransaction {
        category_id: draft.category_id,
        amount,
        description,
        date: draft.date,
        is_recurring: Some(draft.is_recurring.unwrap_or(false)),
        ai_categorized: Some(draft.ai_categorized.unwrap_or(false)),
        external_id,
    })
}

pub struct RawTransaction {
    pub id: i64,
    pub user_id: i64,
    pub category_id: Option<i64>,
    pub amount: String,
    pub description: String,
    pub date: String,
    pub is_recurring: bool,
    pub ai_categorized: bool,
    pub external_id: Option<String>,
}

pub fn transaction_select(raw: RawTransaction) -> Result<Transaction> {
    let mut errs = FieldErrors::new();
    let amount = stored_decimal(&mut errs, "amount", &raw.amount);
    let date = stored_date(&mut errs, "date", &raw.date);
    errs.into_result(Transaction {
        id: raw.id,
        user_id: raw.user_id,
        category_id: raw.category_id,
        amount,
        description: raw.description,
        date,
        is_recurring: raw.is_recurring,
        ai_categorized: raw.ai_categorized,
        external_id: raw.external_id,
    })
}

// ---- budgets ----

pub fn budget_insert(draft: &NewBudget) -> Result<NewBudget> {
    let mut errs = FieldErrors::new();
    let amount = non_negative(&mut errs, "amount", draft.amount);
    if !(1..=12).contains(&draft.month) {
        errs.push("month", format!("{} is out of range 1-12", draft.month));
    }
    if !(1900..=9999).contains(&draft.year) {
        errs.push("year", format!("{} is out of range", draft.year));
    }
    errs.into_result(NewBudget {
        category_id: draft.category_id,
        amount,
        month: draft.month,
        year: draft.year,
    })
}

pub struct RawBudget {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub amount: String,
    pub month: i64,
    pub year: i64,
}

pub fn budget_select(raw: RawBudget) -> Result<Budget> {
    let mut errs = FieldErrors::new();
    let amount = stored_decimal(&mut errs, "amount", &raw.amount);
    let month = u32::try_from(raw.month).ok().filter(|m| (1..=12).contains(m));
    if month.is_none() {
        errs.push("month", format!("{} is out of range 1-12", raw.month));
    }
    let year = i32::try_from(raw.year).unwrap_or_else(|_| {
        errs.push("year", format!("{} is out of range", raw.year));
        0
    });
    errs.into_result(Budget {
        id: raw.id,
        user_id: raw.user_id,
        category_id: raw.category_id,
        amount,
        month: month.unwrap_or(1),
        year,
    })
}

// ---- insights ----

pub fn insight_insert(draft: &NewInsight) -> Result<NewInsight> {
    let mut errs = FieldErrors::new();
    let title = require(&mut errs, "title", &draft.title);
    let description = require(&mut errs, "description", &draft.description);
    errs.into_result(NewInsight {
        r#type: draft.r#type,
        title,
        description,
        priority: Some(draft.priority.unwrap_or(Priority::Medium)),
    })
}

pub struct RawInsight {
    pub id: i64,
    pub user_id: i64,
    pub r#type: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub is_read: bool,
}

pub fn insight_select(raw: RawInsight) -> Result<Insight> {
    let mut errs = FieldErrors::new();
    let r#type = InsightType::parse(&raw.r#type).unwrap_or_else(|| {
        errs.push(
            "type",
            format!("'{}' is not one of trend, alert, recommendation", raw.r#type),
        );
        InsightType::Trend
    });
    let priority = Priority::parse(&raw.priority).unwrap_or_else(|| {
        errs.push(
            "priority",
            format!("'{}' is not one of high, medium, low", raw.priority),
        );
        Priority::Medium
    });
    errs.into_result(Insight {
        id: raw.id,
        user_id: raw.user_id,
        r#type,
        title: raw.title,
        description: raw.description,
        priority,
        is_read: raw.is_read,
    })
}

// ---- bank connections ----

pub fn bank_connection_insert(draft: &NewBankConnection) -> Result<NewBankConnection> {
    let mut errs = FieldErrors::new();
    let external_item_id = require(&mut errs, "external_item_id", &draft.external_item_id);
    let access_token = require(&mut errs, "access_token", &draft.access_token);
    let institution_name = require(&mut errs, "institution_name", &draft.institution_name);
    errs.into_result(NewBankConnection {
        external_item_id,
        access_token,
        institution_name,
        account_ids: draft.account_ids.clone(),
    })
}

pub struct RawBankConnection {
    pub id: i64,
    pub user_id: i64,
    pub external_item_id: String,
    pub institution_name: String,
    pub account_ids: String,
    pub is_active: bool,
    pub last_sync: Option<String>,
}

pub fn bank_connection_select(raw: RawBankConnection) -> Result<BankConnection> {
    let mut errs = FieldErrors::new();
    let account_ids: Vec<String> = match serde_json::from_str(&raw.account_ids) {
        Ok(ids) => ids,
        Err(_) => {
            errs.push(
                "account_ids",
                format!("invalid account id list '{}'", raw.account_ids),
            );
            Vec::new()
        }
    };
    errs.into_result(BankConnection {
        id: raw.id,
        user_id: raw.user_id,
        external_item_id: raw.external_item_id,
        institution_name: raw.institution_name,
        account_ids,
        is_active: raw.is_active,
        last_sync: raw.last_sync,
    })
}

// ---- savings goals ----

pub fn savings_goal_insert(draft: &NewSavingsGoal) -> Result<NewSavingsGoal> {
    let mut errs = FieldErrors::new();
    let name = require(&mut errs, "name", &draft.name);
    let target_amount = draft.target_amount.round_dp(CURRENCY_DP);
    if target_amount <= Decimal::ZERO {
        errs.push("target_amount", "must be positive");
    }
    errs.into_result(NewSavingsGoal {
        name,
        target_amount,
        target_date: draft.target_date,
    })
}

pub struct RawSavingsGoal {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: Option<String>,
    pub is_completed: bool,
}

pub fn savings_goal_select(raw: RawSavingsGoal) -> Result<SavingsGoal> {
    let mut errs = FieldErrors::new();
    let target_amount = stored_decimal(&mut errs, "target_amount", &raw.target_amount);
    let current_amount = stored_decimal(&mut errs, "current_amount", &raw.current_amount);
    let target_date = match raw.target_date {
        Some(s) => Some(stored_date(&mut errs, "target_date", &s)),
        None => None,
    };
    errs.into_result(SavingsGoal {
        id: raw.id,
        user_id: raw.user_id,
        name: raw.name,
        target_amount,
        current_amount,
        target_date,
        is_completed: raw.is_completed,
    })
}

// ---- savings rules ----

pub fn savings_rule_insert(draft: &NewSavingsRule) -> Result<NewSavingsRule> {
    let mut errs = FieldErrors::new();
    let name = require(&mut errs, "name", &draft.name);
    let value = draft.value.round_dp(CURRENCY_DP);
    match draft.r#type {
        SavingsRuleType::Percentage => {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                errs.push("value", "percentage must be between 0 and 100");
            }
        }
        SavingsRuleType::Fixed => {
            if value < Decimal::ZERO {
                errs.push("value", "fixed amount must not be negative");
            }
        }
        SavingsRuleType::RoundUp => {
            if value <= Decimal::ZERO {
                errs.push("value", "rounding unit must be positive");
            }
        }
    }
    errs.into_result(NewSavingsRule {
        name,
        r#type: draft.r#type,
        value,
        is_active: Some(draft.is_active.unwrap_or(true)),
    })
}

pub struct RawSavingsRule {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub r#type: String,
    pub value: String,
    pub is_active: bool,
}

pub fn savings_rule_select(raw: RawSavingsRule) -> Result<SavingsRule> {
    let mut errs = FieldErrors::new();
    let r#type = SavingsRuleType::parse(&raw.r#type).unwrap_or_else(|| {
        errs.push(
            "type",
            format!("'{}' is not one of percentage, fixed, round_up", raw.r#type),
        );
        SavingsRuleType::Fixed
    });
    let value = stored_decimal(&mut errs, "value", &raw.value);
    errs.into_result(SavingsRule {
        id: raw.id,
        user_id: raw.user_id,
        name: raw.name,
        r#type,
        value,
        is_active: raw.is_active,
    })
}

// ---- investments ----

pub fn investment_insert(draft: &NewInvestment) -> Result<NewInvestment> {
    let mut errs = FieldErrors::new();
    let symbol = require(&mut errs, "symbol", &draft.symbol).to_uppercase();
    let name = require(&mut errs, "name", &draft.name);
    let shares = draft.shares.round_dp(SHARES_DP);
    if shares <= Decimal::ZERO {
        errs.push("shares", "must be positive");
    }
    let avg_cost_per_share = non_negative(&mut errs, "avg_cost_per_share", draft.avg_cost_per_share);
    let current_value = non_negative(&mut errs, "current_value", draft.current_value);
    errs.into_result(NewInvestment {
        symbol,
        name,
        shares,
        avg_cost_per_share,
        current_value,
    })
}

pub struct RawInvestment {
    pub id: i64,
    pub user_id: i64,
    pub symbol: String,
    pub name: String,
    pub shares: String,
    pub avg_cost_per_share: String,
    pub current_value: String,
    pub total_return: String,
}

pub fn investment_select(raw: RawInvestment) -> Result<Investment> {
    let mut errs = FieldErrors::new();
    let shares = stored_decimal(&mut errs, "shares", &raw.shares);
    let avg_cost_per_share = stored_decimal(&mut errs, "avg_cost_per_share", &raw.avg_cost_per_share);
    let current_value = stored_decimal(&mut errs, "current_value", &raw.current_value);
    let total_return = stored_decimal(&mut errs, "total_return", &raw.total_return);
    errs.into_result(Investment {
        id: raw.id,
        user_id: raw.user_id,
        symbol: raw.symbol,
        name: raw.name,
        shares,
        avg_cost_per_share,
        current_value,
        total_return,
    })
}

/// Cost basis and return for an investment position. Recomputed on
/// every value update; the stored column is never trusted to be fresh.
pub fn investment_return(
    shares: Decimal,
    avg_cost_per_share: Decimal,
    current_value: Decimal,
) -> Decimal {
    (current_value - shares * avg_cost_per_share).round_dp(CURRENCY_DP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn user_insert_normalizes_email_and_reports_all_fields() {
        let err = user_insert(&NewUser {
            email: "not-an-email".into(),
            name: "".into(),
            password_hash: "".into(),
        })
        .unwrap_err();
        match err {
            Error::Validation(errs) => {
                let fields: Vec<_> = errs.0.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["email", "name", "password_hash"]);
            }
            other => panic!("unexpected error: {other}"),
        }

        let ok = user_insert(&NewUser {
            email: "  Trent@Example.COM ".into(),
            name: "Trent".into(),
            password_hash: "hash".into(),
        })
        .unwrap();
        assert_eq!(ok.email, "trent@example.com");
    }

    #[test]
    fn category_insert_applies_zero_default_and_rejects_negative_budget() {
        let ok = category_insert(&NewCategory {
            name: "Dining".into(),
            emoji: "🍜".into(),
            budget_amount: None,
        })
        .unwrap();
        assert_eq!(ok.budget_amount, Some(Decimal::ZERO));

        assert!(category_insert(&NewCategory {
            name: "Dining".into(),
            emoji: "🍜".into(),
            budget_amount: Some(dec("-1")),
        })
        .is_err());
    }

    #[test]
    fn transaction_insert_defaults_flags_off() {
        let ok = transaction_insert(&NewTransaction {
            category_id: None,
            amount: dec("-12.345"),
            description: "coffee".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            is_recurring: None,
            ai_categorized: None,
            external_id: Some("  ".into()),
        })
        .unwrap();
        assert_eq!(ok.is_recurring, Some(false));
        assert_eq!(ok.ai_categorized, Some(false));
        assert_eq!(ok.external_id, None);
        // currency scale is 2 dp, banker's rounding
        assert_eq!(ok.amount, dec("-12.34"));
    }

    #[test]
    fn budget_insert_rejects_month_out_of_range() {
        let err = budget_insert(&NewBudget {
            category_id: 1,
            amount: dec("100"),
            month: 13,
            year: 2025,
        })
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn insight_select_rejects_out_of_enum_priority() {
        let err = insight_select(RawInsight {
            id: 1,
            user_id: 1,
            r#type: "trend".into(),
            title: "t".into(),
            description: "d".into(),
            priority: "urgent".into(),
            is_read: false,
        })
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn savings_rule_value_interpretation_depends_on_type() {
        let pct = |v: &str| NewSavingsRule {
            name: "r".into(),
            r#type: SavingsRuleType::Percentage,
            value: dec(v),
            is_active: None,
        };
        assert!(savings_rule_insert(&pct("100")).is_ok());
        assert!(savings_rule_insert(&pct("100.01")).is_err());

        let round = NewSavingsRule {
            name: "r".into(),
            r#type: SavingsRuleType::RoundUp,
            value: Decimal::ZERO,
            is_active: None,
        };
        assert!(savings_rule_insert(&round).is_err());

        let fixed = NewSavingsRule {
            name: "r".into(),
            r#type: SavingsRuleType::Fixed,
            value: dec("5"),
            is_active: None,
        };
        assert_eq!(savings_rule_insert(&fixed).unwrap().is_active, Some(true));
    }

    #[test]
    fn investment_return_matches_cost_basis() {
        assert_eq!(
            investment_return(dec("10"), dec("100.00"), dec("1200.00")),
            dec("200.00")
        );
    }

    #[test]
    fn select_validators_reject_corrupt_decimals() {
        let err = transaction_select(RawTransaction {
            id: 1,
            user_id: 1,
            category_id: None,
            amount: "NaN".into(),
            description: "d".into(),
            date: "2025-01-01".into(),
            is_recurring: false,
            ai_categorized: false,
            external_id: None,
        })
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
