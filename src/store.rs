// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Tenant-scoped persistence. Every query here is filtered by the
//! owning user id; a row that exists under another user surfaces as
//! `Ownership`, which callers present exactly like `NotFound`.
//!
//! Writes validate through `validate` before touching SQL. Reads map
//! rows through the matching select normalizer, so corrupt stored
//! values fail loudly instead of flowing into aggregation.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::*;
use crate::validate;
use crate::validate::{
    RawBankConnection, RawBudget, RawCategory, RawInsight, RawInvestment, RawSavingsGoal,
    RawSavingsRule, RawTransaction,
};

/// Maps a SQLite uniqueness violation to `Conflict`; everything else
/// passes through.
fn conflict_on_unique(e: rusqlite::Error, what: &str) -> Error {
    match &e {
        rusqlite::Error::SqliteFailure(f, _)
            if f.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Error::Conflict(what.to_string())
        }
        _ => Error::Db(e),
    }
}

fn check_owner(entity: &'static str, id: i64, row_user: i64, user_id: i64) -> Result<()> {
    if row_user == user_id {
        Ok(())
    } else {
        Err(Error::ownership(entity, id))
    }
}

// ---- users ----

pub fn insert_user(conn: &Connection, draft: &NewUser) -> Result<User> {
    let v = validate::user_insert(draft)?;
    conn.execute(
        "INSERT INTO users(email, name, password_hash) VALUES (?1, ?2, ?3)",
        params![v.email, v.name, v.password_hash],
    )
    .map_err(|e| conflict_on_unique(e, &format!("email '{}' is already registered", v.email)))?;
    Ok(User {
        id: conn.last_insert_rowid(),
        email: v.email,
        name: v.name,
    })
}

pub fn user_by_id(conn: &Connection, id: i64) -> Result<User> {
    conn.query_row(
        "SELECT id, email, name FROM users WHERE id=?1",
        params![id],
        |r| {
            Ok(User {
                id: r.get(0)?,
                email: r.get(1)?,
                name: r.get(2)?,
            })
        },
    )
    .optional()?
    .ok_or_else(|| Error::not_found("user", id))
}

pub fn user_by_email(conn: &Connection, email: &str) -> Result<User> {
    conn.query_row(
        "SELECT id, email, name FROM users WHERE email=?1",
        params![email.trim().to_lowercase()],
        |r| {
            Ok(User {
                id: r.get(0)?,
                email: r.get(1)?,
                name: r.get(2)?,
            })
        },
    )
    .optional()?
    .ok_or_else(|| Error::invalid("email", format!("no user with email '{}'", email)))
}

// ---- categories ----

pub fn insert_category(conn: &Connection, user_id: i64, draft: &NewCategory) -> Result<Category> {
    let v = validate::category_insert(draft)?;
    let budget_amount = v.budget_amount.unwrap_or(Decimal::ZERO);
    conn.execute(
        "INSERT INTO categories(user_id, name, emoji, budget_amount) VALUES (?1, ?2, ?3, ?4)",
        params![user_id, v.name, v.emoji, budget_amount.to_string()],
    )?;
    Ok(Category {
        id: conn.last_insert_rowid(),
        user_id,
        name: v.name,
        emoji: v.emoji,
        budget_amount,
    })
}

pub fn category(conn: &Connection, user_id: i64, id: i64) -> Result<Category> {
    let raw = conn
        .query_row(
            "SELECT id, user_id, name, emoji, budget_amount FROM categories WHERE id=?1",
            params![id],
            |r| {
                Ok(RawCategory {
                    id: r.get(0)?,
                    user_id: r.get(1)?,
                    name: r.get(2)?,
                    emoji: r.get(3)?,
                    budget_amount: r.get(4)?,
                })
            },
        )
        .optional()?
        .ok_or_else(|| Error::not_found("category", id))?;
    check_owner("category", id, raw.user_id, user_id)?;
    validate::category_select(raw)
}

pub fn categories(conn: &Connection, user_id: i64) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, name, emoji, budget_amount FROM categories WHERE user_id=?1 ORDER BY name",
    )?;
    let rows = stmt.query_map(params![user_id], |r| {
        Ok(RawCategory {
            id: r.get(0)?,
            user_id: r.get(1)?,
            name: r.get(2)?,
            emoji: r.get(3)?,
            budget_amount: r.get(4)?,
        })
    })?;
    let mut out = Vec::new();
    for raw in rows {
        out.push(validate::category_select(raw?)?);
    }
    Ok(out)
}

pub fn delete_category(conn: &Connection, user_id: i64, id: i64) -> Result<()> {
    category(conn, user_id, id)?;
    conn.execute(
        "DELETE FROM categories WHERE id=?1 AND user_id=?2",
        params![id, user_id],
    )?;
    Ok(())
}

// ---- transactions ----

pub fn insert_transaction(
    conn: &Connection,
    user_id: i64,
    draft: &NewTransaction,
) -> Result<Transaction> {
    let v = validate::transaction_insert(draft)?;
    // Soft foreign key: a category id must name a category owned by
    // the same user, checked here rather than left to storage.
    if let Some(cid) = v.category_id {
        category(conn, user_id, cid)?;
    }
    conn.execute(
        "INSERT INTO transactions(user_id, category_id, amount, description, date, is_recurring, ai_categorized, external_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            user_id,
            v.category_id,
            v.amount.to_string(),
            v.description,
            v.date.to_string(),
            v.is_recurring.unwrap_or(false),
            v.ai_categorized.unwrap_or(false),
            v.external_id
        ],
    )?;
    Ok(Transaction {
        id: conn.last_insert_rowid(),
        user_id,
        category_id: v.category_id,
        amount: v.amount,
        description: v.description,
        date: v.date,
        is_recurring: v.is_recurring.unwrap_or(false),
        ai_categorized: v.ai_categorized.unwrap_or(false),
        external_id: v.external_id,
    })
}

fn map_transaction_row(r: &rusqlite::Row<'_>) -> rusqlite::Result<RawTransaction> {
    Ok(RawTransaction {
        id: r.get(0)?,
        user_id: r.get(1)?,
        category_id: r.get(2)?,
        amount: r.get(3)?,
        description: r.get(4)?,
        date: r.get(5)?,
        is_recurring: r.get(6)?,
        ai_categorized: r.get(7)?,
        external_id: r.get(8)?,
    })
}

const TRANSACTION_COLS: &str =
    "id, user_id, category_id, amount, description, date, is_recurring, ai_categorized, external_id";

pub fn transaction(conn: &Connection, user_id: i64, id: i64) -> Result<Transaction> {
    let raw = conn
        .query_row(
            &format!("SELECT {TRANSACTION_COLS} FROM transactions WHERE id=?1"),
            params![id],
            map_transaction_row,
        )
        .optional()?
        .ok_or_else(|| Error::not_found("transaction", id))?;
    check_owner("transaction", id, raw.user_id, user_id)?;
    validate::transaction_select(raw)
}

/// Snapshot of every transaction the user owns, oldest first. This is
/// the input the aggregation layer works from.
pub fn transactions(conn: &Connection, user_id: i64) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TRANSACTION_COLS} FROM transactions WHERE user_id=?1 ORDER BY date, id"
    ))?;
    let rows = stmt.query_map(params![user_id], map_transaction_row)?;
    let mut out = Vec::new();
    for raw in rows {
        out.push(validate::transaction_select(raw?)?);
    }
    Ok(out)
}

pub fn delete_transaction(conn: &Connection, user_id: i64, id: i64) -> Result<()> {
    transaction(conn, user_id, id)?;
    conn.execute(
        "DELETE FROM transactions WHERE id=?1 AND user_id=?2",
        params![id, user_id],
    )?;
    Ok(())
}

// ---- budgets ----

pub fn insert_budget(conn: &Connection, user_id: i64, draft: &NewBudget) -> Result<Budget> {
    let v = validate::budget_insert(draft)?;
    category(conn, user_id, v.category_id)?;
    conn.execute(
        "INSERT INTO budgets(user_id, category_id, amount, month, year) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, v.category_id, v.amount.to_string(), v.month, v.year],
    )
    .map_err(|e| {
        conflict_on_unique(
            e,
            &format!(
                "budget already set for category {} in {}-{:02}",
                v.category_id, v.year, v.month
            ),
        )
    })?;
    Ok(Budget {
        id: conn.last_insert_rowid(),
        user_id,
        category_id: v.category_id,
        amount: v.amount,
        month: v.month,
        year: v.year,
    })
}

pub fn budgets(conn: &Connection, user_id: i64) -> Result<Vec<Budget>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, category_id, amount, month, year FROM budgets
         WHERE user_id=?1 ORDER BY year, month, category_id",
    )?;
    let rows = stmt.query_map(params![user_id], |r| {
        Ok(RawBudget {
            id: r.get(0)?,
            user_id: r.get(1)?,
            category_id: r.get(2)?,
            amount: r.get(3)?,
            month: r.get(4)?,
            year: r.get(5)?,
        })
    })?;
    let mut out = Vec::new();
    for raw in rows {
        out.push(validate::budget_select(raw?)?);
    }
    Ok(out)
}

pub fn delete_budget(conn: &Connection, user_id: i64, id: i64) -> Result<()> {
    let row_user: i64 = conn
        .query_row(
            "SELECT user_id FROM budgets WHERE id=?1",
            params![id],
            |r| r.get(0),
        )
        .optional()?
        .ok_or_else(|| Error::not_found("budget", id))?;
    check_owner("budget", id, row_user, user_id)?;
    conn.execute(
        "DELETE FROM budgets WHERE id=?1 AND user_id=?2",
        params![id, user_id],
    )?;
    Ok(())
}

// ---- insights ----

pub fn insert_insight(conn: &Connection, user_id: i64, draft: &NewInsight) -> Result<Insight> {
    let v = validate::insight_insert(draft)?;
    let priority = v.priority.unwrap_or(Priority::Medium);
    conn.execute(
        "INSERT INTO insights(user_id, type, title, description, priority) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, v.r#type.as_str(), v.title, v.description, priority.as_str()],
    )?;
    Ok(Insight {
        id: conn.last_insert_rowid(),
        user_id,
        r#type: v.r#type,
        title: v.title,
        description: v.description,
        priority,
        is_read: false,
    })
}

pub fn insights(conn: &Connection, user_id: i64, unread_only: bool) -> Result<Vec<Insight>> {
    let mut sql = String::from(
        "SELECT id, user_id, type, title, description, priority, is_read FROM insights WHERE user_id=?1",
    );
    if unread_only {
        sql.push_str(" AND is_read=0");
    }
    sql.push_str(" ORDER BY id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![user_id], |r| {
        Ok(RawInsight {
            id: r.get(0)?,
            user_id: r.get(1)?,
            r#type: r.get(2)?,
            title: r.get(3)?,
            description: r.get(4)?,
            priority: r.get(5)?,
            is_read: r.get(6)?,
        })
    })?;
    let mut out = Vec::new();
    for raw in rows {
        out.push(validate::insight_select(raw?)?);
    }
    Ok(out)
}

pub fn mark_insight_read(conn: &Connection, user_id: i64, id: i64) -> Result<()> {
    let row_user: i64 = conn
        .query_row(
            "SELECT user_id FROM insights WHERE id=?1",
            params![id],
            |r| r.get(0),
        )
        .optional()?
        .ok_or_else(|| Error::not_found("insight", id))?;
    check_owner("insight", id, row_user, user_id)?;
    conn.execute(
        "UPDATE insights SET is_read=1 WHERE id=?1 AND user_id=?2",
        params![id, user_id],
    )?;
    Ok(())
}

// ---- bank connections ----

pub fn insert_bank_connection(
    conn: &Connection,
    user_id: i64,
    draft: &NewBankConnection,
) -> Result<BankConnection> {
    let v = validate::bank_connection_insert(draft)?;
    let account_ids = serde_json::to_string(&v.account_ids)
        .map_err(|e| Error::invalid("account_ids", e.to_string()))?;
    conn.execute(
        "INSERT INTO bank_connections(user_id, external_item_id, external_access_token, institution_name, account_ids)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, v.external_item_id, v.access_token, v.institution_name, account_ids],
    )?;
    Ok(BankConnection {
        id: conn.last_insert_rowid(),
        user_id,
        external_item_id: v.external_item_id,
        institution_name: v.institution_name,
        account_ids: v.account_ids,
        is_active: true,
        last_sync: None,
    })
}

/// The access token column is never part of this select list, or any
/// other read path.
pub fn bank_connections(conn: &Connection, user_id: i64) -> Result<Vec<BankConnection>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, external_item_id, institution_name, account_ids, is_active, last_sync
         FROM bank_connections WHERE user_id=?1 ORDER BY institution_name",
    )?;
    let rows = stmt.query_map(params![user_id], |r| {
        Ok(RawBankConnection {
            id: r.get(0)?,
            user_id: r.get(1)?,
            external_item_id: r.get(2)?,
            institution_name: r.get(3)?,
            account_ids: r.get(4)?,
            is_active: r.get(5)?,
            last_sync: r.get(6)?,
        })
    })?;
    let mut out = Vec::new();
    for raw in rows {
        out.push(validate::bank_connection_select(raw?)?);
    }
    Ok(out)
}

pub fn set_connection_active(conn: &Connection, user_id: i64, id: i64, active: bool) -> Result<()> {
    let row_user: i64 = conn
        .query_row(
            "SELECT user_id FROM bank_connections WHERE id=?1",
            params![id],
            |r| r.get(0),
        )
        .optional()?
        .ok_or_else(|| Error::not_found("bank connection", id))?;
    check_owner("bank connection", id, row_user, user_id)?;
    conn.execute(
        "UPDATE bank_connections SET is_active=?3 WHERE id=?1 AND user_id=?2",
        params![id, user_id, active],
    )?;
    Ok(())
}

// ---- savings goals ----

pub fn insert_savings_goal(
    conn: &Connection,
    user_id: i64,
    draft: &NewSavingsGoal,
) -> Result<SavingsGoal> {
    let v = validate::savings_goal_insert(draft)?;
    conn.execute(
        "INSERT INTO savings_goals(user_id, name, target_amount, target_date) VALUES (?1, ?2, ?3, ?4)",
        params![
            user_id,
            v.name,
            v.target_amount.to_string(),
            v.target_date.map(|d| d.to_string())
        ],
    )?;
    Ok(SavingsGoal {
        id: conn.last_insert_rowid(),
        user_id,
        name: v.name,
        target_amount: v.target_amount,
        current_amount: Decimal::ZERO,
        target_date: v.target_date,
        is_completed: false,
    })
}

fn map_goal_row(r: &rusqlite::Row<'_>) -> rusqlite::Result<RawSavingsGoal> {
    Ok(RawSavingsGoal {
        id: r.get(0)?,
        user_id: r.get(1)?,
        name: r.get(2)?,
        target_amount: r.get(3)?,
        current_amount: r.get(4)?,
        target_date: r.get(5)?,
        is_completed: r.get(6)?,
    })
}

const GOAL_COLS: &str =
    "id, user_id, name, target_amount, current_amount, target_date, is_completed";

pub fn savings_goal(conn: &Connection, user_id: i64, id: i64) -> Result<SavingsGoal> {
    let raw = conn
        .query_row(
            &format!("SELECT {GOAL_COLS} FROM savings_goals WHERE id=?1"),
            params![id],
            map_goal_row,
        )
        .optional()?
        .ok_or_else(|| Error::not_found("savings goal", id))?;
    check_owner("savings goal", id, raw.user_id, user_id)?;
    validate::savings_goal_select(raw)
}

pub fn savings_goals(conn: &Connection, user_id: i64) -> Result<Vec<SavingsGoal>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {GOAL_COLS} FROM savings_goals WHERE user_id=?1 ORDER BY name"
    ))?;
    let rows = stmt.query_map(params![user_id], map_goal_row)?;
    let mut out = Vec::new();
    for raw in rows {
        out.push(validate::savings_goal_select(raw?)?);
    }
    Ok(out)
}

/// Completion is decided here and nowhere else: a write that leaves
/// the balance at or above target marks the goal completed, and the
/// stored amount is capped at the target so a completed goal never
/// reports an overshoot.
fn apply_goal_amount(
    conn: &Connection,
    user_id: i64,
    goal: &SavingsGoal,
    new_amount: Decimal,
) -> Result<SavingsGoal> {
    if new_amount < Decimal::ZERO {
        return Err(Error::invalid("current_amount", "must not be negative"));
    }
    let is_completed = new_amount >= goal.target_amount;
    let stored = if is_completed {
        goal.target_amount
    } else {
        new_amount
    };
    conn.execute(
        "UPDATE savings_goals SET current_amount=?3, is_completed=?4 WHERE id=?1 AND user_id=?2",
        params![goal.id, user_id, stored.to_string(), is_completed],
    )?;
    Ok(SavingsGoal {
        current_amount: stored,
        is_completed,
        ..goal.clone()
    })
}

pub fn set_goal_amount(
    conn: &Connection,
    user_id: i64,
    id: i64,
    new_amount: Decimal,
) -> Result<SavingsGoal> {
    let goal = savings_goal(conn, user_id, id)?;
    apply_goal_amount(conn, user_id, &goal, new_amount.round_dp(2))
}

/// Moves money into a goal: records the funding transaction and bumps
/// the goal balance as one storage transaction. Either both land or
/// neither does.
pub fn fund_goal(
    conn: &mut Connection,
    user_id: i64,
    goal_id: i64,
    amount: Decimal,
    date: NaiveDate,
) -> Result<SavingsGoal> {
    if amount <= Decimal::ZERO {
        return Err(Error::invalid("amount", "must be positive"));
    }
    let amount = amount.round_dp(2);
    let tx = conn.transaction()?;
    let goal = savings_goal(&tx, user_id, goal_id)?;
    insert_transaction(
        &tx,
        user_id,
        &NewTransaction {
            category_id: None,
            amount: -amount,
            description: format!("Transfer to savings goal '{}'", goal.name),
            date,
            is_recurring: None,
            ai_categorized: None,
            external_id: None,
        },
    )?;
    let updated = apply_goal_amount(&tx, user_id, &goal, goal.current_amount + amount)?;
    tx.commit()?;
    Ok(updated)
}

// ---- savings rules ----

pub fn insert_savings_rule(
    conn: &Connection,
    user_id: i64,
    draft: &NewSavingsRule,
) -> Result<SavingsRule> {
    let v = validate::savings_rule_insert(draft)?;
    let is_active = v.is_active.unwrap_or(true);
    conn.execute(
        "INSERT INTO savings_rules(user_id, name, type, value, is_active) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, v.name, v.r#type.as_str(), v.value.to_string(), is_active],
    )?;
    Ok(SavingsRule {
        id: conn.last_insert_rowid(),
        user_id,
        name: v.name,
        r#type: v.r#type,
        value: v.value,
        is_active,
    })
}

pub fn savings_rules(conn: &Connection, user_id: i64) -> Result<Vec<SavingsRule>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, name, type, value, is_active FROM savings_rules
         WHERE user_id=?1 ORDER BY name",
    )?;
    let rows = stmt.query_map(params![user_id], |r| {
        Ok(RawSavingsRule {
            id: r.get(0)?,
            user_id: r.get(1)?,
            name: r.get(2)?,
            r#type: r.get(3)?,
            value: r.get(4)?,
            is_active: r.get(5)?,
        })
    })?;
    let mut out = Vec::new();
    for raw in rows {
        out.push(validate::savings_rule_select(raw?)?);
    }
    Ok(out)
}

pub fn set_rule_active(conn: &Connection, user_id: i64, id: i64, active: bool) -> Result<()> {
    let row_user: i64 = conn
        .query_row(
            "SELECT user_id FROM savings_rules WHERE id=?1",
            params![id],
            |r| r.get(0),
        )
        .optional()?
        .ok_or_else(|| Error::not_found("savings rule", id))?;
    check_owner("savings rule", id, row_user, user_id)?;
    conn.execute(
        "UPDATE savings_rules SET is_active=?3 WHERE id=?1 AND user_id=?2",
        params![id, user_id, active],
    )?;
    Ok(())
}

// ---- investments ----

pub fn insert_investment(
    conn: &Connection,
    user_id: i64,
    draft: &NewInvestment,
) -> Result<Investment> {
    let v = validate::investment_insert(draft)?;
    let total_return = validate::investment_return(v.shares, v.avg_cost_per_share, v.current_value);
    conn.execute(
        "INSERT INTO investments(user_id, symbol, name, shares, avg_cost_per_share, current_value, total_return)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user_id,
            v.symbol,
            v.name,
            v.shares.to_string(),
            v.avg_cost_per_share.to_string(),
            v.current_value.to_string(),
            total_return.to_string()
        ],
    )?;
    Ok(Investment {
        id: conn.last_insert_rowid(),
        user_id,
        symbol: v.symbol,
        name: v.name,
        shares: v.shares,
        avg_cost_per_share: v.avg_cost_per_share,
        current_value: v.current_value,
        total_return,
    })
}

fn map_investment_row(r: &rusqlite::Row<'_>) -> rusqlite::Result<RawInvestment> {
    Ok(RawInvestment {
        id: r.get(0)?,
        user_id: r.get(1)?,
        symbol: r.get(2)?,
        name: r.get(3)?,
        shares: r.get(4)?,
        avg_cost_per_share: r.get(5)?,
        current_value: r.get(6)?,
        total_return: r.get(7)?,
    })
}

const INVESTMENT_COLS: &str =
    "id, user_id, symbol, name, shares, avg_cost_per_share, current_value, total_return";

pub fn investment(conn: &Connection, user_id: i64, id: i64) -> Result<Investment> {
    let raw = conn
        .query_row(
            &format!("SELECT {INVESTMENT_COLS} FROM investments WHERE id=?1"),
            params![id],
            map_investment_row,
        )
        .optional()?
        .ok_or_else(|| Error::not_found("investment", id))?;
    check_owner("investment", id, raw.user_id, user_id)?;
    validate::investment_select(raw)
}

pub fn investments(conn: &Connection, user_id: i64) -> Result<Vec<Investment>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {INVESTMENT_COLS} FROM investments WHERE user_id=?1 ORDER BY symbol"
    ))?;
    let rows = stmt.query_map(params![user_id], map_investment_row)?;
    let mut out = Vec::new();
    for raw in rows {
        out.push(validate::investment_select(raw?)?);
    }
    Ok(out)
}

/// Re-marks a position at a new market value; total_return is
/// recomputed from the stored cost basis, never carried forward.
pub fn update_investment_value(
    conn: &Connection,
    user_id: i64,
    id: i64,
    current_value: Decimal,
) -> Result<Investment> {
    if current_value < Decimal::ZERO {
        return Err(Error::invalid("current_value", "must not be negative"));
    }
    let inv = investment(conn, user_id, id)?;
    let current_value = current_value.round_dp(2);
    let total_return =
        validate::investment_return(inv.shares, inv.avg_cost_per_share, current_value);
    conn.execute(
        "UPDATE investments SET current_value=?3, total_return=?4, updated_at=datetime('now')
         WHERE id=?1 AND user_id=?2",
        params![id, user_id, current_value.to_string(), total_return.to_string()],
    )?;
    Ok(Investment {
        current_value,
        total_return,
        ..inv
    })
}

pub fn delete_investment(conn: &Connection, user_id: i64, id: i64) -> Result<()> {
    investment(conn, user_id, id)?;
    conn.execute(
        "DELETE FROM investments WHERE id=?1 AND user_id=?2",
        params![id, user_id],
    )?;
    Ok(())
}
