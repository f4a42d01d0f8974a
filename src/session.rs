// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Server-side session store. Sessions are keyed by an opaque id and
//! carry a 7-day sliding expiry: resolving a live session pushes its
//! expiry forward, resolving a dead one deletes it. Cookie transport
//! (httpOnly, secure outside development) is the HTTP collaborator's
//! concern.

use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{Error, Result};

pub const SESSION_TTL_DAYS: i64 = 7;

fn expiry_from(now: DateTime<Utc>) -> String {
    (now + Duration::days(SESSION_TTL_DAYS)).to_rfc3339()
}

/// Creates a session for the user and returns its opaque id.
pub fn create(conn: &Connection, user_id: i64) -> Result<String> {
    create_at(conn, user_id, Utc::now())
}

pub fn create_at(conn: &Connection, user_id: i64, now: DateTime<Utc>) -> Result<String> {
    let id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO sessions(id, user_id, expires_at) VALUES (?1, ?2, ?3)",
        params![id, user_id, expiry_from(now)],
    )?;
    Ok(id)
}

/// Resolves a session id to the owning user id, sliding the expiry
/// forward. Unknown and expired ids both fail the same way; expired
/// rows are removed on the spot.
pub fn resolve(conn: &Connection, session_id: &str) -> Result<i64> {
    resolve_at(conn, session_id, Utc::now())
}

pub fn resolve_at(conn: &Connection, session_id: &str, now: DateTime<Utc>) -> Result<i64> {
    let row: Option<(i64, String)> = conn
        .query_row(
            "SELECT user_id, expires_at FROM sessions WHERE id=?1",
            params![session_id],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .optional()?;
    let Some((user_id, expires_at)) = row else {
        return Err(Error::InvalidSession);
    };
    let expires = DateTime::parse_from_rfc3339(&expires_at)
        .map_err(|_| Error::InvalidSession)?
        .with_timezone(&Utc);
    if expires <= now {
        conn.execute("DELETE FROM sessions WHERE id=?1", params![session_id])?;
        return Err(Error::InvalidSession);
    }
    conn.execute(
        "UPDATE sessions SET expires_at=?2 WHERE id=?1",
        params![session_id, expiry_from(now)],
    )?;
    Ok(user_id)
}

pub fn revoke(conn: &Connection, session_id: &str) -> Result<()> {
    conn.execute("DELETE FROM sessions WHERE id=?1", params![session_id])?;
    Ok(())
}

/// Removes every expired session; returns how many were dropped.
pub fn purge_expired(conn: &Connection, now: DateTime<Utc>) -> Result<usize> {
    let n = conn.execute(
        "DELETE FROM sessions WHERE expires_at <= ?1",
        params![now.to_rfc3339()],
    )?;
    Ok(n)
}
