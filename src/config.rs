// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};

/// Application environment; controls collaborator behavior such as
/// secure cookies, never core semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(s: &str) -> Self {
        match s {
            "production" => AppEnv::Production,
            _ => AppEnv::Development,
        }
    }
}

/// Startup configuration, read once. No hot reload.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database_url: String,
    pub app_env: AppEnv,
}

impl Config {
    /// Reads `DATABASE_URL` (required) and `APP_ENV` (defaults to
    /// development). A missing `DATABASE_URL` is fatal: the process
    /// must not start without a place to persist data.
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| Error::Configuration("DATABASE_URL is required".into()))?;
        if database_url.trim().is_empty() {
            return Err(Error::Configuration("DATABASE_URL is required".into()));
        }
        let app_env = std::env::var("APP_ENV")
            .map(|s| AppEnv::parse(s.trim()))
            .unwrap_or(AppEnv::Development);
        Ok(Config {
            database_url,
            app_env,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_env_defaults_to_development() {
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
        assert_eq!(AppEnv::parse(""), AppEnv::Development);
    }
}
