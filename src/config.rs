//! Environment-driven settings. A `.env` file, if present, is loaded by the
//! binary before these are read.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub bind: String,
    pub port: u16,
}

impl Settings {
    /// Read settings from the process environment, with defaults suitable
    /// for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database: DatabaseSettings {
                host: var_or("DB_HOST", "localhost"),
                port: parse_or("DB_PORT", 5432)?,
                user: var_or("DB_USER", "postgres"),
                password: var_or("DB_PASSWORD", ""),
                name: var_or("DB_NAME", "bookshelf"),
            },
            http: HttpSettings {
                bind: var_or("BIND_ADDR", "0.0.0.0"),
                port: parse_or("PORT", 8080)?,
            },
        })
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if !self.password.is_empty() {
            opts = opts.password(&self.password);
        }
        opts
    }

    /// Options against the maintenance database, for CREATE DATABASE.
    pub fn admin_connect_options(&self) -> PgConnectOptions {
        self.connect_options().database("postgres")
    }
}

impl HttpSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var: name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
