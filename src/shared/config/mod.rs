//! Application configuration module
//!
//! Provides configuration types for the application. Values come from the
//! environment (see [`AppConfig::from_env`]) or from the builder in tests.

use thiserror::Error;

/// Upper bound of `match_limit`; a daily match list never holds more
pub const MAX_MATCH_LIMIT: usize = 10;

/// Upper bound of `token_ttl_minutes` (one year)
pub const MAX_TOKEN_TTL_MINUTES: u64 = 60 * 24 * 365;

/// SMTP relay settings for outgoing mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// Postgres URL; the in-memory store is used when absent
    pub database_url: Option<String>,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// Session token lifetime
    pub token_ttl_minutes: u64,
    /// Prefix of the link sent in verification emails
    pub verification_base_url: String,
    /// Sender address of outgoing mail
    pub mail_from: String,
    /// SMTP relay; outgoing mail is only logged when absent
    pub smtp: Option<SmtpConfig>,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Maximum number of daily matches
    pub match_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            database_url: None,
            jwt_secret: "change-me".to_string(),
            token_ttl_minutes: 30,
            verification_base_url: "http://localhost:3000".to_string(),
            mail_from: "no-reply@mulberry.app".to_string(),
            smtp: None,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            match_limit: MAX_MATCH_LIMIT,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// | variable | default |
    /// |---|---|
    /// | `SERVER_PORT` | 3000 |
    /// | `DATABASE_URL` | unset (in-memory store) |
    /// | `JWT_SECRET` | required |
    /// | `TOKEN_TTL_MINUTES` | 30 |
    /// | `VERIFICATION_BASE_URL` | `http://localhost:3000` |
    /// | `MAIL_FROM` | `no-reply@mulberry.app` |
    /// | `SMTP_HOST`, `SMTP_USERNAME`, `SMTP_PASSWORD` | unset (log mail only) |
    /// | `BCRYPT_COST` | bcrypt default |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();

        if let Some(port) = env_var("SERVER_PORT") {
            builder = builder.server_port(parse_number("SERVER_PORT", &port)?);
        }
        if let Some(url) = env_var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        builder = builder.jwt_secret(env_var("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?);
        if let Some(ttl) = env_var("TOKEN_TTL_MINUTES") {
            builder = builder.token_ttl_minutes(parse_number("TOKEN_TTL_MINUTES", &ttl)?);
        }
        if let Some(url) = env_var("VERIFICATION_BASE_URL") {
            builder = builder.verification_base_url(url);
        }
        if let Some(from) = env_var("MAIL_FROM") {
            builder = builder.mail_from(from);
        }
        if let Some(host) = env_var("SMTP_HOST") {
            builder = builder.smtp(SmtpConfig {
                host,
                username: env_var("SMTP_USERNAME").ok_or(ConfigError::MissingValue("SMTP_USERNAME"))?,
                password: env_var("SMTP_PASSWORD").ok_or(ConfigError::MissingValue("SMTP_PASSWORD"))?,
            });
        }
        if let Some(cost) = env_var("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_number("BCRYPT_COST", &cost)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&self.token_ttl_minutes) {
            return Err(ConfigError::InvalidNumber {
                name: "TOKEN_TTL_MINUTES",
                value: self.token_ttl_minutes.to_string(),
            });
        }
        if !(1..=MAX_MATCH_LIMIT).contains(&self.match_limit) {
            return Err(ConfigError::InvalidNumber {
                name: "MATCH_LIMIT",
                value: self.match_limit.to_string(),
            });
        }
        if !(self.verification_base_url.starts_with("http://")
            || self.verification_base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidUrl(self.verification_base_url.clone()));
        }
        if let Some(url) = &self.database_url {
            if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidNumber {
                name: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: Option<AppConfig>,
}

impl AppConfigBuilder {
    fn config(&mut self) -> &mut AppConfig {
        self.config.get_or_insert_with(AppConfig::default)
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.config().server_port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config().database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config().jwt_secret = secret.into();
        self
    }

    pub fn token_ttl_minutes(mut self, minutes: u64) -> Self {
        self.config().token_ttl_minutes = minutes;
        self
    }

    pub fn verification_base_url(mut self, url: impl Into<String>) -> Self {
        self.config().verification_base_url = url.into();
        self
    }

    pub fn mail_from(mut self, from: impl Into<String>) -> Self {
        self.config().mail_from = from.into();
        self
    }

    pub fn smtp(mut self, smtp: SmtpConfig) -> Self {
        self.config().smtp = Some(smtp);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config().bcrypt_cost = cost;
        self
    }

    pub fn match_limit(mut self, limit: usize) -> Self {
        self.config().match_limit = limit;
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<AppConfig, ConfigError> {
        let config = self.config().clone();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}
