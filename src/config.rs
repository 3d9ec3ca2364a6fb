/// Adapter configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub sqlx_logging: bool,
    pub log_level: String,
}

impl Config {
    /// Configuration for an explicit connection string, with statement logging off.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            sqlx_logging: false,
            log_level: "info".to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required: `DATABASE_URL`
    /// Optional with defaults: `DATABASE_SQLX_LOGGING` (`false`), `LOG_LEVEL` (`info`)
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is not set, or if `DATABASE_SQLX_LOGGING`
    /// is not a boolean.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let sqlx_logging = match lookup("DATABASE_SQLX_LOGGING")
            .unwrap_or_else(|| "false".to_string())
            .to_lowercase()
            .as_str()
        {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" | "" => false,
            other => {
                return Err(anyhow::anyhow!(
                    "DATABASE_SQLX_LOGGING must be a boolean, got {other:?}"
                ));
            }
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            database_url,
            sqlx_logging,
            log_level,
        })
    }
}
