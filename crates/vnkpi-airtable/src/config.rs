use crate::error::ConfigError;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_BASE_ID: &str = "appccCEUPWDVAXplx";
pub const DEFAULT_TABLE_ID: &str = "tblu2pQj85sT7jY6";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Airtable only ever serves one page of this size per query.
pub const PAGE_SIZE: u32 = 100;

/// Where the KPI table lives and how to authenticate against it.
///
/// Built once at startup (see [`AirtableConfig::from_env()`]) and shared read-only between
/// requests.
///
/// [`AirtableConfig::from_env()`]: ./struct.AirtableConfig.html#method.from_env
#[derive(Clone)]
pub struct AirtableConfig {
    pub api_url: String,
    pub base_id: String,
    /// Table id, or the plain-text table name.
    pub table_id: String,
    pub token: String,
    pub timeout: Duration,
}

impl AirtableConfig {
    /// Settings with the default location; `token` is still required.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            base_id: DEFAULT_BASE_ID.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the settings from the process environment.
    ///
    /// | variable | default |
    /// |---|---|
    /// | `AIRTABLE_API_URL` | `https://api.airtable.com/v0` |
    /// | `AIRTABLE_BASE_ID` | `appccCEUPWDVAXplx` |
    /// | `AIRTABLE_TABLE_ID` | `tblu2pQj85sT7jY6` |
    /// | `AIRTABLE_TOKEN` | required |
    /// | `AIRTABLE_TIMEOUT_SECS` | `20` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env()`](Self::from_env) but reading through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("AIRTABLE_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing("AIRTABLE_TOKEN"))?;

        let setting = |var: &'static str, default: &str| match lookup(var) {
            Some(value) if value.trim().is_empty() => Err(ConfigError::Missing(var)),
            Some(value) => Ok(value.trim().to_string()),
            None => Ok(default.to_string()),
        };

        let timeout = match lookup("AIRTABLE_TIMEOUT_SECS") {
            Some(secs) => secs
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| ConfigError::Invalid {
                    var: "AIRTABLE_TIMEOUT_SECS",
                    reason: e.to_string(),
                })?,
            None => DEFAULT_TIMEOUT,
        };

        let config = Self {
            api_url: setting("AIRTABLE_API_URL", DEFAULT_API_URL)?
                .trim_end_matches('/')
                .to_string(),
            base_id: setting("AIRTABLE_BASE_ID", DEFAULT_BASE_ID)?,
            table_id: setting("AIRTABLE_TABLE_ID", DEFAULT_TABLE_ID)?,
            token,
            timeout,
        };
        debug!("Airtable config loaded: {config:?}");
        Ok(config)
    }
}

// keep the token out of the logs
impl std::fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.token.chars().take(5).collect();
        f.debug_struct("AirtableConfig")
            .field("api_url", &self.api_url)
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .field("token", &format_args!("{prefix}…"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
