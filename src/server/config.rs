use std::{
    fmt,
    net::{IpAddr, SocketAddr},
};

use dioxus_logger::tracing;
use url::Url;

use crate::server::error::config::ConfigError;

const ROBLOX_USERS_API_URL: &str = "https://users.roblox.com";
const ROBLOX_AUTH_API_URL: &str = "https://auth.roblox.com";
const ROBLOX_GROUPS_API_URL: &str = "https://groups.roblox.com";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Credential used to talk to Roblox; also selects the provider strategy.
#[derive(Clone, PartialEq, Eq)]
pub enum RobloxCredential {
    /// `.ROBLOSECURITY` session cookie of the ranking account.
    Cookie(String),
    /// Open Cloud API key with group write permission.
    ApiKey(String),
}

impl RobloxCredential {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cookie(_) => "session cookie",
            Self::ApiKey(_) => "Open Cloud API key",
        }
    }
}

// Never print the secret itself.
impl fmt::Debug for RobloxCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RobloxCredential({}, <redacted>)", self.kind())
    }
}

/// Base URLs of the Roblox web APIs, without trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobloxApiUrls {
    pub users: String,
    pub auth: String,
    pub groups: String,
}

impl Default for RobloxApiUrls {
    fn default() -> Self {
        Self {
            users: ROBLOX_USERS_API_URL.to_string(),
            auth: ROBLOX_AUTH_API_URL.to_string(),
            groups: ROBLOX_GROUPS_API_URL.to_string(),
        }
    }
}

/// Process-wide configuration, read once at startup.
///
/// Ranking settings (`credential`, `group_id`) are optional here: a deployment with
/// missing values still starts and answers every rank request with a configuration error.
/// Use `Config::ranking()` to obtain them in a request.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,

    pub credential: Option<RobloxCredential>,
    pub group_id: Option<u64>,
    pub discord_webhook_url: Option<Url>,

    pub roblox: RobloxApiUrls,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty or whitespace-only values are treated as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration, possibly incomplete for ranking
    /// - `Err(ConfigError::InvalidEnvVar)` - Listen address or an API base URL is unusable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = var("ROBLOX_OPEN_CLOUD_API_KEY");
        let cookie = var("ROBLOX_COOKIE");
        if api_key.is_some() && cookie.is_some() {
            tracing::warn!(
                "Both ROBLOX_OPEN_CLOUD_API_KEY and ROBLOX_COOKIE are set; using the Open Cloud API key."
            );
        }
        let credential = api_key
            .map(RobloxCredential::ApiKey)
            .or(cookie.map(RobloxCredential::Cookie));

        let group_id = var("GROUP_ID").and_then(|value| parse_group_id(&value));

        let discord_webhook_url = var("DISCORD_WEBHOOK_URL").and_then(|value| {
            match Url::parse(&value) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
                _ => {
                    tracing::warn!(
                        "DISCORD_WEBHOOK_URL is not a valid http(s) URL; notifications are disabled."
                    );
                    None
                }
            }
        });

        let host = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let ip = host
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: host.clone(),
                reason: e.to_string(),
            })?;
        let port = match var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let defaults = RobloxApiUrls::default();
        let roblox = RobloxApiUrls {
            users: api_url(&var, "ROBLOX_USERS_API_URL", defaults.users)?,
            auth: api_url(&var, "ROBLOX_AUTH_API_URL", defaults.auth)?,
            groups: api_url(&var, "ROBLOX_GROUPS_API_URL", defaults.groups)?,
        };

        Ok(Self {
            bind_address: SocketAddr::new(ip, port),
            credential,
            group_id,
            discord_webhook_url,
            roblox,
        })
    }

    /// Returns the settings a rank change needs, or why they are unusable.
    ///
    /// Called on every request; the process may outlive a configuration change of the
    /// hosting platform, so completeness is never assumed from startup.
    ///
    /// # Returns
    /// - `Ok((credential, group_id))` - Ranking is possible
    /// - `Err(ConfigError::MissingCredential)` - No cookie or API key configured
    /// - `Err(ConfigError::InvalidGroupId)` - Group id missing or invalid
    pub fn ranking(&self) -> Result<(&RobloxCredential, u64), ConfigError> {
        let credential = self
            .credential
            .as_ref()
            .ok_or(ConfigError::MissingCredential)?;
        let group_id = self.group_id.ok_or(ConfigError::InvalidGroupId)?;

        Ok((credential, group_id))
    }

    /// Logs the startup configuration check.
    pub fn log_summary(&self) {
        match &self.credential {
            Some(credential) => tracing::info!("Using Roblox {}", credential.kind()),
            None => tracing::error!(
                "ERROR: neither ROBLOX_OPEN_CLOUD_API_KEY nor ROBLOX_COOKIE is set; every rank request will fail."
            ),
        }
        match self.group_id {
            Some(group_id) => tracing::info!("Ranking in group {}", group_id),
            None => tracing::error!(
                "ERROR: GROUP_ID is not set or is not a valid number; every rank request will fail."
            ),
        }
        if self.discord_webhook_url.is_none() {
            tracing::warn!(
                "Warning: DISCORD_WEBHOOK_URL is not set. Discord notifications will not be sent."
            );
        }
    }
}

fn parse_group_id(value: &str) -> Option<u64> {
    value.parse::<u64>().ok().filter(|id| *id > 0)
}

fn api_url<F>(var: &F, name: &str, default: String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = var(name) else {
        return Ok(default);
    };

    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })?;

    Ok(value.trim_end_matches('/').to_string())
}
