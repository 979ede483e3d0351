use axum::http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use crate::config::constants::{ACCESS_COOKIE_NAME, REFRESH_COOKIE_NAME, defaults};
use crate::hashing::HashingSettings;
use crate::tokens::TokenSettings;

/// Origins allowed to make credentialed cross-origin requests.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|o| self.0.iter().any(|allowed| allowed == o))
            .unwrap_or(false)
    }
}

/// Names of the two session cookies.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub access_name: String,
    pub refresh_name: String,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            access_name: ACCESS_COOKIE_NAME.to_string(),
            refresh_name: REFRESH_COOKIE_NAME.to_string(),
        }
    }
}

/// Service configuration, read from the environment (with `.env` support).
///
/// Field names map to SCREAMING_SNAKE_CASE environment variables, e.g.
/// `access_token_secret` comes from `ACCESS_TOKEN_SECRET`.
#[derive(Clone, Deserialize)]
pub struct SessionServiceSettings {
    pub access_token_secret: Secret<String>,
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl: i64,
    pub refresh_token_secret: Secret<String>,
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl: i64,
    #[serde(default)]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(default)]
    pub hash_memory_kib: Option<u32>,
    #[serde(default)]
    pub hash_iterations: Option<u32>,
    #[serde(default)]
    pub hash_parallelism: Option<u32>,
}

fn default_access_ttl() -> i64 {
    defaults::ACCESS_TOKEN_TTL_SECONDS
}

fn default_refresh_ttl() -> i64 {
    defaults::REFRESH_TOKEN_TTL_SECONDS
}

impl SessionServiceSettings {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins"),
            )
            .build()?
            .try_deserialize()
    }

    pub fn token_settings(&self) -> TokenSettings {
        TokenSettings {
            access_secret: self.access_token_secret.clone(),
            access_ttl_seconds: self.access_token_ttl,
            refresh_secret: self.refresh_token_secret.clone(),
            refresh_ttl_seconds: self.refresh_token_ttl,
        }
    }

    pub fn hashing_settings(&self) -> HashingSettings {
        let base = HashingSettings::default();
        HashingSettings {
            memory_kib: self.hash_memory_kib.unwrap_or(base.memory_kib),
            iterations: self.hash_iterations.unwrap_or(base.iterations),
            parallelism: self.hash_parallelism.unwrap_or(base.parallelism),
        }
    }

    pub fn cookie_settings(&self) -> CookieSettings {
        CookieSettings::default()
    }

    pub fn allowed_origins(&self) -> Option<AllowedOrigins> {
        self.allowed_origins.clone().map(AllowedOrigins::new)
    }
}
