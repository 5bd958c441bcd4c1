//! Configuration module
//!
//! Process-wide, read-only configuration for the relay: bot credentials,
//! destination channel, upstream base URLs, and upload limits. Resolved from
//! the environment once at startup and injected into the service, never
//! re-read afterwards.

use std::env;

const SERVER_PORT: u16 = 3000;
const MAX_UPLOAD_SIZE_MB: usize = 50;
const UPLOAD_TIMEOUT_SECS: u64 = 120;
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const TELEGRAM_FILE_BASE: &str = "https://api.telegram.org/file";

/// Relay configuration, fixed at startup.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Bot credential issued by the messaging platform.
    pub bot_token: String,
    /// Destination channel identifier for relayed audio posts.
    pub chat_id: String,
    /// Bot API base URL (overridable so tests can point at a mock server).
    pub api_base_url: String,
    /// File-hosting base URL used to compose download links.
    pub file_base_url: String,
    pub max_upload_size_bytes: usize,
    pub upload_timeout_secs: u64,
    /// Directory where inbound uploads are staged before relaying.
    pub staging_dir: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        Ok(RelayConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            bot_token: env::var("BOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN must be set to relay uploads"))?,
            chat_id: env::var("CHAT_ID")
                .map_err(|_| anyhow::anyhow!("CHAT_ID must be set to relay uploads"))?,
            api_base_url: env::var("TELEGRAM_API_BASE")
                .unwrap_or_else(|_| TELEGRAM_API_BASE.to_string()),
            file_base_url: env::var("TELEGRAM_FILE_BASE")
                .unwrap_or_else(|_| TELEGRAM_FILE_BASE.to_string()),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            upload_timeout_secs: env::var("UPLOAD_TIMEOUT_SECS")
                .unwrap_or_else(|_| UPLOAD_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(UPLOAD_TIMEOUT_SECS),
            staging_dir: env::var("STAGING_DIR").unwrap_or_else(|_| "uploads".to_string()),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.bot_token.trim().is_empty() {
            return Err(anyhow::anyhow!("BOT_TOKEN cannot be empty"));
        }
        if self.chat_id.trim().is_empty() {
            return Err(anyhow::anyhow!("CHAT_ID cannot be empty"));
        }
        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be at least 1"));
        }
        if self.api_base_url.ends_with('/') || self.file_base_url.ends_with('/') {
            return Err(anyhow::anyhow!(
                "TELEGRAM_API_BASE and TELEGRAM_FILE_BASE must not have a trailing slash"
            ));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Bot token truncated for log output. The full credential never appears
    /// in logs because the download URL embeds it.
    pub fn redacted_token(&self) -> String {
        let prefix: String = self.bot_token.chars().take(10).collect();
        format!("{}...", prefix)
    }
}
