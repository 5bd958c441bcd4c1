//! Application state.
//!
//! All members are read-only after startup: configuration, the upstream Bot
//! API client, and the staging area for inbound uploads. Handlers share it
//! via `Arc`; no locks are needed because nothing here is mutable.

use sonic_core::RelayConfig;
use sonic_telegram::TelegramClient;

use crate::staging::StagingArea;

pub struct AppState {
    pub config: RelayConfig,
    pub telegram: TelegramClient,
    pub staging: StagingArea,
}

impl AppState {
    pub fn new(config: RelayConfig, telegram: TelegramClient, staging: StagingArea) -> Self {
        Self {
            config,
            telegram,
            staging,
        }
    }
}
