//! Test helpers: build AppState and router for integration tests.
//!
//! The upstream Bot API is a mockito server; staging happens in an isolated
//! TempDir so tests can assert the cleanup invariant directly.

pub mod fixtures;

use std::sync::Arc;

use axum_test::TestServer;
use sonic_api::setup::routes;
use sonic_api::staging::StagingArea;
use sonic_api::state::AppState;
use sonic_core::RelayConfig;
use sonic_telegram::TelegramClient;
use tempfile::TempDir;

pub const TEST_BOT_TOKEN: &str = "123456:TEST";
pub const TEST_CHAT_ID: &str = "-1001234567890";

/// Test application: server, mocked upstream, and owned staging directory.
pub struct TestApp {
    pub server: TestServer,
    pub upstream: mockito::ServerGuard,
    pub staging_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of files currently staged. Zero outside an in-flight upload.
    pub fn staged_file_count(&self) -> usize {
        std::fs::read_dir(self.staging_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    /// The download URL the relay should compose for a given upstream path.
    pub fn expected_download_url(&self, file_path: &str) -> String {
        format!(
            "{}/file/bot{}/{}",
            self.upstream.url(),
            TEST_BOT_TOKEN,
            file_path
        )
    }

    pub fn send_audio_path(&self) -> String {
        format!("/bot{}/sendAudio", TEST_BOT_TOKEN)
    }

    pub fn get_file_path(&self) -> String {
        format!("/bot{}/getFile", TEST_BOT_TOKEN)
    }
}

/// Setup a test app with the default 50 MB ceiling.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_max_size(50 * 1024 * 1024).await
}

/// Setup a test app with a custom upload ceiling (small limits keep the
/// over-limit tests cheap).
pub async fn setup_test_app_with_max_size(max_upload_size_bytes: usize) -> TestApp {
    let upstream = mockito::Server::new_async().await;
    let staging_dir = tempfile::tempdir().expect("Failed to create staging dir");

    let config = RelayConfig {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        bot_token: TEST_BOT_TOKEN.to_string(),
        chat_id: TEST_CHAT_ID.to_string(),
        api_base_url: upstream.url(),
        file_base_url: format!("{}/file", upstream.url()),
        max_upload_size_bytes,
        upload_timeout_secs: 5,
        staging_dir: staging_dir.path().display().to_string(),
    };

    let telegram = TelegramClient::new(&config).expect("Failed to create client");
    let staging = StagingArea::new(staging_dir.path())
        .await
        .expect("Failed to create staging area");
    let state = Arc::new(AppState::new(config.clone(), telegram, staging));

    let router = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        upstream,
        staging_dir,
    }
}
