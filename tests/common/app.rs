//! Test application
//!
//! The full router over the seeded in-memory store, served by axum-test.

use std::sync::Arc;

use axum_test::TestServer;
use jazz_chronicle::backend::repository::MemoryRepository;
use jazz_chronicle::backend::server::create_app_with;
use jazz_chronicle::shared::config::{AppConfig, MIN_PASSWORD_COST};

use super::fixtures::seeded_repository;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<MemoryRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_repository(seeded_repository())
    }

    pub fn with_repository(repository: MemoryRepository) -> Self {
        let config = AppConfig::builder()
            .jwt_secret(TEST_SECRET)
            .password_cost(MIN_PASSWORD_COST)
            .build()
            .expect("test config");

        let repository = Arc::new(repository);
        let app = create_app_with(&config, repository.clone()).expect("test app");
        let server = TestServer::new(app).expect("test server");

        Self { server, repository }
    }
}
