//! Test helper module for division-service integration tests.

#![allow(dead_code)]

use division_service::config::DivisionConfig;
use division_service::services::init_metrics;
use division_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Once;

static INIT_METRICS: Once = Once::new();

/// Install the Prometheus recorder once per test binary.
pub fn ensure_metrics_initialized() {
    INIT_METRICS.call_once(|| {
        init_metrics().expect("Failed to install metrics recorder");
    });
}

/// Configuration bound to a random loopback port.
pub fn test_config() -> DivisionConfig {
    DivisionConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        ..DivisionConfig::default()
    }
}

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
}

impl TestApp {
    /// Spawn a new test application on a random port.
    pub async fn spawn() -> Self {
        ensure_metrics_initialized();

        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");

        let http_port = app.port();
        let http_address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            http_address,
            http_port,
        }
    }

    /// Issue `GET /` with the given raw query string.
    pub async fn divide(&self, query: &str) -> reqwest::Response {
        let url = if query.is_empty() {
            format!("{}/", self.http_address)
        } else {
            format!("{}/?{}", self.http_address, query)
        };

        reqwest::Client::new()
            .get(&url)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Fetch the Prometheus exposition text.
    pub async fn metrics(&self) -> String {
        reqwest::Client::new()
            .get(&format!("{}/metrics", self.http_address))
            .send()
            .await
            .expect("Failed to execute request")
            .text()
            .await
            .expect("Failed to get response body")
    }
}
