//! Integration tests for the welcome and health endpoints.
//!
//! Run with: cargo test --test health_check

use chatbot_service::config::ChatbotConfig;
use chatbot_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    std::env::set_var("PORT", "0"); // Random port
    std::env::set_var("GEMINI_API_KEY", "test-api-key");
    std::env::set_var("GEMINI_MODEL", "gemini-2.0-flash");

    let config = ChatbotConfig::load().expect("Failed to load config");
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["message"],
        "Welcome to the Breast Cancer Classifier AI Chatbot"
    );
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "chatbot-service");
}

#[tokio::test]
async fn cors_preflight_is_permitted_for_any_origin() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("http://localhost:{}/ask_gemini/", port),
        )
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
