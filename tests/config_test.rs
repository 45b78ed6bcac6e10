//! Configuration loading tests. Kept in their own binary, and in a single
//! test function, so the env-var manipulation cannot race with itself or
//! with the server-spawning tests.

use chatbot_service::config::ChatbotConfig;

#[test]
fn config_load_enforces_required_key_and_applies_defaults() {
    std::env::remove_var("GEMINI_API_KEY");
    std::env::remove_var("GEMINI_MODEL");
    std::env::remove_var("PORT");

    // Missing API key is fatal at load time.
    let err = ChatbotConfig::load().expect_err("load should fail without GEMINI_API_KEY");
    assert!(err.to_string().contains("GEMINI_API_KEY"));

    // With the key present, model and port fall back to defaults.
    std::env::set_var("GEMINI_API_KEY", "test-api-key");
    let config = ChatbotConfig::load().expect("Failed to load config");
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert_eq!(config.server.port, 8000);

    // Explicit values win over defaults.
    std::env::set_var("GEMINI_MODEL", "gemini-2.5-pro");
    std::env::set_var("PORT", "9000");
    let config = ChatbotConfig::load().expect("Failed to load config");
    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(config.server.port, 9000);
}
