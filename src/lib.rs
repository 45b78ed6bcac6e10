//! chatbot-service: HTTP service wrapping Gemini for breast-cancer guidance.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;

pub use error::AppError;
