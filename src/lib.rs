// Core modules
pub mod config;
pub mod services;
pub mod state;
pub mod types;
pub mod web;

// Re-exports
pub use services::completion::CompletionBackend;
pub use services::template::TemplateEngine;
pub use state::AppState;
