//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the support-chat widget and
//! the FAQ/RAG backend. All DTOs use JSON serialization via `serde` for API
//! communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::chat`]**: Chat, history, export, and provider-status DTOs
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Response-only fields tolerate absence via `#[serde(default)]`
//!
//! ## Usage in the Widget
//!
//! ```rust,no_run
//! use shared::dto::chat::{ChatRequest, ChatReply};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ChatRequest {
//!     message: "Bonjour".to_string(),
//!     user_id: "user_k3x9q2mwd".to_string(),
//!     use_llm: false,
//! };
//!
//! let reply: ChatReply = reqwest::Client::new()
//!     .post("http://localhost:8000/chat")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
