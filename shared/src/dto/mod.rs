//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the chatbot backend over the REST API.
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Tolerant parsing**: optional response fields carry `#[serde(default)]`
//!   so older backend versions that omit them still parse
//!
//! ## Example Request/Response Pair
//!
//! ```text
//! POST /chat
//! Content-Type: application/json
//!
//! {
//!   "message": "Comment réinitialiser mon mot de passe ?",
//!   "user_id": "user_k3x9q2mwd",
//!   "use_llm": true
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "response": "Cliquez sur « Mot de passe oublié » depuis la page de connexion.",
//!   "confidence": 0.92,
//!   "provider": "groq",
//!   "retrieval_only": true
//! }
//! ```

pub mod chat;

pub use chat::*;
