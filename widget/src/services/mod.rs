//! # External Services
//!
//! Integrations with everything outside the process:
//!
//! - [`api`]: HTTP client for the chatbot backend

pub mod api;
