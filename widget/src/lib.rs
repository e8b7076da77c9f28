//! # Support Chat Widget - Library Root
//!
//! A native desktop chat widget for a customer-support FAQ/RAG chatbot
//! backend. This library crate contains all modules used by the binary
//! crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                widget (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui/eframe   - Immediate-mode GUI + native window    │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────┬───────────────────────────────┘
//!                          │ HTTP (JSON)
//!                          ▼
//!               ┌─────────────────────┐
//!               │  Chatbot backend    │
//!               │  (opaque service)   │
//!               └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **[`controller`]**: the conversation controller — session identity,
//!   single-flight send guard, and user-triggered retry. Depends only on
//!   the [`core`] traits, so it is unit-testable without HTTP or a GUI.
//! - **[`core`]**: error taxonomy ([`AppError`]) and the boundary traits
//!   ([`core::ChatTransport`], [`core::RenderSink`]).
//! - **[`services`]**: reqwest implementation of the transport against the
//!   backend endpoints.
//! - **[`app`]**: state, event channel, and the eframe shell wiring the
//!   controller to the GUI.
//! - **[`ui`]**: screens, theme, and toast notifications.
//! - **[`utils`]**: input validation, display helpers, tokio runtime.
//!
//! ## Event-Driven Architecture
//!
//! The frame loop never blocks on the network. User actions spawn
//! controller operations onto a global Tokio runtime; every UI effect comes
//! back through an unbounded `async_channel` as an [`app::AppEvent`] and is
//! applied by `App::on_tick` at the start of the next frame.

pub mod app;
pub mod controller;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{App, AppEvent, AppState, Screen, WidgetShell};
pub use crate::controller::{ConversationController, ConversationStatus};
pub use crate::core::{AppError, Result};
