//! # Core Types
//!
//! Error taxonomy and the boundary traits the conversation controller
//! depends on. Nothing in this module knows about egui or reqwest.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{
    ChatTransport, MessageMeta, NoticeKind, ProviderStatus, RenderSink, RenderedMessage,
};
