//! # Backend API Services
//!
//! HTTP communication with the chatbot backend, organized by endpoint group:
//!
//! - [`client`]: the [`ApiClient`] with connection pooling and timeout
//! - [`chat`]: chat send and provider status endpoints
//! - [`history`]: history retrieval, export, and deletion endpoints
//!
//! All endpoint functions take `&ApiClient` and return
//! `Result<T, AppError>`, mapping transport failures to
//! [`AppError::Network`] and non-2xx replies to [`AppError::Server`] with
//! the backend's `detail` field extracted when the body parses.

pub mod chat;
pub mod client;
pub mod history;

pub use client::ApiClient;

use crate::core::error::AppError;
use shared::dto::chat::ErrorDetail;

/// Build the [`AppError::Server`] for a non-2xx response.
///
/// Uses the backend's `detail` wording when the error body is parseable
/// JSON; an unparseable body degrades to a generic message annotated with
/// the HTTP status instead of propagating a parse failure.
pub(crate) async fn server_error(response: reqwest::Response) -> AppError {
    let status = response.status().as_u16();
    let detail = match response.json::<ErrorDetail>().await {
        Ok(body) => body.detail,
        Err(_) => format!("Erreur inconnue (HTTP {status})"),
    };
    AppError::Server {
        status: Some(status),
        detail,
    }
}
