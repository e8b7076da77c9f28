//! Reusable UI components.

pub mod notifications;

pub use notifications::NotificationManager;
