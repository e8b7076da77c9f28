//! # UI Rendering
//!
//! - [`screens`]: screen-specific rendering (chat, history)
//! - [`widgets`]: reusable components (toast notifications)
//! - [`theme`]: color palette and egui visuals

pub mod screens;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
