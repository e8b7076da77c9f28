/// Global Tokio runtime for async HTTP operations
///
/// egui/eframe drives a synchronous frame loop, but reqwest requires a tokio
/// runtime. This static runtime bridges the two:
/// 1. UI handlers spawn controller operations onto it
/// 2. Results come back to the frame loop through the app event channel
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     controller.send(&text, use_llm).await
/// });
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
