//! Support request handling and per-submission presentation state

pub mod handler;
pub mod models;
pub mod session;

pub use handler::SupportRequestHandler;
pub use models::{ResponseSource, SupportRequest, SupportResponse, DEFAULT_REPLY, FALLBACK_REPLY};
pub use session::CurhatSession;
