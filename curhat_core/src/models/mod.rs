//! Request and response models for the HTTP layer

pub mod request;

pub use request::{ApiResponse, CurhatPayload, CurhatReply};
