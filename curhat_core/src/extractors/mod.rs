pub mod form;
pub mod json;

pub use form::ApiForm;
pub use json::{ApiJson, ApiJsonRejection};
