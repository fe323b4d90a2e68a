//! Request and response models

use crate::support::{ResponseSource, SupportResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurhatPayload {
    #[serde(default)]
    pub pseudonym: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CurhatReply {
    pub text: String,
    pub source: ResponseSource,
}

impl From<SupportResponse> for CurhatReply {
    fn from(response: SupportResponse) -> Self {
        Self {
            text: response.text,
            source: response.source,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
