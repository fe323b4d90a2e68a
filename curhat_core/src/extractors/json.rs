//! JSON extractor whose rejections use the same `{error, status}` body as `AppError`

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected JSON body");
                Err(ApiJsonRejection::from(rejection))
            }
        }
    }
}

#[derive(Debug)]
pub enum ApiJsonRejection {
    MissingContentType,
    InvalidSyntax,
    InvalidData(String),
    Unreadable,
}

impl From<JsonRejection> for ApiJsonRejection {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiJsonRejection::MissingContentType,
            JsonRejection::JsonSyntaxError(_) => ApiJsonRejection::InvalidSyntax,
            JsonRejection::JsonDataError(err) => ApiJsonRejection::InvalidData(err.body_text()),
            _ => ApiJsonRejection::Unreadable,
        }
    }
}

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiJsonRejection::MissingContentType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected request with `Content-Type: application/json`".to_string(),
            ),
            ApiJsonRejection::InvalidSyntax => {
                (StatusCode::BAD_REQUEST, "Invalid JSON format".to_string())
            }
            ApiJsonRejection::InvalidData(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiJsonRejection::Unreadable => (
                StatusCode::BAD_REQUEST,
                "Failed to read JSON request".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl std::fmt::Display for ApiJsonRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiJsonRejection::MissingContentType => write!(f, "Missing JSON content type"),
            ApiJsonRejection::InvalidSyntax => write!(f, "Invalid JSON syntax"),
            ApiJsonRejection::InvalidData(msg) => write!(f, "Invalid JSON data: {}", msg),
            ApiJsonRejection::Unreadable => write!(f, "Unreadable JSON body"),
        }
    }
}

impl std::error::Error for ApiJsonRejection {}
