//! Form extractor that rejects with an `AppError` body instead of plain text

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

pub struct ApiForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(ApiForm(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected form body");
                Err(AppError::from(rejection))
            }
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        match rejection {
            FormRejection::InvalidFormContentType(_) => AppError::UnsupportedMediaType(
                "Expected request with `Content-Type: application/x-www-form-urlencoded`"
                    .to_string(),
            ),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}
