use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use nutriscope_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UnProcessableEntity(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::UnProcessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_UNPROCESSABLE_ENTITY")
            }
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_BAD_GATEWAY"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_SERVICE_UNAVAILABLE")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::MissingColumn(_) | CoreError::InvalidRange { .. } | CoreError::Invalid => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::ExternalServiceError(_) | CoreError::MalformedCompletion { .. } => {
                ApiError::BadGateway(error.to_string())
            }
            CoreError::MissingCredential => ApiError::ServiceUnavailable(error.to_string()),
            CoreError::InvalidRecord(_)
            | CoreError::DatasetError(_)
            | CoreError::InternalServerError => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.status_and_code();
        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::UnProcessableEntity(e.body_text()))?;
        value
            .validate()
            .map_err(|e| ApiError::UnProcessableEntity(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_statuses() {
        let cases = [
            (
                CoreError::InvalidRange {
                    low: 2.0,
                    high: 1.0,
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::MalformedCompletion {
                    raw: "{oops".to_string(),
                    message: "EOF".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::MissingCredential, StatusCode::SERVICE_UNAVAILABLE),
            (
                CoreError::DatasetError("bad".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core_error, status) in cases {
            assert_eq!(ApiError::from(core_error).status_and_code().0, status);
        }
    }

    #[test]
    fn test_malformed_completion_message_keeps_raw_text() {
        let error = ApiError::from(CoreError::MalformedCompletion {
            raw: "{\"dish\": ".to_string(),
            message: "EOF while parsing".to_string(),
        });
        assert!(error.to_string().contains("{\"dish\": "));
    }
}
