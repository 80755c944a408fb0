use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::store::StoreError;
use crate::validation::{Field, FieldErrors};

/// JSON body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "error": "Invalid leave application",
    "details": { "endTime": "End time must be at least 30 minutes after start time" }
}))]
pub struct ErrorResponse {
    #[schema(example = "Missing required fields")]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object, nullable = true)]
    pub details: Option<Value>,
}

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Missing required fields")]
    MissingFields(Vec<Field>),
    #[display(fmt = "Invalid leave application")]
    Invalid(FieldErrors),
    #[display(fmt = "{}", _0)]
    BadPayload(String),
    #[display(fmt = "Internal Server Error")]
    Internal,
}

impl ApiError {
    fn details(&self) -> Option<Value> {
        match self {
            ApiError::MissingFields(fields) => serde_json::to_value(fields).ok(),
            ApiError::Invalid(errors) => serde_json::to_value(errors).ok(),
            ApiError::BadPayload(_) | ApiError::Internal => None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_) | ApiError::Invalid(_) | ApiError::BadPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            details: self.details(),
        })
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Leave store operation failed");
        ApiError::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_map_to_bad_request_with_names() {
        let err = ApiError::MissingFields(vec![Field::Name, Field::EndDate]);

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required fields");
        assert_eq!(err.details(), Some(serde_json::json!(["name", "endDate"])));
    }

    #[test]
    fn store_failures_hide_their_cause() {
        let err = ApiError::from(StoreError::Unavailable("lock poisoned".to_string()));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal Server Error");
        assert_eq!(err.details(), None);
    }
}
