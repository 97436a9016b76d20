//! Request Validation
//!
//! [`ValidatedJson`] deserializes a JSON body and runs its
//! [`validator::Validate`] rules before the handler body ever executes.
//! Field-constraint failures answer with a structured 400 listing every
//! failing field; malformed bodies answer with the standard error envelope.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use shared::AppError;
use validator::{Validate, ValidationErrors};

/// JSON extractor that validates the payload after deserializing.
///
/// ```ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<DepartmentCreate>) { ... }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value
            .validate()
            .map_err(ValidatedJsonRejection::Validation)?;
        Ok(ValidatedJson(value))
    }
}

/// Rejection for [`ValidatedJson`]
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// Body was not valid JSON for the target type
    Json(JsonRejection),
    /// Body parsed but failed field validation
    Validation(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Json(rejection) => {
                AppError::invalid_request(rejection.body_text()).into_response()
            }
            Self::Validation(errors) => {
                let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
                for (field, failures) in errors.field_errors() {
                    let reasons = failures
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    field_errors.insert(field.to_string(), reasons);
                }

                let body = serde_json::json!({
                    "statusCode": 400,
                    "message": "Validation failed",
                    "errors": field_errors,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}
