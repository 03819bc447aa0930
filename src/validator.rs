use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

/// Flattens validation errors into one stable, human-readable line.
/// Field order is sorted because the underlying map iterates randomly.
fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{} is invalid", field),
            })
        })
        .collect();

    messages.sort();
    messages.join(", ")
}

/// JSON extractor that runs the payload's validation rules after
/// deserializing. Malformed bodies are a 400; well-formed bodies that
/// fail validation are a 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let message = match &rejection {
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing 'Content-Type: application/json' header".to_string()
                    }
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        rejection.body_text()
                    }
                    _ => "Invalid request body".to_string(),
                };

                AppError::bad_request(anyhow!(message))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!(format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}
