//! Validated JSON extractor.
//!
//! Validation lives here, at the boundary; the store and services accept
//! any structurally valid record.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use common::AppError;

/// JSON body that has passed its `validator` rules.
///
/// Undecodable bodies are rejected as `BAD_REQUEST`; decodable bodies that
/// break a rule are rejected as `VALIDATION_ERROR` listing every failure.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        payload
            .validate()
            .map_err(|errors| AppError::validation(describe_failures(&errors)))?;

        Ok(ValidatedJson(payload))
    }
}

/// Join every field failure into one message, sorted by field name.
fn describe_failures(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| match &failure.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Validate)]
    struct Listing {
        #[validate(length(max = 3, message = "Name is too long"))]
        name: String,
        #[validate(range(min = 0))]
        price: i64,
    }

    #[test]
    fn every_failing_field_is_reported() {
        let listing = Listing {
            name: "bread".to_string(),
            price: -1,
        };

        let errors = listing.validate().unwrap_err();

        assert_eq!(describe_failures(&errors), "Name is too long, price is invalid");
    }

    #[test]
    fn single_failure_is_reported_alone() {
        let listing = Listing {
            name: "tea".to_string(),
            price: -5,
        };

        let errors = listing.validate().unwrap_err();

        assert_eq!(describe_failures(&errors), "price is invalid");
    }
}
