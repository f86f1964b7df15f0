//! Request and response bodies

pub mod admin;
pub mod auth;
pub mod events;

use validator::Validate;

use crate::handlers::ApiError;

/// Run the `validator` rules of a request body
///
/// Reports the message of the first failing rule (ordered by field name so
/// the answer is stable).
pub fn validate_request<T: Validate>(request: &T) -> Result<(), ApiError> {
    let Err(errors) = request.validate() else {
        return Ok(());
    };

    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let message = fields
        .first()
        .and_then(|(field, errors)| {
            errors.first().map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}.", field))
            })
        })
        .unwrap_or_else(|| "Invalid request data.".to_string());

    Err(ApiError::bad_request(message))
}
