//! Query-string rejection mapping.

use axum::extract::rejection::QueryRejection;

use rentwise_core::error::AppError;

/// Turns an axum query rejection into a validation error, naming the
/// offending field when serde reports one (e.g. a repeated key).
pub fn query_rejection(rejection: QueryRejection) -> AppError {
    let text = rejection.body_text();
    match field_in(&text) {
        Some(field) => AppError::invalid_field(field, text.clone()),
        None => AppError::validation(text),
    }
}

/// First backtick-quoted name in a serde error message.
fn field_in(text: &str) -> Option<&str> {
    let start = text.find('`')? + 1;
    let len = text[start..].find('`')?;
    Some(&text[start..start + len]).filter(|f| !f.is_empty())
}
