use crate::errors::{AppError, AppResult};
use uuid::Uuid;

/// Helper to parse UUID from GraphQL ID string
pub fn parse_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError("Invalid UUID format".to_string()))
}

/// Like `parse_id`, but treats a missing or blank value as absent.
pub fn parse_optional_id(id: Option<&str>) -> AppResult<Option<Uuid>> {
    match id.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_id(raw).map(Some),
    }
}
