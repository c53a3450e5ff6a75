use crate::types::DbId;

/// Domain-level errors shared by the repository and HTTP layers.
///
/// Backing-store failures are not modelled here; they travel as
/// `sqlx::Error` and are classified at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::not_found("Debt", 7);
        assert_matches!(err, CoreError::NotFound { entity: "Debt", id: 7 });
        assert_eq!(err.to_string(), "Entity not found: Debt with id 7");
    }
}
