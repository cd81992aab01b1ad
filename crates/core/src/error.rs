#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("A {} with this {field} already exists", .entity.to_lowercase())]
    Duplicate { entity: &'static str, field: String },

    #[error("{entity} references a record that does not exist")]
    InvalidReference { entity: &'static str },

    #[error("{entity} is still referenced by other records")]
    StillReferenced { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}
