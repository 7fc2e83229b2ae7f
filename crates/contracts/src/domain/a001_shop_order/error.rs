use thiserror::Error;

/// Why a backend order row was rejected at the boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderLineError {
    #[error("order line is not a JSON object")]
    NotAnObject,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("unknown order status `{0}`")]
    UnknownStatus(String),
    #[error("invalid createdAt `{0}`")]
    InvalidTimestamp(String),
}

impl OrderLineError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        OrderLineError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
