//! Error types for drawing-element operations.

use thiserror::Error;

/// Result type for drawing-element operations.
pub type Result<T> = std::result::Result<T, DrawmlError>;

/// Error types for drawing-element operations.
#[derive(Error, Debug)]
pub enum DrawmlError {
    /// Attribute text or value outside a simple type's value space
    #[error("invalid value for {expected}: {got:?}")]
    InvalidValue {
        expected: &'static str,
        got: String,
    },

    /// Required attribute absent from its element
    #[error("required attribute '{0}' is missing")]
    MissingAttribute(String),

    /// An exactly-one child element is missing or duplicated
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// Collection index out of bounds
    #[error("shape index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for DrawmlError {
    fn from(err: quick_xml::Error) -> Self {
        DrawmlError::Xml(err.to_string())
    }
}
