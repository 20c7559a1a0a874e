use thiserror::Error;

#[derive(Error, Debug)]
pub enum DccError {
    /// The input is not well-formed XML.
    #[error("XML parsing error: {0}")]
    Parse(String),

    /// A required structural block of the DCC schema is absent.
    #[error("Invalid DCC XML: Missing {0}")]
    Schema(&'static str),

    /// The metadata template is not valid JSON (before or after substitution).
    #[error("Metadata template error: {0}")]
    Template(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DccError>;
