use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown shape `{name}` (expected one of: {expected})")]
    UnknownShape { name: String, expected: String },
}
