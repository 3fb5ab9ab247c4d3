use std::fmt;

/// Typed dispatch failures surfaced verbatim to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Required runtime context (app identity or UI surface) is missing.
    Unavailable(String),
    /// The command payload is malformed or incomplete.
    InvalidArguments(String),
    /// The command name is not part of the surface.
    NotImplemented(String),
}

impl DispatchError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "UNAVAILABLE",
            Self::InvalidArguments(_) => "INVALID_ARGUMENTS",
            Self::NotImplemented(_) => "NOT_IMPLEMENTED",
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "unavailable: {reason}"),
            Self::InvalidArguments(detail) => write!(f, "invalid arguments: {detail}"),
            Self::NotImplemented(method) => write!(f, "method '{method}' is not implemented"),
        }
    }
}

impl std::error::Error for DispatchError {}

pub type DispatchResult = Result<serde_json::Value, DispatchError>;
