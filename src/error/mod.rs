pub(crate) mod internal;

use std::fmt;

/// Error surfaced to users of the crate.
#[derive(Debug)]
pub enum MvcatError {
    /// The screen requires a session and none is present.
    Unauthenticated,
    /// The screen requires the administrator role.
    Forbidden,
    /// The server rejected the supplied credentials.
    Credential { message: String },
    /// The server rejected the submission with per-field messages.
    Validation { errors: Vec<String> },
    /// Remote call failed. Holds the server message when the body had one.
    Api { message: String },
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for MvcatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MvcatError::Unauthenticated => write!(f, "unauthenticated"),
            MvcatError::Forbidden => write!(f, "administrator role required"),
            MvcatError::Credential { message } => write!(f, "{}", message),
            MvcatError::Validation { errors } => write!(f, "{}", errors.join(", ")),
            MvcatError::Api { message } => write!(f, "{}", message),
            MvcatError::Internal(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for MvcatError {}

impl From<internal::Error> for MvcatError {
    fn from(err: internal::Error) -> Self {
        match err.kind() {
            internal::ErrorKind::UnexpectedStatus { status, message } => MvcatError::Api {
                message: message
                    .clone()
                    .unwrap_or_else(|| format!("HTTP error! status: {}", status)),
            },
            _ => MvcatError::Internal(Box::new(err)),
        }
    }
}

impl From<std::io::Error> for MvcatError {
    fn from(err: std::io::Error) -> Self {
        MvcatError::from(internal::Error::from(err))
    }
}

impl From<reqwest::Error> for MvcatError {
    fn from(err: reqwest::Error) -> Self {
        MvcatError::from(internal::Error::from(err))
    }
}

impl From<CatalogError> for MvcatError {
    fn from(err: CatalogError) -> Self {
        MvcatError::Internal(Box::new(err))
    }
}

/// Validation errors for catalog values constructed by the client.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    // Release year earlier than any record the catalog could hold.
    YearTooEarly { year: i32, min: i32 },
    // Comment text is empty or whitespace only.
    EmptyComment,
    EmptyField { field: &'static str },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::YearTooEarly { year, min } => {
                write!(f, "year {} is earlier than {}", year, min)
            }
            CatalogError::EmptyComment => write!(f, "comment text must not be empty"),
            CatalogError::EmptyField { field } => write!(f, "{} must not be empty", field),
        }
    }
}

impl std::error::Error for CatalogError {}
