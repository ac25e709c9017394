//! Error values returned by graph construction and route search.

/// Failures a caller is expected to branch on.
///
/// `NoPathFound` is an ordinary outcome for disconnected maps; callers decide
/// whether it is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown location: {name}")]
    UnknownLocation { name: String },
    #[error("no path found from {from} to {to}")]
    NoPathFound { from: String, to: String },
    #[error("invalid map description: {reason}")]
    InvalidDescription { reason: String },
}

impl RouteError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidDescription {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
