//! Error types for descriptor resolution.

use thiserror::Error;

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur while resolving a transition descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A descriptor factory produced something other than a props object.
    #[error("transition factory returned {kind}, expected a props object")]
    FactoryResult {
        /// JSON type name of the value the factory actually returned.
        kind: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_result_message() {
        let err = ResolveError::FactoryResult { kind: "number" };
        assert_eq!(
            err.to_string(),
            "transition factory returned number, expected a props object"
        );
    }
}
