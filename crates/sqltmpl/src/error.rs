//! Error types for sqltmpl

use thiserror::Error;

/// Result type alias for the internal template stages.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Result type alias for [`build`](crate::build) and [`QueryBuilder`](crate::QueryBuilder).
pub type BuildResult<T> = Result<T, BuildError>;

/// Failures raised while resolving a template.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    /// A value of a type the placeholder (or the value formatter) cannot render.
    #[error("Unsupported value type for {placeholder}: {found}")]
    UnsupportedValueType {
        placeholder: &'static str,
        found: &'static str,
    },

    /// Scanned token text that is none of `?`, `?#`, `?d`, `?f`, `?a`.
    #[error("Unknown placeholder kind: {0:?}")]
    UnknownPlaceholderKind(String),

    /// Argument list does not line up with the template tokens.
    #[error("Malformed arguments: {0}")]
    MalformedArguments(String),
}

impl TemplateError {
    /// Create an unsupported value type error
    pub fn unsupported(placeholder: &'static str, found: &'static str) -> Self {
        Self::UnsupportedValueType { placeholder, found }
    }

    /// Create a malformed arguments error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedArguments(message.into())
    }

    /// Check if this is an unsupported value type error
    pub fn is_unsupported_value_type(&self) -> bool {
        matches!(self, Self::UnsupportedValueType { .. })
    }

    /// Check if this is an unknown placeholder kind error
    pub fn is_unknown_placeholder_kind(&self) -> bool {
        matches!(self, Self::UnknownPlaceholderKind(_))
    }

    /// Check if this is a malformed arguments error
    pub fn is_malformed_arguments(&self) -> bool {
        matches!(self, Self::MalformedArguments(_))
    }
}

/// The single failure surfaced by a build.
///
/// Every stage error is flattened into this type; its message is the message of
/// the stage that failed. A failed build never yields a partial statement.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(transparent)]
pub struct BuildError(#[from] TemplateError);

impl BuildError {
    /// The stage error this build failed with.
    pub fn kind(&self) -> &TemplateError {
        &self.0
    }

    /// Unwrap into the stage error.
    pub fn into_inner(self) -> TemplateError {
        self.0
    }

    /// Check if the argument list did not match the template.
    pub fn is_malformed_arguments(&self) -> bool {
        self.0.is_malformed_arguments()
    }

    /// Check if a value could not be rendered for its placeholder.
    pub fn is_unsupported_value_type(&self) -> bool {
        self.0.is_unsupported_value_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_keeps_inner_message() {
        let inner = TemplateError::malformed("3 placeholders, 2 arguments");
        let err = BuildError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(
            err.to_string(),
            "Malformed arguments: 3 placeholders, 2 arguments"
        );
        assert!(err.is_malformed_arguments());
        assert_eq!(err.into_inner(), inner);
    }

    #[test]
    fn unsupported_message_names_placeholder_and_type() {
        let err = TemplateError::unsupported("?d", "text");
        assert_eq!(err.to_string(), "Unsupported value type for ?d: text");
        assert!(err.is_unsupported_value_type());
        assert!(!err.is_malformed_arguments());
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<TemplateError>();
        assert_send_sync::<BuildError>();
    }
}
