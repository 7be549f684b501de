//! Error types for endpoint URL construction.

/// Type alias for `Result` carrying an [`error_stack::Report`] error
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures while substituting placeholders into an endpoint template.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("No positional argument supplied for placeholder `{{{index}}}`")]
    MissingUrlParameter { index: usize },
    #[error("Template contains a malformed placeholder near `{token}`")]
    MalformedTemplate { token: String },
    #[error("Endpoint `{endpoint}` takes {expected} identifier(s), got {got}")]
    ParameterCountMismatch {
        endpoint: String,
        expected: usize,
        got: usize,
    },
    #[error("Substituted endpoint is not a valid URL")]
    InvalidUrl,
}
