/// Errors returned by the tool registry and dispatcher.
///
/// Every dispatch-time failure crosses the dispatcher boundary as one of
/// these values; tools and the dispatcher never panic to report failure.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Tool name was not found in the registry.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    /// A tool with the same name is already registered.
    #[error("duplicate tool: {0}")]
    DuplicateTool(String),
    /// A required parameter was absent from the request.
    #[error("missing required parameter: {0}")]
    MissingParameter(String),
    /// A supplied parameter did not match its declared type.
    #[error("invalid type for parameter '{parameter}': expected {expected}, got {actual}")]
    InvalidParameterType {
        /// Name of the offending parameter.
        parameter: String,
        /// Declared type tag.
        expected: String,
        /// JSON type of the supplied value.
        actual: String,
    },
    /// Tool execution failed with a domain error.
    #[error("execution failed: {0}")]
    ExecutionError(String),
}
