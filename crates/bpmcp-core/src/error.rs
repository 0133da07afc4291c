/// Core error type for the Blueprint tool adapter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("missing required argument: {0}")]
    MissingArgument(String),

    #[error("invalid argument '{name}': expected {expected}")]
    InvalidArgument { name: String, expected: &'static str },

    #[error("transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Whether the error was caused by the caller's arguments rather than the remote call.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_) | Self::MissingArgument(_) | Self::InvalidArgument { .. }
        )
    }
}
