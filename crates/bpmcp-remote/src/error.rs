/// Errors raised while talking to the remote editor server.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
}

impl From<RemoteError> for bpmcp_core::Error {
    fn from(err: RemoteError) -> Self {
        Self::Transport(err.to_string())
    }
}
