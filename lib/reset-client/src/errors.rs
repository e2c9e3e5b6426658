use thiserror::Error;

/// Errors of the transport between the client and the reset
/// endpoint. Http like, because a driver does not have to
/// speak http as long as it behaves like it.
#[derive(Error, Debug)]
pub enum HttpLikeError {
    /// The request failed to be sent, e.g. the backend was
    /// not reachable or the connection broke away.
    #[error("The request failed to be sent")]
    Request,
    /// The backend answered with a non-success status code.
    #[error("The request finished with an unexpected status code: {0}")]
    Status(u16),
    /// Errors that are not handled explicitly.
    #[error("{0}")]
    Other(anyhow::Error),
}

impl From<serde_json::Error> for HttpLikeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Other(value.into())
    }
}
