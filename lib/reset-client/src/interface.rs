use async_trait::async_trait;
use reset_shared::token::ResetToken;

use crate::errors::HttpLikeError;

/// An io interface for the submit handler to abstract away
/// the _actual_ communication used to reach the reset
/// endpoint.
#[async_trait]
pub trait Io: Sync + Send {
    /// Sends one encoded form body to the reset endpoint that
    /// belongs to the given token. The body is arbitrary data
    /// for this interface; the response body is returned as
    /// arbitrary data.
    async fn send_password_reset(
        &self,
        token: &ResetToken,
        body: Vec<u8>,
    ) -> anyhow::Result<Vec<u8>, HttpLikeError>;
}
