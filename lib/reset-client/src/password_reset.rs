use reset_shared::{form::ResetForm, response::ResetResponse, token::ResetToken};
use thiserror::Error;

use crate::{
    errors::HttpLikeError,
    interface::Io,
    safe_interface::{IoSafe, SafeIo},
};

/// The result of a [`password_reset`] request.
#[derive(Error, Debug)]
pub enum PasswordResetError {
    /// A http like error occurred.
    #[error("{0}")]
    HttpLikeError(HttpLikeError),
    /// Errors that are not handled explicitly.
    #[error("Password reset failed: {0}")]
    Other(anyhow::Error),
}

impl From<HttpLikeError> for PasswordResetError {
    fn from(value: HttpLikeError) -> Self {
        Self::HttpLikeError(value)
    }
}

/// Sends the filled reset form to the reset endpoint the
/// given token belongs to.
///
/// On success the parsed response body is returned, but
/// callers must not rely on any particular shape of it; the
/// backend only promises structured data. A response that is
/// no structured data counts as a failed reset, exactly like
/// a bad status code or a request that never made it.
pub async fn password_reset(
    form: &ResetForm,
    token: &ResetToken,
    io: &dyn Io,
) -> anyhow::Result<ResetResponse, PasswordResetError> {
    password_reset_impl(form, token, io.into()).await
}

async fn password_reset_impl(
    form: &ResetForm,
    token: &ResetToken,
    io: IoSafe<'_>,
) -> anyhow::Result<ResetResponse, PasswordResetError> {
    Ok(io.send_password_reset(token, form).await?)
}
