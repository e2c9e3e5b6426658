use anyhow::anyhow;
use async_trait::async_trait;
use reset_shared::{form::ResetForm, response::ResetResponse, token::ResetToken};

use crate::{errors::HttpLikeError, interface::Io};

/// Type safe version of [`Io`]
#[async_trait]
pub trait SafeIo: Sync + Send {
    async fn send_password_reset(
        &self,
        token: &ResetToken,
        form: &ResetForm,
    ) -> anyhow::Result<ResetResponse, HttpLikeError>;
}

pub struct IoSafe<'a> {
    pub io: &'a dyn Io,
}

impl<'a> From<&'a dyn Io> for IoSafe<'a> {
    fn from(io: &'a dyn Io) -> Self {
        Self { io }
    }
}

#[async_trait]
impl SafeIo for IoSafe<'_> {
    async fn send_password_reset(
        &self,
        token: &ResetToken,
        form: &ResetForm,
    ) -> anyhow::Result<ResetResponse, HttpLikeError> {
        let res = self
            .io
            .send_password_reset(token, form.url_encoded().into_bytes())
            .await?;
        let s = String::from_utf8(res).map_err(|err| HttpLikeError::Other(err.into()))?;
        serde_json::from_str(s.as_str())
            .map_err(|_| HttpLikeError::Other(anyhow!("failed to parse json: {s}")))
    }
}
