use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reset_client::{errors::HttpLikeError, interface::Io};
use reset_shared::{page::RESET_PATH_PREFIX, token::ResetToken};
use url::Url;

#[derive(Debug)]
pub struct ClientReqwest {
    base_url: Url,
    client: reqwest::Client,
}

impl ClientReqwest {
    pub fn new(base_url: Url) -> anyhow::Result<Self> {
        Ok(Self {
            base_url,
            client: reqwest::ClientBuilder::new()
                .user_agent("reset-client")
                .build()?,
        })
    }

    async fn post_form(&self, url: Url, data: Vec<u8>) -> anyhow::Result<Vec<u8>, HttpLikeError> {
        let res = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(data)
            .send()
            .await
            .map_err(|err| {
                if err.is_builder() {
                    HttpLikeError::Other(err.into())
                } else {
                    HttpLikeError::Request
                }
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(HttpLikeError::Status(status.as_u16()));
        }

        res.bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|_| HttpLikeError::Request)
    }
}

#[async_trait]
impl Io for ClientReqwest {
    async fn send_password_reset(
        &self,
        token: &ResetToken,
        body: Vec<u8>,
    ) -> anyhow::Result<Vec<u8>, HttpLikeError> {
        self.post_form(
            self.base_url
                .join(&format!("{RESET_PATH_PREFIX}{token}"))
                .map_err(|err| HttpLikeError::Other(err.into()))?,
            body,
        )
        .await
    }
}
