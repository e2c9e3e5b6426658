use std::sync::Arc;

use axum::routing::post;
use parking_lot::Mutex;
use reset_client::{
    errors::HttpLikeError,
    page::Page,
    password_reset::{password_reset, PasswordResetError},
    submitter::ResetPasswordSubmitter,
};
use reset_shared::{
    form::ResetForm,
    page::{REDIRECT_LOCATION, RESET_FAILED_TEXT},
    token::ResetToken,
};
use tokio::{net::TcpListener, task::JoinHandle};
use url::Url;

use crate::client::ClientReqwest;

#[derive(Debug, Default)]
struct SeenRequest {
    path: String,
    content_type: String,
    body: String,
    hits: usize,
}

/// A real http server for the reset endpoint that answers
/// every request with the given status and body and records
/// what the client sent.
struct TestResetServer {
    server: JoinHandle<anyhow::Result<()>>,
    base_url: Url,
    seen: Arc<Mutex<SeenRequest>>,
}

impl TestResetServer {
    async fn new(status: u16, response: &'static str) -> anyhow::Result<Self> {
        let seen: Arc<Mutex<SeenRequest>> = Default::default();

        let seen_clone = seen.clone();
        let app = axum::Router::new().route(
            "/api/auth/reset_password/:token",
            post(
                move |uri: axum::http::Uri, headers: axum::http::HeaderMap, body: String| {
                    async move {
                        {
                            let mut seen = seen_clone.lock();
                            seen.path = uri.path().to_string();
                            seen.content_type = headers
                                .get(axum::http::header::CONTENT_TYPE)
                                .and_then(|val| val.to_str().ok())
                                .unwrap_or_default()
                                .to_string();
                            seen.body = body;
                            seen.hits += 1;
                        }
                        (axum::http::StatusCode::from_u16(status).unwrap(), response)
                    }
                },
            ),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = Url::parse(&format!("http://{}/", listener.local_addr()?))?;

        let server = tokio::spawn(async move {
            axum::serve(listener, app).await?;
            anyhow::Ok(())
        });

        Ok(Self {
            server,
            base_url,
            seen,
        })
    }

    async fn destroy(self) -> anyhow::Result<()> {
        self.server.abort();
        anyhow::Ok(())
    }
}

#[derive(Debug, Default)]
struct PageOut {
    error_text: Option<String>,
    left_to: Option<String>,
}

struct TestPage {
    fields: Vec<(String, String)>,
    token: &'static str,
    out: Arc<Mutex<PageOut>>,
}

impl Page for TestPage {
    fn form_fields(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }
    fn reset_token(&self) -> ResetToken {
        self.token.into()
    }
    fn show_error(&self, text: &str) {
        self.out.lock().error_text = Some(text.to_string());
    }
    fn navigate_to(&self, location: &str) {
        self.out.lock().left_to = Some(location.to_string());
    }
}

fn page_for(fields: Vec<(String, String)>) -> (Arc<TestPage>, Arc<Mutex<PageOut>>) {
    let out: Arc<Mutex<PageOut>> = Default::default();
    (
        Arc::new(TestPage {
            fields,
            token: "tok123",
            out: out.clone(),
        }),
        out,
    )
}

#[tokio::test]
async fn reset_request_hits_the_expected_endpoint() {
    let test = async move {
        let serv =
            TestResetServer::new(200, r#"{"massage":"Password reset successfully."}"#).await?;

        let form: ResetForm = [
            ("email".to_string(), "a@b.com".to_string()),
            ("new_password".to_string(), "pass word".to_string()),
        ]
        .into_iter()
        .collect();
        let token = ResetToken::from("tok123");
        let client = ClientReqwest::new(serv.base_url.clone())?;

        let res = password_reset(&form, &token, &client).await;
        assert!(res.is_ok());

        {
            let seen = serv.seen.lock();
            assert_eq!(seen.hits, 1);
            assert_eq!(seen.path, "/api/auth/reset_password/tok123");
            assert_eq!(seen.content_type, "application/x-www-form-urlencoded");
            assert_eq!(seen.body, "email=a%40b.com&new_password=pass+word");
        }

        serv.destroy().await?;
        anyhow::Ok(())
    };
    test.await.unwrap();
}

#[tokio::test]
async fn successful_reset_leaves_the_page() {
    let test = async move {
        let serv =
            TestResetServer::new(200, r#"{"massage":"Password reset successfully."}"#).await?;

        let (page, out) = page_for(vec![("new_password".into(), "MySup3rStrong@Pw".into())]);
        let io = Arc::new(ClientReqwest::new(serv.base_url.clone())?);
        ResetPasswordSubmitter::bind(page, io).submit().await;

        {
            let out = out.lock();
            assert_eq!(out.left_to.as_deref(), Some(REDIRECT_LOCATION));
            assert_eq!(out.error_text, None);
        }

        serv.destroy().await?;
        anyhow::Ok(())
    };
    test.await.unwrap();
}

#[tokio::test]
async fn denied_reset_shows_the_fixed_error() {
    let test = async move {
        let serv = TestResetServer::new(400, r#"{"detail": "Verification error."}"#).await?;

        let (page, out) = page_for(vec![("new_password".into(), "MySup3rStrong@Pw".into())]);
        let io = Arc::new(ClientReqwest::new(serv.base_url.clone())?);
        ResetPasswordSubmitter::bind(page, io).submit().await;

        {
            let out = out.lock();
            assert_eq!(out.error_text.as_deref(), Some(RESET_FAILED_TEXT));
            assert_eq!(out.left_to, None);
        }

        serv.destroy().await?;
        anyhow::Ok(())
    };
    test.await.unwrap();
}

#[tokio::test]
async fn status_error_is_reported_to_the_caller() {
    let test = async move {
        let serv = TestResetServer::new(400, r#"{"detail": "Verification error."}"#).await?;

        let form: ResetForm = [("new_password".to_string(), "MySup3rStrong@Pw".to_string())]
            .into_iter()
            .collect();
        let token = ResetToken::from("tok123");
        let client = ClientReqwest::new(serv.base_url.clone())?;

        let res = password_reset(&form, &token, &client).await;
        assert!(matches!(
            res.unwrap_err(),
            PasswordResetError::HttpLikeError(HttpLikeError::Status(400))
        ));

        serv.destroy().await?;
        anyhow::Ok(())
    };
    test.await.unwrap();
}

#[tokio::test]
async fn unreachable_server_shows_the_fixed_error() {
    let test = async move {
        // nothing listens here
        let (page, out) = page_for(vec![("new_password".into(), "MySup3rStrong@Pw".into())]);
        let io = Arc::new(ClientReqwest::new(Url::parse("http://127.0.0.1:1/")?)?);
        ResetPasswordSubmitter::bind(page, io).submit().await;

        {
            let out = out.lock();
            assert_eq!(out.error_text.as_deref(), Some(RESET_FAILED_TEXT));
            assert_eq!(out.left_to, None);
        }

        anyhow::Ok(())
    };
    test.await.unwrap();
}

#[tokio::test]
async fn html_response_shows_the_fixed_error() {
    let test = async move {
        // success status, but the body is no json
        let serv = TestResetServer::new(200, "<html>ok</html>").await?;

        let (page, out) = page_for(vec![("new_password".into(), "MySup3rStrong@Pw".into())]);
        let io = Arc::new(ClientReqwest::new(serv.base_url.clone())?);
        ResetPasswordSubmitter::bind(page, io).submit().await;

        {
            let out = out.lock();
            assert_eq!(out.error_text.as_deref(), Some(RESET_FAILED_TEXT));
            assert_eq!(out.left_to, None);
        }

        serv.destroy().await?;
        anyhow::Ok(())
    };
    test.await.unwrap();
}
