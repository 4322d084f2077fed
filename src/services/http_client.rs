//! Image HTTP Client
//!
//! GPUI runs its own executor while reqwest needs tokio, so requests are
//! spawned onto a small dedicated tokio runtime and the join handle is
//! awaited from the GPUI side.
//!
//! ```text
//! img(url) ──► ImageAssetLoader ──► ReqwestHttpClient::send
//!                                          │
//!                                          ▼
//!                               tokio::Runtime::spawn()
//!                                          │
//!                                          ▼
//!                           Response<AsyncBody> back to GPUI
//! ```

use std::sync::Arc;
use std::time::Duration;

use futures::AsyncReadExt;
use futures::future::BoxFuture;
use gpui::http_client::http::HeaderValue;
use gpui::http_client::{AsyncBody, HttpClient, Request, Response, Url};
use tokio::runtime::Runtime;

use crate::error::{Error, Result};

/// Sent with every request
const USER_AGENT: &str = concat!("folio-gui/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Redirect hops followed before giving up
const MAX_REDIRECTS: usize = 10;

/// [`HttpClient`] over reqwest, run on its own tokio runtime
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    runtime: Arc<Runtime>,
    user_agent: HeaderValue,
}

impl ReqwestHttpClient {
    /// Build the client and its runtime
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("folio-http")
            .enable_all()
            .build()?;

        // Redirects are always followed; the image loader asks for that anyway.
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| Error::Http {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            runtime: Arc::new(runtime),
            user_agent: HeaderValue::from_static(USER_AGENT),
        })
    }
}

/// Drain a GPUI request body into memory
async fn read_body(mut body: AsyncBody) -> std::io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    body.read_to_end(&mut bytes).await?;
    Ok(bytes)
}

impl HttpClient for ReqwestHttpClient {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn user_agent(&self) -> Option<&HeaderValue> {
        Some(&self.user_agent)
    }

    fn proxy(&self) -> Option<&Url> {
        None
    }

    fn send(&self, req: Request<AsyncBody>) -> BoxFuture<'static, anyhow::Result<Response<AsyncBody>>> {
        let client = self.client.clone();
        let runtime = self.runtime.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = read_body(body).await?;
            let request = reqwest::Request::try_from(Request::from_parts(parts, body))?;
            let uri = request.url().to_string();

            let handle = runtime.spawn(async move {
                let response = client.execute(request).await?;
                let status = response.status();
                let headers = response.headers().clone();
                let bytes = response.bytes().await?;
                Ok::<_, reqwest::Error>((status, headers, bytes.to_vec()))
            });
            let (status, headers, bytes) = handle.await??;
            tracing::debug!(%uri, %status, len = bytes.len(), "Fetched remote resource");

            let mut builder = Response::builder().status(status);
            if let Some(map) = builder.headers_mut() {
                map.extend(headers);
            }
            Ok(builder.body(AsyncBody::from(bytes))?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifies_itself() {
        let client = ReqwestHttpClient::new().expect("client");
        assert_eq!(
            client.user_agent().and_then(|ua| ua.to_str().ok()),
            Some(USER_AGENT)
        );
        assert!(client.type_name().ends_with("ReqwestHttpClient"));
    }

    #[test]
    fn test_read_body() {
        let bytes = futures::executor::block_on(read_body(AsyncBody::from("portfolio")))
            .expect("body");
        assert_eq!(bytes, b"portfolio");

        let empty = futures::executor::block_on(read_body(AsyncBody::empty())).expect("body");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_relative_uri_is_refused() {
        let client = ReqwestHttpClient::new().expect("client");
        let request = Request::builder()
            .uri("/images/portrait.jpg")
            .body(AsyncBody::empty())
            .expect("request");

        let result = futures::executor::block_on(client.send(request));
        assert!(result.is_err());
    }
}
