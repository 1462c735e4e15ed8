//! The HTTP collaborator behind generated operations.

use std::{fmt, future::Future};

use reqwest::{Certificate, RequestBuilder, header::CONTENT_TYPE};
use tracing::debug;
use url::Url;

use crate::{config::ClientConfig, context::RequestContext, error::TransportError};

/// Raw request/response exchange with a device.
///
/// Paths are relative to the REST root, e.g. `interface/bridge/vlan`. Both
/// methods return the response body whatever the HTTP status, since RouterOS
/// reports failures as JSON bodies that the client decodes.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;

    fn patch(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

/// [`Transport`] over HTTPS with basic authentication.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: String,
}

impl HttpTransport {
    /// Connect to `https://<address>/rest/`.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        for pem in &config.root_certificates {
            builder = builder.add_root_certificate(Certificate::from_pem(pem)?);
        }

        let base_url = Url::parse(&format!("https://{}/rest/", config.address))?;
        Ok(Self {
            http: builder.build()?,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Send requests under a different root, e.g. a plain-HTTP test server.
    pub fn with_base_url(mut self, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        self.base_url = base_url;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, TransportError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn send(
        &self,
        ctx: &RequestContext,
        request: RequestBuilder,
    ) -> Result<Vec<u8>, TransportError> {
        let request = request.basic_auth(&self.username, Some(&self.password));
        ctx.run(async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            debug!(%status, bytes = body.len(), "response received");
            Ok(body.to_vec())
        })
        .await
    }
}

impl Transport for HttpTransport {
    async fn get(&self, ctx: &RequestContext, path: &str) -> Result<Vec<u8>, TransportError> {
        let url = self.url(path)?;
        debug!(%url, "GET");
        self.send(ctx, self.http.get(url)).await
    }

    async fn patch(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError> {
        let url = self.url(path)?;
        debug!(%url, bytes = body.len(), "PATCH");
        let request = self
            .http
            .patch(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.send(ctx, request).await
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
