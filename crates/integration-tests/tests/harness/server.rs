//! Test server wrapper that starts the playground on a random port

use std::net::SocketAddr;

use playground_config::Config;
use playground_server::{SESSION_COOKIE, Server};
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(&config)?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        // Redirects are inspected by the tests themselves
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Open a browser-like session by loading the page once
    pub async fn open_session(&self) -> anyhow::Result<Session<'_>> {
        let resp = self.client.get(self.url("/")).send().await?;
        let cookie = session_cookie(&resp).ok_or_else(|| anyhow::anyhow!("no session cookie issued"))?;
        Ok(Session { server: self, cookie })
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Extract `playground_session=<id>` from a response's `Set-Cookie` header
pub fn session_cookie(resp: &reqwest::Response) -> Option<String> {
    resp.headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE}=")))
        .map(str::to_owned)
}

/// Requests that carry one session's cookie
pub struct Session<'a> {
    server: &'a TestServer,
    cookie: String,
}

impl Session<'_> {
    /// Load the page
    pub async fn page(&self) -> anyhow::Result<String> {
        let resp = self
            .server
            .client
            .get(self.server.url("/"))
            .header(reqwest::header::COOKIE, &self.cookie)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?)
    }

    /// Post form fields to an action path and return the rendered page
    pub async fn post(&self, path: &str, fields: &[(&str, &str)]) -> anyhow::Result<String> {
        let resp = self
            .server
            .client
            .post(self.server.url(path))
            .header(reqwest::header::COOKIE, &self.cookie)
            .form(fields)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?)
    }

    /// Post to an action path and return the raw response
    pub async fn post_raw(&self, path: &str) -> anyhow::Result<reqwest::Response> {
        Ok(self
            .server
            .client
            .post(self.server.url(path))
            .header(reqwest::header::COOKIE, &self.cookie)
            .send()
            .await?)
    }
}
