use std::future::Future;

use anyhow::Result;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, USER_AGENT};

pub const FETCHER_USER_AGENT: &str = "Mozilla/5.0 (VercelFetcher)";
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";
pub const ACCEPT_LANGUAGE_PE: &str = "es-PE,es;q=0.9,en;q=0.7";
pub const NO_CACHE: &str = "no-cache";

/// What came back from the upstream site, before any shaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamPage {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

impl UpstreamPage {
    pub fn new(status: u16, body: String) -> UpstreamPage {
        UpstreamPage {
            status,
            ok: (200..300).contains(&status),
            body,
        }
    }
}

/// Performs the single outbound GET for a lookup.
///
/// Any error, whether sending the request or reading the body, is an
/// upstream failure. A non-2xx status is not an error.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(&self, target: &str) -> impl Future<Output = Result<UpstreamPage>> + Send;
}

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> HttpFetcher {
        HttpFetcher {
            client: Client::new(),
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, target: &str) -> Result<UpstreamPage> {
        let res = self
            .client
            .get(target)
            .header(USER_AGENT, FETCHER_USER_AGENT)
            .header(ACCEPT, ACCEPT_HTML)
            .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_PE)
            .header(CACHE_CONTROL, NO_CACHE)
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;
        Ok(UpstreamPage {
            status: status.as_u16(),
            ok: status.is_success(),
            body,
        })
    }
}
