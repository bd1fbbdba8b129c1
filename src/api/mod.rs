pub mod classify;
pub mod endpoint;
pub mod equipment;
pub mod error;
pub mod html;
pub mod redact;
pub mod request;
pub mod response;
pub mod site;
pub mod version;

pub use error::{ApiErrorPayload, Error, ErrorKind};
pub use request::{Args, Request, SiteId};

use redact::redact;
use request::build_url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use response::sites::GetSitesResponse;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::Mutex;
use url::Url;

pub const API_URL: &str = "https://monitoringapi.solaredge.com";

pub struct ClientBuilder {
    api_key: SecretString,
    api_url: String,
    client: Option<reqwest::Client>,
    timeout: Option<Duration>,
    active_site_id: Option<u64>,
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            api_url: String::from(API_URL),
            client: None,
            timeout: None,
            active_site_id: None,
        }
    }

    /// Send requests to `api_url` instead of the production server.
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Upper bound for a single request, from sending it to reading the whole body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Preset the active site so it never has to be looked up.
    pub fn active_site_id(mut self, site_id: u64) -> Self {
        self.active_site_id = Some(site_id);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let Self {
            api_key,
            api_url,
            client,
            timeout,
            active_site_id,
        } = self;

        Url::parse(&api_url)
            .map_err(|e| Error::Config(format!("invalid api url {:?}: {}", api_url, e)))?;

        let client = match client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .build()
                .map_err(|e| Error::Config(format!("cannot build http client: {}", e)))?,
        };

        Ok(Client {
            api_key,
            api_url,
            client,
            timeout,
            active_site: Mutex::new(active_site_id),
        })
    }
}

/// Client for the SolarEdge monitoring API.
///
/// All operations funnel through [`Client::call`]: one GET per operation, no retries. Dropping a
/// returned future aborts the request, so callers bound it with `tokio::time::timeout` or
/// [`ClientBuilder::timeout`].
#[derive(Debug)]
pub struct Client {
    api_key: SecretString,
    api_url: String,
    client: reqwest::Client,
    timeout: Option<Duration>,
    /// Site used for [`SiteId::Active`]; looked up at most once.
    active_site: Mutex<Option<u64>>,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Perform `request` and decode the response into `T`.
    pub async fn call<T: DeserializeOwned>(&self, request: Request<'_>) -> Result<T, Error> {
        let site_id = match request.site {
            SiteId::Id(id) => Some(id),
            SiteId::Active if request.needs_site_id() => {
                Some(self.active_site_id().await.map_err(Error::init)?)
            }
            SiteId::Active => None,
        };

        let url = build_url(
            &self.api_url,
            request.endpoint,
            site_id,
            request.serial_number,
            self.api_key.expose_secret(),
            &request.args,
        )?;

        self.get(url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        log::debug!("GET {}", redact(url.as_str()));

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json");
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(Error::transport)?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = response.bytes().await.map_err(Error::transport)?;

        log::trace!(
            "status: {}, content_type: {:?}, body: {}",
            status,
            content_type,
            String::from_utf8_lossy(&body)
        );

        classify::decode(status, content_type.as_deref(), &body)
    }

    /// The active site, fetching the site list and taking its first entry if none is set yet.
    ///
    /// The lock is held across the lookup, so concurrent callers wait for a single fetch.
    pub async fn active_site_id(&self) -> Result<u64, Error> {
        let mut active_site = self.active_site.lock().await;
        if let Some(site_id) = *active_site {
            return Ok(site_id);
        }

        log::debug!("No active site set, looking it up");
        let url = build_url(
            &self.api_url,
            endpoint::SITES,
            None,
            None,
            self.api_key.expose_secret(),
            &Args::new(),
        )?;
        let response: GetSitesResponse = self.get(url).await?;
        let site_id = response
            .sites
            .site
            .first()
            .map(|site| site.id)
            .ok_or(Error::NoSites)?;

        log::debug!("Active site is {}", site_id);
        *active_site = Some(site_id);
        Ok(site_id)
    }

    pub async fn set_active_site_id(&self, site_id: u64) {
        *self.active_site.lock().await = Some(site_id);
    }
}
