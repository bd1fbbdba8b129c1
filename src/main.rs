#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;
#[macro_use]
extern crate rocket;

use config::{Config, ConfigError, Environment};
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use rocket::{Build, Rocket, State};
use solaredge_rs::{Client, ErrorKind, SiteId, API_URL};
use std::io::Cursor;
use std::sync::Mutex;
use std::time::{Duration, Instant};

mod metrics;

const DEFAULT_INTERVAL: u64 = 300;

#[derive(Clone, serde::Deserialize)]
pub struct SolarEdgeConfig {
    api_key: String,
    api_url: String,
    interval: u64,
    /// Collect only this site instead of every site of the account.
    site_id: Option<u64>,
    /// Per-request timeout in seconds.
    timeout: Option<u64>,
}

/// Errors returned by the exporter's routes.
#[derive(Debug)]
pub enum ExporterError {
    Api(solaredge_rs::Error),
    Format,
}

impl From<solaredge_rs::Error> for ExporterError {
    fn from(error: solaredge_rs::Error) -> Self {
        ExporterError::Api(error)
    }
}

fn html_response(status: Status, body: String) -> response::Result<'static> {
    Response::build()
        .status(status)
        .sized_body(body.len(), Cursor::new(body))
        .header(ContentType::new("text", "html"))
        .ok()
}

impl<'r> Responder<'r, 'static> for ExporterError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        match self {
            ExporterError::Api(e) if e.status() == Some(http::StatusCode::TOO_MANY_REQUESTS) => {
                let error = format!("<html><body><h3>429 Too Many Requests</h3>Downstream API response: <code>{}</code></body></html>", e);
                html_response(Status::TooManyRequests, error)
            }
            ExporterError::Api(e) if e.is(ErrorKind::Api) => {
                let error = format!("<html><body><h3>403 Forbidden</h3>Downstream API refused the request: <code>{}</code></body></html>", e);
                html_response(Status::Forbidden, error)
            }
            ExporterError::Api(e) => {
                let error = format!(
                    "<html><body><h3>Unknown exception</h3><code>{}</code></body></html>",
                    e
                );
                html_response(Status::InternalServerError, error)
            }
            ExporterError::Format => html_response(
                Status::InternalServerError,
                String::from("<html><body><h3>Unable to encode metrics</h3></body></html>"),
            ),
        }
    }
}

/// Shared state of the routes: the API client and when metrics were last collected.
pub struct StateData {
    client: Client,
    site_id: Option<u64>,
    interval: Duration,
    last_collection: Mutex<Option<Instant>>,
}

impl StateData {
    fn new(client: Client, site_id: Option<u64>, interval: Duration) -> Self {
        Self {
            client,
            site_id,
            interval,
            last_collection: Mutex::new(None),
        }
    }

    fn mark_collected(&self, at: Instant) {
        match self.last_collection.lock() {
            Ok(mut last) => *last = Some(at),
            Err(_) => log::warn!("Collection timestamp lock poisoned, next scrape collects again"),
        }
    }

    /// A collection is due if none succeeded yet or the last one is older than `interval`.
    fn collection_due(&self, now: Instant) -> bool {
        let last = self.last_collection.lock().ok().and_then(|last| *last);
        match last {
            Some(last) => now.saturating_duration_since(last) > self.interval,
            None => true,
        }
    }
}

pub fn read_settings() -> Result<SolarEdgeConfig, ConfigError> {
    Config::builder()
        .set_default("api_url", API_URL)?
        .set_default("interval", DEFAULT_INTERVAL)?
        .add_source(Environment::with_prefix("SE"))
        .build()?
        .try_deserialize()
}

#[get("/metrics")]
async fn metrics_route(state: &State<StateData>) -> Result<String, ExporterError> {
    if state.collection_due(Instant::now()) {
        metrics::collect(&state.client, state.site_id).await?;
        state.mark_collected(Instant::now());
    } else {
        log::info!(
            "Last collection is less than {}s old, serving cached metrics",
            state.interval.as_secs()
        )
    }
    metrics::read()
}

#[get("/inventory")]
async fn inventory_route(state: &State<StateData>) -> Result<String, ExporterError> {
    let site = state.site_id.map(SiteId::Id).unwrap_or_default();
    let inventory = state.client.inventory(site).await?;

    Ok(format!("{:#?}", inventory.inventory))
}

#[launch]
fn rocket() -> Rocket<Build> {
    env_logger::init();

    let settings = match read_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let mut builder = Client::builder(settings.api_key).api_url(settings.api_url);
    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    if let Some(site_id) = settings.site_id {
        builder = builder.active_site_id(site_id);
    }
    let client = match builder.build() {
        Ok(client) => client,
        Err(e) => {
            log::error!("Unable to create API client: {}", e);
            std::process::exit(1);
        }
    };

    let state = StateData::new(
        client,
        settings.site_id,
        Duration::from_secs(settings.interval),
    );

    rocket::build()
        .manage(state)
        .mount("/", routes![metrics_route, inventory_route])
}
