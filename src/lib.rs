//! Client for the SolarEdge monitoring API.
//!
//! ```no_run
//! # async fn run() -> Result<(), solaredge_rs::Error> {
//! let client = solaredge_rs::Client::new("my-api-key")?;
//! let overview = client.site_power_overview(solaredge_rs::SiteId::Active).await?;
//! println!("{} W", overview.overview.current_power.power);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod model;

pub use api::response;
pub use api::{
    ApiErrorPayload, Args, Client, ClientBuilder, Error, ErrorKind, Request, SiteId, API_URL,
};
pub use model::{BatteryState, Date, DateTime, TimeUnit};
