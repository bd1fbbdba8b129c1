use crate::ExporterError;
use chrono::{Duration, Local};
use prometheus::{Encoder, GaugeVec, TextEncoder};
use solaredge_rs::response::equipment::{Component, InverterTelemetry};
use solaredge_rs::response::site::PowerOverview;
use solaredge_rs::Client;

lazy_static! {
    static ref CURRENT_POWER_GAUGE: GaugeVec = register_gauge_vec!(
        opts!("solaredge_current_power", "current power production of the site (in W)"),
        &["site"],
    )
    .unwrap();
    static ref ENERGY_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "solaredge_energy",
            "energy produced over the period (in Wh): lifetime, year, month or day",
        ),
        &["site", "period"],
    )
    .unwrap();
    static ref INVERTER_ACTIVE_POWER_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "solaredge_inverter_active_power",
            "active power production reported by inverter (in W)",
        ),
        &["site", "serial_number"],
    )
    .unwrap();
    static ref INVERTER_TEMPERATURE_GAUGE: GaugeVec = register_gauge_vec!(
        opts!("solaredge_inverter_temperature", "inverter reported temperature (in C)"),
        &["site", "serial_number"],
    )
    .unwrap();
}

/// Feed the site-level power and energy figures of `overview` to Prometheus metrics.
fn process_overview(site: &str, overview: &PowerOverview) {
    CURRENT_POWER_GAUGE
        .with_label_values(&[site])
        .set(overview.current_power.power);

    for (period, data) in [
        ("lifetime", &overview.life_time_data),
        ("year", &overview.last_year_data),
        ("month", &overview.last_month_data),
        ("day", &overview.last_day_data),
    ] {
        ENERGY_GAUGE
            .with_label_values(&[site, period])
            .set(data.energy);
    }
}

fn process_inverter_telemetry(site: &str, inverter: &Component, telemetry: &InverterTelemetry) {
    if let Some(active_power) = telemetry.total_active_power {
        INVERTER_ACTIVE_POWER_GAUGE
            .with_label_values(&[site, &inverter.serial_number])
            .set(active_power);
    }

    if let Some(temperature) = telemetry.temperature {
        INVERTER_TEMPERATURE_GAUGE
            .with_label_values(&[site, &inverter.serial_number])
            .set(temperature);
    }
}

/// Iterate through all inverters of the site and collect their latest telemetry.
async fn collect_site_inverters(client: &Client, site_id: u64) -> Result<(), solaredge_rs::Error> {
    let site = site_id.to_string();
    let components = client.components(site_id).await?;

    let end = Local::now().naive_local();
    let start = end - Duration::days(1);

    for inverter in components.reporters.list {
        match client
            .inverter_technical_data(site_id, &inverter.serial_number, start, end)
            .await
        {
            Ok(data) => match data.data.telemetries.last() {
                Some(telemetry) => process_inverter_telemetry(&site, &inverter, telemetry),
                None => log::warn!(
                    "No telemetry returned for inverter {} of site {}",
                    inverter.serial_number,
                    site
                ),
            },
            Err(e) => log::error!(
                "Unable to read telemetry of inverter {} of site {}: {}",
                inverter.serial_number,
                site,
                e
            ),
        }
    }
    Ok(())
}

async fn collect_site(client: &Client, site_id: u64) -> Result<(), solaredge_rs::Error> {
    let overview = client.site_power_overview(site_id).await?;
    process_overview(&site_id.to_string(), &overview.overview);

    collect_site_inverters(client, site_id).await
}

/// Collect all supported metrics of `site_id`, or of every site if none is given, updating the
/// Prometheus exporter registry.
///
/// A failing site is logged and skipped. Collection fails only if no site could be collected.
pub async fn collect(client: &Client, site_id: Option<u64>) -> Result<(), ExporterError> {
    let site_ids = match site_id {
        Some(site_id) => vec![site_id],
        None => client
            .sites()
            .await?
            .sites
            .site
            .iter()
            .map(|site| site.id)
            .collect(),
    };

    let mut first_error = None;
    let mut collected = 0;
    for site_id in site_ids {
        match collect_site(client, site_id).await {
            Ok(()) => collected += 1,
            Err(e) => {
                log::error!("Unable to collect metrics of site {}: {}", site_id, e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) if collected == 0 => Err(e.into()),
        _ => Ok(()),
    }
}

/// Read metrics from Prometheus exporter registry.
pub fn read() -> Result<String, ExporterError> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    encoder
        .encode(&metric_families, &mut buffer)
        .or(Err(ExporterError::Format))?;
    String::from_utf8(buffer).or(Err(ExporterError::Format))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn overview(power: f64) -> serde_json::Value {
        let energy = json!({ "energy": 10.0 });
        json!({
            "overview": {
                "lastUpdateTime": "2023-03-04 14:05:23",
                "lifeTimeData": energy,
                "lastYearData": energy,
                "lastMonthData": energy,
                "lastDayData": energy,
                "currentPower": { "power": power }
            }
        })
    }

    async fn mount_site(server: &MockServer, site_id: u64, power: Option<f64>) {
        let response = match power {
            Some(power) => ResponseTemplate::new(200).set_body_json(overview(power)),
            None => ResponseTemplate::new(500),
        };
        Mock::given(method("GET"))
            .and(path(format!("/site/{}/overview", site_id)))
            .respond_with(response)
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/equipment/{}/list", site_id)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "reporters": { "count": 0, "list": [] } })),
            )
            .mount(server)
            .await;
    }

    async fn mount_sites(server: &MockServer, site_ids: &[u64]) {
        let sites: Vec<serde_json::Value> = site_ids
            .iter()
            .map(|id| json!({ "id": id, "name": format!("site {}", id) }))
            .collect();
        Mock::given(method("GET"))
            .and(path("/sites/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({ "sites": { "count": sites.len(), "site": sites } }),
            ))
            .mount(server)
            .await;
    }

    fn client(server: &MockServer) -> Client {
        Client::builder("key").api_url(server.uri()).build().unwrap()
    }

    #[tokio::test]
    async fn failing_site_does_not_stop_collection() {
        let server = MockServer::start().await;
        mount_sites(&server, &[9101, 9102]).await;
        mount_site(&server, 9101, None).await;
        mount_site(&server, 9102, Some(512.5)).await;

        collect(&client(&server), None).await.unwrap();
        assert_eq!(
            512.5,
            CURRENT_POWER_GAUGE.with_label_values(&["9102"]).get()
        );
    }

    #[tokio::test]
    async fn collection_fails_if_every_site_fails() {
        let server = MockServer::start().await;
        mount_sites(&server, &[9201, 9202]).await;
        mount_site(&server, 9201, None).await;
        mount_site(&server, 9202, None).await;

        let error = collect(&client(&server), None).await.unwrap_err();
        assert!(matches!(error, ExporterError::Api(e) if e.kind() == solaredge_rs::ErrorKind::Http));
    }
}
