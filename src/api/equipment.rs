//! Site Equipment API.

use crate::api::response::equipment::{
    GetComponentsResponse, GetEquipmentChangeLogResponse, GetInventoryResponse,
    GetInverterTechnicalDataResponse,
};
use crate::api::{endpoint, request, Client, Error, Request, SiteId};
use crate::model::DATE_TIME_LAYOUT;
use chrono::NaiveDateTime;

impl Client {
    /// Inverters and SMIs of the site.
    pub async fn components(&self, site: impl Into<SiteId>) -> Result<GetComponentsResponse, Error> {
        self.call(Request::new(endpoint::COMPONENTS).site(site))
            .await
    }

    /// Batteries, gateways, inverters, meters and sensors of the site.
    pub async fn inventory(&self, site: impl Into<SiteId>) -> Result<GetInventoryResponse, Error> {
        self.call(Request::new(endpoint::SITE_INVENTORY).site(site))
            .await
    }

    /// Telemetry of inverter `serial_number` (at most one week).
    pub async fn inverter_technical_data(
        &self,
        site: impl Into<SiteId>,
        serial_number: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<GetInverterTechnicalDataResponse, Error> {
        let args = request::time_range_args(start, end, "Time", DATE_TIME_LAYOUT)?;
        let request = Request::new(endpoint::INVERTER_DATA)
            .site(site)
            .serial_number(serial_number)
            .args(args);
        self.call(request).await
    }

    /// Replacements of component `serial_number`, ordered by date.
    pub async fn equipment_change_log(
        &self,
        site: impl Into<SiteId>,
        serial_number: &str,
    ) -> Result<GetEquipmentChangeLogResponse, Error> {
        let request = Request::new(endpoint::CHANGE_LOG)
            .site(site)
            .serial_number(serial_number);
        self.call(request).await
    }
}
