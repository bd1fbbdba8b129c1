//! Site Data API.

use crate::api::response::site::{
    GetSiteDataPeriodResponse, GetSiteEnergyDetailsResponse, GetSiteEnergyForTimeFrameResponse,
    GetSiteEnergyResponse, GetSiteEnvBenefitsResponse, GetSitePowerDetailsResponse,
    GetSitePowerFlowResponse, GetSitePowerOverviewResponse, GetSitePowerResponse,
    GetSiteStorageDataResponse,
};
use crate::api::response::sites::{GetSiteDetailsResponse, GetSitesResponse};
use crate::api::{endpoint, request, Client, Error, Request, SiteId};
use crate::model::{TimeUnit, DATE_LAYOUT, DATE_TIME_LAYOUT};
use chrono::NaiveDateTime;

const TIME_UNIT: &str = "timeUnit";

fn date_range(start: NaiveDateTime, end: NaiveDateTime) -> Result<request::Args, Error> {
    request::time_range_args(start, end, "Date", DATE_LAYOUT)
}

fn time_range(start: NaiveDateTime, end: NaiveDateTime) -> Result<request::Args, Error> {
    request::time_range_args(start, end, "Time", DATE_TIME_LAYOUT)
}

impl Client {
    /// All sites registered under the API key.
    pub async fn sites(&self) -> Result<GetSitesResponse, Error> {
        self.call(Request::new(endpoint::SITES)).await
    }

    pub async fn site_details(&self, site: impl Into<SiteId>) -> Result<GetSiteDetailsResponse, Error> {
        self.call(Request::new(endpoint::SITE_DETAILS).site(site))
            .await
    }

    /// Production start and end dates of the site.
    pub async fn site_data_period(
        &self,
        site: impl Into<SiteId>,
    ) -> Result<GetSiteDataPeriodResponse, Error> {
        self.call(Request::new(endpoint::SITE_DATA_PERIOD).site(site))
            .await
    }

    /// Energy produced per `time_unit` between the days of `start` and `end`.
    ///
    /// `QuarterOfAnHour` and `Hour` are limited to one month, `Day` to one year.
    pub async fn site_energy(
        &self,
        site: impl Into<SiteId>,
        time_unit: TimeUnit,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<GetSiteEnergyResponse, Error> {
        let args = date_range(start, end)?;
        let request = Request::new(endpoint::SITE_ENERGY)
            .site(site)
            .args(args)
            .arg(TIME_UNIT, time_unit.as_str());
        self.call(request).await
    }

    /// Total energy produced between the days of `start` and `end` (at most one year).
    pub async fn site_energy_for_time_frame(
        &self,
        site: impl Into<SiteId>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<GetSiteEnergyForTimeFrameResponse, Error> {
        let args = date_range(start, end)?;
        self.call(Request::new(endpoint::SITE_TIME_FRAME_ENERGY).site(site).args(args))
            .await
    }

    /// Power in 15 minute resolution (at most one month).
    pub async fn site_power(
        &self,
        site: impl Into<SiteId>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<GetSitePowerResponse, Error> {
        let args = time_range(start, end)?;
        self.call(Request::new(endpoint::SITE_POWER).site(site).args(args))
            .await
    }

    pub async fn site_power_overview(
        &self,
        site: impl Into<SiteId>,
    ) -> Result<GetSitePowerOverviewResponse, Error> {
        self.call(Request::new(endpoint::SITE_OVERVIEW).site(site))
            .await
    }

    /// Power per meter (at most one month).
    pub async fn site_power_details(
        &self,
        site: impl Into<SiteId>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<GetSitePowerDetailsResponse, Error> {
        let args = time_range(start, end)?;
        self.call(Request::new(endpoint::SITE_POWER_DETAILS).site(site).args(args))
            .await
    }

    /// Energy per meter and `time_unit`, with the same range limits as [`Client::site_energy`].
    pub async fn site_energy_details(
        &self,
        site: impl Into<SiteId>,
        time_unit: TimeUnit,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<GetSiteEnergyDetailsResponse, Error> {
        let args = time_range(start, end)?;
        let request = Request::new(endpoint::SITE_ENERGY_DETAILS)
            .site(site)
            .args(args)
            .arg(TIME_UNIT, time_unit.as_str());
        self.call(request).await
    }

    pub async fn site_power_flow(
        &self,
        site: impl Into<SiteId>,
    ) -> Result<GetSitePowerFlowResponse, Error> {
        self.call(Request::new(endpoint::SITE_POWER_FLOW).site(site))
            .await
    }

    /// Battery telemetry (at most one week).
    pub async fn site_storage_data(
        &self,
        site: impl Into<SiteId>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<GetSiteStorageDataResponse, Error> {
        let args = time_range(start, end)?;
        self.call(Request::new(endpoint::SITE_STORAGE_DATA).site(site).args(args))
            .await
    }

    pub async fn site_env_benefits(
        &self,
        site: impl Into<SiteId>,
    ) -> Result<GetSiteEnvBenefitsResponse, Error> {
        self.call(Request::new(endpoint::SITE_ENV_BENEFITS).site(site))
            .await
    }
}
