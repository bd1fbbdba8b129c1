use crate::model::{BatteryState, Date, DateTime, TimeUnit};
use serde::Deserialize;

/// A measurement at a point in time. The server sends `null` for missing samples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Value {
    pub date: DateTime,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSiteDataPeriodResponse {
    pub data_period: SiteDataPeriod,
}

/// First and last day of production. Both are absent for a site without data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDataPeriod {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetSiteEnergyResponse {
    pub energy: SiteEnergy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEnergy {
    pub time_unit: TimeUnit,
    pub unit: String,
    pub measured_by: Option<String>,
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSiteEnergyForTimeFrameResponse {
    pub time_frame_energy: SiteEnergyForTimeFrame,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEnergyForTimeFrame {
    pub energy: f64,
    pub unit: String,
    pub measured_by: Option<String>,
    pub start_lifetime_energy: Option<LifetimeEnergy>,
    pub end_lifetime_energy: Option<LifetimeEnergy>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LifetimeEnergy {
    pub energy: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetSitePowerResponse {
    pub power: SitePower,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePower {
    pub time_unit: TimeUnit,
    pub unit: String,
    pub measured_by: Option<String>,
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetSitePowerOverviewResponse {
    pub overview: PowerOverview,
}

/// Energy produced over the site's lifetime, the current year, month and day (Wh), and the
/// current power (W).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerOverview {
    pub last_update_time: DateTime,
    pub life_time_data: EnergyOverview,
    pub last_year_data: EnergyOverview,
    pub last_month_data: EnergyOverview,
    pub last_day_data: EnergyOverview,
    pub current_power: CurrentPower,
    pub measured_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnergyOverview {
    pub energy: f64,
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentPower {
    pub power: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSitePowerDetailsResponse {
    pub power_details: MeterDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSiteEnergyDetailsResponse {
    pub energy_details: MeterDetails,
}

/// Readings per meter (production, consumption, feed-in, purchased, self-consumption).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterDetails {
    pub time_unit: TimeUnit,
    pub unit: String,
    pub meters: Vec<MeterReadings>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeterReadings {
    #[serde(rename = "type")]
    pub meter_type: String,
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSitePowerFlowResponse {
    pub site_current_power_flow: PowerFlow,
}

/// Current power flow between the PV array, storage, loads and the grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerFlow {
    pub update_refresh_rate: Option<u32>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub connections: Vec<PowerFlowConnection>,
    #[serde(rename = "GRID")]
    pub grid: Option<PowerFlowReading>,
    #[serde(rename = "LOAD")]
    pub load: Option<PowerFlowReading>,
    #[serde(rename = "PV")]
    pub pv: Option<PowerFlowReading>,
    #[serde(rename = "STORAGE")]
    pub storage: Option<StorageReading>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PowerFlowConnection {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerFlowReading {
    pub status: String,
    pub current_power: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageReading {
    pub status: String,
    pub current_power: f64,
    pub charge_level: Option<f64>,
    #[serde(default)]
    pub critical: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSiteStorageDataResponse {
    pub storage_data: StorageData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageData {
    pub battery_count: u32,
    pub batteries: Vec<Battery>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    pub nameplate: f64,
    pub serial_number: String,
    pub model_number: String,
    pub telemetry_count: u32,
    #[serde(default)]
    pub telemetries: Vec<BatteryTelemetry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryTelemetry {
    pub time_stamp: DateTime,
    pub power: Option<f64>,
    pub battery_state: BatteryState,
    pub life_time_energy_charged: Option<f64>,
    pub life_time_energy_discharged: Option<f64>,
    pub full_pack_energy_available: Option<f64>,
    pub internal_temp: Option<f64>,
    #[serde(rename = "ACGridCharging")]
    pub ac_grid_charging: Option<f64>,
    pub battery_percentage_state: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSiteEnvBenefitsResponse {
    pub env_benefits: EnvBenefits,
}

/// Environmental benefits of the site's production.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvBenefits {
    pub gas_emission_saved: GasEmissionSaved,
    pub trees_planted: f64,
    pub light_bulbs: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GasEmissionSaved {
    pub units: String,
    pub co2: f64,
    pub so2: f64,
    pub nox: f64,
}
