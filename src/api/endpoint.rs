pub type Endpoint = str;

/// Path segment replaced by the decimal site id.
pub const SITE_ID: &str = "{siteId}";
/// Path segment replaced by an equipment serial number.
pub const SERIAL_NUMBER: &str = "{serialNumber}";

pub const SITES: &Endpoint = "/sites/list";
pub const SITE_DETAILS: &Endpoint = "/site/{siteId}/details";
pub const SITE_DATA_PERIOD: &Endpoint = "/site/{siteId}/dataPeriod";
pub const SITE_ENERGY: &Endpoint = "/site/{siteId}/energy";
pub const SITE_TIME_FRAME_ENERGY: &Endpoint = "/site/{siteId}/timeFrameEnergy";
pub const SITE_POWER: &Endpoint = "/site/{siteId}/power";
pub const SITE_OVERVIEW: &Endpoint = "/site/{siteId}/overview";
pub const SITE_POWER_DETAILS: &Endpoint = "/site/{siteId}/powerDetails";
pub const SITE_ENERGY_DETAILS: &Endpoint = "/site/{siteId}/energyDetails";
pub const SITE_POWER_FLOW: &Endpoint = "/site/{siteId}/currentPowerFlow";
pub const SITE_STORAGE_DATA: &Endpoint = "/site/{siteId}/storageData";
pub const SITE_ENV_BENEFITS: &Endpoint = "/site/{siteId}/envBenefits";
pub const SITE_INVENTORY: &Endpoint = "/site/{siteId}/inventory";
pub const COMPONENTS: &Endpoint = "/equipment/{siteId}/list";
pub const INVERTER_DATA: &Endpoint = "/equipment/{siteId}/{serialNumber}/data";
pub const CHANGE_LOG: &Endpoint = "/equipment/{siteId}/{serialNumber}/changeLog";
pub const CURRENT_VERSION: &Endpoint = "/version/current";
pub const SUPPORTED_VERSIONS: &Endpoint = "/version/supported";

/// Whether `endpoint` carries the site id placeholder.
pub fn needs_site_id(endpoint: &Endpoint) -> bool {
    endpoint.split('/').any(|segment| segment == SITE_ID)
}
