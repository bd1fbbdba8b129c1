use crate::model::Date;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetSitesResponse {
    pub sites: Sites,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sites {
    pub count: u32,
    pub site: Vec<SiteDetails>,
}

impl Sites {
    pub fn find_by_id(&self, id: u64) -> Option<&SiteDetails> {
        self.site.iter().find(|site| site.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&SiteDetails> {
        self.site.iter().find(|site| site.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetSiteDetailsResponse {
    pub details: SiteDetails,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDetails {
    pub id: u64,
    pub name: String,
    pub account_id: Option<u64>,
    #[serde(default)]
    pub status: String,
    pub peak_power: Option<f64>,
    pub last_update_time: Option<Date>,
    pub installation_date: Option<Date>,
    pub pto_date: Option<Date>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, rename = "type")]
    pub site_type: String,
    #[serde(default)]
    pub location: Location,
    pub primary_module: Option<Module>,
    #[serde(default)]
    pub uris: HashMap<String, String>,
    pub public_settings: Option<PublicSettings>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
    pub address2: String,
    pub zip: String,
    pub time_zone: String,
    pub country_code: String,
    pub state_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(default)]
    pub manufacturer_name: String,
    #[serde(default)]
    pub model_name: String,
    pub maximum_power: Option<f64>,
    pub temperature_coef: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSettings {
    #[serde(default)]
    pub is_public: bool,
}
