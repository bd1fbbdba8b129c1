use crate::model::{Date, DateTime};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetComponentsResponse {
    pub reporters: Reporters,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reporters {
    pub count: u32,
    pub list: Vec<Component>,
}

/// An inverter or SMI reporting to the monitoring platform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    pub serial_number: String,
    #[serde(rename = "kWpDC")]
    pub kwp_dc: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetInventoryResponse {
    pub inventory: Inventory,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub meters: Vec<MeterEquipment>,
    pub sensors: Vec<SensorEquipment>,
    pub gateways: Vec<GatewayEquipment>,
    pub batteries: Vec<BatteryEquipment>,
    pub inverters: Vec<InverterEquipment>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InverterEquipment {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub communication_method: String,
    pub cpu_version: String,
    #[serde(rename = "SN")]
    pub serial_number: String,
    pub connected_optimizers: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatteryEquipment {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub firmware_version: String,
    pub connected_inverter_sn: String,
    pub nameplate_capacity: f64,
    #[serde(rename = "SN")]
    pub serial_number: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GatewayEquipment {
    pub name: String,
    pub firmware_version: String,
    #[serde(rename = "SN")]
    pub serial_number: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeterEquipment {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub firmware_version: String,
    #[serde(rename = "connectedSolaredgeDeviceSN")]
    pub connected_solaredge_device_sn: String,
    #[serde(rename = "type")]
    pub meter_type: String,
    pub form: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SensorEquipment {
    #[serde(rename = "connectedSolaredgeDeviceSN")]
    pub connected_solaredge_device_sn: String,
    pub id: String,
    pub connected_to: String,
    pub category: String,
    #[serde(rename = "type")]
    pub sensor_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetInverterTechnicalDataResponse {
    pub data: InverterTechnicalData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InverterTechnicalData {
    pub count: u32,
    pub telemetries: Vec<InverterTelemetry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InverterTelemetry {
    pub date: DateTime,
    pub total_active_power: Option<f64>,
    pub dc_voltage: Option<f64>,
    pub ground_fault_resistance: Option<f64>,
    pub power_limit: Option<f64>,
    pub total_energy: Option<f64>,
    pub temperature: Option<f64>,
    pub inverter_mode: Option<String>,
    pub operation_mode: Option<u32>,
    #[serde(rename = "L1Data")]
    pub l1_data: Option<PhaseData>,
    #[serde(rename = "L2Data")]
    pub l2_data: Option<PhaseData>,
    #[serde(rename = "L3Data")]
    pub l3_data: Option<PhaseData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseData {
    pub ac_current: Option<f64>,
    pub ac_voltage: Option<f64>,
    pub ac_frequency: Option<f64>,
    pub apparent_power: Option<f64>,
    pub active_power: Option<f64>,
    pub reactive_power: Option<f64>,
    pub cos_phi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetEquipmentChangeLogResponse {
    #[serde(rename = "ChangeLog")]
    pub change_log: ChangeLog,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChangeLog {
    pub count: u32,
    pub list: Vec<ChangeLogEntry>,
}

/// A component replacement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogEntry {
    pub serial_number: String,
    pub part_number: String,
    pub date: Date,
}
