use chrono::{NaiveDate, NaiveDateTime};
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Layout of date-only values on the wire (`YYYY-MM-DD`).
pub const DATE_LAYOUT: &str = "%Y-%m-%d";
/// Layout of timestamps on the wire (`YYYY-MM-DD HH:MM:SS`).
pub const DATE_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// A calendar date, as sent by the API (`"2023-03-04"`).
///
/// Parsing is exact: a value carrying a time of day is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(pub NaiveDate);

/// A timestamp, as sent by the API (`"2023-03-04 14:00:00"`). UTC is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateTime(pub NaiveDateTime);

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(timestamp: NaiveDateTime) -> Self {
        DateTime(timestamp)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_LAYOUT))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_LAYOUT))
    }
}

impl Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = String::deserialize(d)?;

        NaiveDate::parse_from_str(&value, DATE_LAYOUT)
            .map(Date)
            .map_err(|e| serde::de::Error::custom(format!("invalid date {:?}: {}", value, e)))
    }
}

impl Serialize for DateTime {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = String::deserialize(d)?;

        NaiveDateTime::parse_from_str(&value, DATE_TIME_LAYOUT)
            .map(DateTime)
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", value, e)))
    }
}

/// Aggregation period for energy queries.
///
/// The server limits the time range per unit: `QuarterOfAnHour` and `Hour` allow at most one
/// month, `Day` at most one year. Wider ranges are rejected with an API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    QuarterOfAnHour,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeUnit::QuarterOfAnHour => "QUARTER_OF_AN_HOUR",
            TimeUnit::Hour => "HOUR",
            TimeUnit::Day => "DAY",
            TimeUnit::Week => "WEEK",
            TimeUnit::Month => "MONTH",
            TimeUnit::Year => "YEAR",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Battery state code reported in storage telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BatteryState {
    Invalid = 0,
    Standby = 1,
    ThermalManagement = 2,
    Enabled = 3,
    Fault = 4,
    Unsupported = 255,
}

impl<'de> Deserialize<'de> for BatteryState {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(d)?;

        Value::as_u64(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid batteryState: {}", value)))
            .map(|v| match num::FromPrimitive::from_u64(v) {
                Some(state) => state,
                None => BatteryState::Unsupported,
            })
    }
}

impl Serialize for BatteryState {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(*self as u8)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_marshals_to_layout() {
        let output = serde_json::to_string(&Date(date(2023, 3, 4))).unwrap();
        assert_eq!(r#""2023-03-04""#, output);
    }

    #[test]
    fn date_unmarshals_exact_layout() {
        let output: Date = serde_json::from_str(r#""2023-03-04""#).unwrap();
        assert_eq!(Date(date(2023, 3, 4)), output);
    }

    #[test]
    fn date_rejects_timestamp() {
        assert!(serde_json::from_str::<Date>(r#""2023-03-04 14:00:00""#).is_err());
    }

    #[test]
    fn date_rejects_partial_and_non_string() {
        assert!(serde_json::from_str::<Date>(r#""2023-03""#).is_err());
        assert!(serde_json::from_str::<Date>("20230304").is_err());
    }

    #[test]
    fn date_time_round_trip() {
        let timestamp = date(2023, 3, 4).and_hms_opt(14, 0, 0).unwrap();
        let output = serde_json::to_string(&DateTime(timestamp)).unwrap();
        assert_eq!(r#""2023-03-04 14:00:00""#, output);

        let parsed: DateTime = serde_json::from_str(&output).unwrap();
        assert_eq!(DateTime(timestamp), parsed);
    }

    #[test]
    fn date_time_rejects_date() {
        assert!(serde_json::from_str::<DateTime>(r#""2023-03-04""#).is_err());
        assert!(serde_json::from_str::<DateTime>(r#""2023-03-04T14:00:00""#).is_err());
    }

    #[test]
    fn time_unit_names() {
        assert_eq!("QUARTER_OF_AN_HOUR", TimeUnit::QuarterOfAnHour.as_str());
        assert_eq!(
            r#""QUARTER_OF_AN_HOUR""#,
            serde_json::to_string(&TimeUnit::QuarterOfAnHour).unwrap()
        );
        assert_eq!(
            TimeUnit::Week,
            serde_json::from_str::<TimeUnit>(r#""WEEK""#).unwrap()
        );
    }

    #[test]
    fn battery_state_codes() {
        assert_eq!(
            BatteryState::Enabled,
            serde_json::from_str::<BatteryState>("3").unwrap()
        );
        assert_eq!(
            BatteryState::Unsupported,
            serde_json::from_str::<BatteryState>("42").unwrap()
        );
        assert!(serde_json::from_str::<BatteryState>(r#""3""#).is_err());
    }
}
