use crate::api::endpoint::{self, Endpoint};
use crate::api::Error;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use url::Url;

pub const API_KEY: &str = "api_key";
pub const VERSION: &str = "version";
pub const API_VERSION: &str = "1.0.0";

/// Site an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SiteId {
    /// The client's active site, resolved on first use.
    #[default]
    Active,
    Id(u64),
}

impl From<u64> for SiteId {
    fn from(id: u64) -> Self {
        SiteId::Id(id)
    }
}

/// Query arguments. Keys are encoded in sorted order, values of a key in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(BTreeMap<String, Vec<String>>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Replace all values of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), vec![value.into()]);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Form-encode the arguments (`+` for space, reserved characters percent-escaped).
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.0 {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Args::new();
        for (key, value) in iter {
            args.add(key, value);
        }
        args
    }
}

/// The epoch stands in for an unset timestamp and is never sent.
fn is_unset(timestamp: &NaiveDateTime) -> bool {
    *timestamp == NaiveDateTime::default()
}

/// Build the `start<prefix>` / `end<prefix>` arguments of a time range, formatted per `layout`.
///
/// `NaiveDateTime::default()` (1970-01-01 00:00:00) marks an unset bound and fails with
/// [`Error::Config`], so that exact instant cannot be sent as a bound. Monitoring data never
/// reaches back that far.
pub fn time_range_args(
    start: NaiveDateTime,
    end: NaiveDateTime,
    prefix: &str,
    layout: &str,
) -> Result<Args, Error> {
    if is_unset(&start) {
        return Err(Error::Config(format!("start{} is not set", prefix)));
    }
    if is_unset(&end) {
        return Err(Error::Config(format!("end{} is not set", prefix)));
    }

    let mut args = Args::new();
    args.set(format!("start{}", prefix), start.format(layout).to_string())
        .set(format!("end{}", prefix), end.format(layout).to_string());
    Ok(args)
}

/// One GET against the API: endpoint template, the values of its placeholders and query args.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    pub endpoint: &'a Endpoint,
    pub site: SiteId,
    pub serial_number: Option<&'a str>,
    pub args: Args,
}

impl<'a> Request<'a> {
    pub fn new(endpoint: &'a Endpoint) -> Self {
        Self {
            endpoint,
            site: SiteId::Active,
            serial_number: None,
            args: Args::new(),
        }
    }

    pub fn site(mut self, site: impl Into<SiteId>) -> Self {
        self.site = site.into();
        self
    }

    pub fn serial_number(mut self, serial_number: &'a str) -> Self {
        self.serial_number = Some(serial_number);
        self
    }

    pub fn args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    pub fn arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.set(key, value);
        self
    }

    pub fn needs_site_id(&self) -> bool {
        endpoint::needs_site_id(self.endpoint)
    }
}

/// Compose the full URL of `endpoint` under `base`.
///
/// Placeholder segments are substituted (and escaped) from `site_id` / `serial_number`; the
/// API key and version are added to `args`, replacing any caller-supplied values.
pub fn build_url(
    base: &str,
    endpoint: &Endpoint,
    site_id: Option<u64>,
    serial_number: Option<&str>,
    api_key: &str,
    args: &Args,
) -> Result<Url, Error> {
    let mut url =
        Url::parse(base).map_err(|e| Error::Config(format!("invalid base url {:?}: {}", base, e)))?;

    let mut path = Vec::new();
    for segment in endpoint.split('/').filter(|s| !s.is_empty()) {
        let segment = match segment {
            endpoint::SITE_ID => site_id
                .map(|id| id.to_string())
                .ok_or_else(|| Error::Config(format!("{} requires a site id", endpoint)))?,
            endpoint::SERIAL_NUMBER => serial_number
                .map(String::from)
                .ok_or_else(|| Error::Config(format!("{} requires a serial number", endpoint)))?,
            other => String::from(other),
        };
        path.push(segment);
    }

    if !path.is_empty() {
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("base url {:?} cannot carry a path", base)))?
            .pop_if_empty()
            .extend(&path);
    }

    let mut args = args.clone();
    args.set(API_KEY, api_key).set(VERSION, API_VERSION);
    url.set_query(Some(&args.encode()));

    Ok(url)
}
