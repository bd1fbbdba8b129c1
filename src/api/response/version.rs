use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiRelease {
    pub release: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetCurrentApiVersionResponse {
    pub version: ApiRelease,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetSupportedApiVersionsResponse {
    pub supported: Vec<ApiRelease>,
}

impl GetSupportedApiVersionsResponse {
    pub fn releases(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(|version| version.release.as_str())
    }
}
