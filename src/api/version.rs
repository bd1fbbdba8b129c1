use crate::api::response::version::{GetCurrentApiVersionResponse, GetSupportedApiVersionsResponse};
use crate::api::{endpoint, Client, Error, Request};

impl Client {
    pub async fn current_api_version(&self) -> Result<GetCurrentApiVersionResponse, Error> {
        self.call(Request::new(endpoint::CURRENT_VERSION)).await
    }

    pub async fn supported_api_versions(&self) -> Result<GetSupportedApiVersionsResponse, Error> {
        self.call(Request::new(endpoint::SUPPORTED_VERSIONS))
            .await
    }
}
