//! Storage-backend client.

use log::debug;

use crate::config::LoaderConfig;
use crate::error::{LoaderError, LoaderResult};
use crate::records::RouteRecord;

/// Blocking HTTP client for the storage backend.
pub struct StorageClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl StorageClient {
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch the route list and select the record matching `route_name`.
    ///
    /// The list endpoint is used (rather than `GET /routes/<name>`) so a
    /// single round-trip serves both the existence check and the details.
    pub fn fetch_route_details(&self, route_name: &str) -> LoaderResult<RouteRecord> {
        let url = format!("{}/routes", self.base_url);
        debug!("fetching route list from {url}");

        let records: Vec<RouteRecord> = self
            .http
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;

        select_route(records, route_name)
    }
}

/// Pick the record whose name matches exactly.
pub(crate) fn select_route(
    records: Vec<RouteRecord>,
    route_name: &str,
) -> LoaderResult<RouteRecord> {
    records
        .into_iter()
        .find(|r| r.name == route_name)
        .ok_or_else(|| LoaderError::RouteNotFound(route_name.to_string()))
}
