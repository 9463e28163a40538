use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::error::TransitError;
use crate::fetch::{BasicClient, HttpClient, fetch_json};
use crate::models::{Stop, StopsPage};
use crate::parser::{parse_stop, parse_stops_page};
use crate::services::StopRepository;

/// Reads stops of one transit system from a Transiter server.
pub struct TransiterClient<C = BasicClient> {
    http: C,
    base_url: Url,
    system: String,
}

impl<C: HttpClient> TransiterClient<C> {
    pub fn new(http: C, addr: &str, system: &str) -> Result<Self, TransitError> {
        let base_url = Url::parse(addr).map_err(|e| TransitError::InvalidAddress {
            addr: addr.to_string(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TransitError::InvalidAddress {
                addr: addr.to_string(),
                message: "cannot be used as a base URL".to_string(),
            });
        }
        Ok(Self {
            http,
            base_url,
            system: system.to_string(),
        })
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    /// `{addr}/systems/{system}/stops?filter_by_type=true&type=STATION[&first_id=..]`
    pub fn stations_url(&self, cursor: Option<&str>) -> Url {
        let mut url = self.endpoint(&["stops"]);
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("filter_by_type", "true")
                .append_pair("type", "STATION");
            if let Some(cursor) = cursor {
                query.append_pair("first_id", cursor);
            }
        }
        url
    }

    /// `{addr}/systems/{system}/stops/{stop_id}`
    pub fn stop_url(&self, stop_id: &str) -> Url {
        self.endpoint(&["stops", stop_id])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so path segments are always available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .push("systems")
                .push(&self.system)
                .extend(segments);
        }
        url
    }
}

#[async_trait]
impl<C: HttpClient> StopRepository for TransiterClient<C> {
    async fn fetch_stations_page(&self, cursor: Option<&str>) -> Result<StopsPage, TransitError> {
        let url = self.stations_url(cursor);
        debug!(url = %url, "Fetching station page");
        fetch_json(&self.http, url, parse_stops_page).await
    }

    async fn fetch_stop(&self, stop_id: &str) -> Result<Stop, TransitError> {
        let url = self.stop_url(stop_id);
        debug!(url = %url, "Fetching stop");
        fetch_json(&self.http, url, parse_stop).await
    }
}
