//! Fetch the live subscriptions feed from the Jotihunt API.
//!
//! The API serves coordinates as strings and leaves `area` empty for groups that
//! are not playing; both quirks are resolved here so the merge pipelines only ever
//! see the on-disk dataset shape.
//!

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{info, trace, warn};

use crate::config::Paths;
use crate::error::{Error, Result};
use crate::subscriptions::{Group, Subscriptions};

/// Live subscriptions feed.
const SUBSCRIPTIONS_URL: &str = "https://jotihunt.nl/api/2.0/subscriptions";

/// One group as served by the API.
///
#[derive(Clone, Debug, Deserialize)]
struct ApiGroup {
    name: String,
    /// Latitude, served as a string.
    lat: String,
    /// Longitude, served as a string.
    long: String,
    /// Absent for groups that are not playing.
    area: Option<String>,
}

/// API envelope, same `data` key as the on-disk dataset.
///
#[derive(Debug, Deserialize)]
struct ApiSubscriptions {
    data: Vec<ApiGroup>,
}

impl TryFrom<&ApiGroup> for Group {
    type Error = Error;

    /// Parse the string coordinates.  The caller has already filtered out groups
    /// without an `area`.
    ///
    fn try_from(group: &ApiGroup) -> Result<Self> {
        let lat = group.lat.parse::<f64>().map_err(|_| Error::BadCoordinate {
            name: group.name.clone(),
            value: group.lat.clone(),
        })?;
        let long = group.long.parse::<f64>().map_err(|_| Error::BadCoordinate {
            name: group.name.clone(),
            value: group.long.clone(),
        })?;

        Ok(Group {
            name: group.name.clone(),
            area: group.area.clone().unwrap_or_default(),
            lat,
            long,
        })
    }
}

/// Knows where the feed lives and how to turn it into a dataset.
///
#[derive(Clone, Debug)]
pub struct Fetcher {
    /// Base URL, the public API unless overridden.
    url: String,
    /// reqwest blocking client.
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_url(SUBSCRIPTIONS_URL)
    }

    /// Point at another endpoint (tests, mirrors).
    ///
    pub fn with_url(url: &str) -> Self {
        Fetcher {
            url: url.to_owned(),
            client: Client::new(),
        }
    }

    /// GET the feed and convert it into the on-disk dataset shape.
    ///
    /// Groups without an `area` can not take part in the merge and are dropped,
    /// with a count in the log.
    ///
    #[tracing::instrument(skip(self))]
    pub fn fetch(&self) -> Result<Subscriptions> {
        trace!("fetching {}…", self.url);

        let resp = self
            .client
            .get(&self.url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| Error::Fetch {
                url: self.url.clone(),
                source: e,
            })?;
        let raw: ApiSubscriptions = resp.json().map_err(|e| Error::Fetch {
            url: self.url.clone(),
            source: e,
        })?;

        let total = raw.data.len();
        let data = raw
            .data
            .iter()
            .filter(|group| group.area.is_some())
            .map(Group::try_from)
            .collect::<Result<Vec<_>>>()?;

        if data.len() != total {
            warn!("{} group(s) without an area dropped", total - data.len());
        }
        info!("{} groups fetched", data.len());

        Ok(Subscriptions { data })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch and store at the configured subscriptions path.
///
#[tracing::instrument]
pub fn run(paths: &Paths) -> Result<()> {
    let subs = Fetcher::new().fetch()?;
    subs.save(&paths.subscriptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const FEED: &str = r#"{"data":[
        {"name":"Scouting Park","lat":"51.5","long":"4.5","area":"alpha"},
        {"name":"Scouting Nieuw","lat":"51.0","long":"5.0","area":null}
    ]}"#;

    #[test]
    fn test_fetch_converts_api_records() {
        let server = MockServer::start();
        let feed = server.mock(|when, then| {
            when.method(GET).path("/api/2.0/subscriptions");
            then.status(200)
                .header("content-type", "application/json")
                .body(FEED);
        });

        let subs = Fetcher::with_url(&server.url("/api/2.0/subscriptions"))
            .fetch()
            .unwrap();

        feed.assert();
        assert_eq!(
            vec![Group {
                name: "Scouting Park".to_string(),
                area: "alpha".to_string(),
                lat: 51.5,
                long: 4.5,
            }],
            subs.data
        );
    }

    #[test]
    fn test_fetch_bad_coordinate() {
        let server = MockServer::start();
        let _feed = server.mock(|when, then| {
            when.method(GET).path("/feed");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"data":[{"name":"Scouting Park","lat":"fifty","long":"4.5","area":"alpha"}]}"#);
        });

        let res = Fetcher::with_url(&server.url("/feed")).fetch();
        assert!(
            matches!(res, Err(Error::BadCoordinate { name, value }) if name == "Scouting Park" && value == "fifty")
        );
    }

    #[test]
    fn test_fetch_http_error() {
        let server = MockServer::start();
        let _feed = server.mock(|when, then| {
            when.method(GET).path("/feed");
            then.status(500);
        });

        let res = Fetcher::with_url(&server.url("/feed")).fetch();
        assert!(matches!(res, Err(Error::Fetch { .. })));
    }
}
