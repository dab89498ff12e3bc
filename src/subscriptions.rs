//! The subscriptions dataset, join source for both merge pipelines.
//!
//! On disk this is the `{"data": [...]}` envelope the Jotihunt API serves, with
//! coordinates already as numbers.  Lookups by group name are a plain linear scan,
//! first match wins, which is fine at the scale of one game (a few hundred groups).
//!

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{Error, Result};
use crate::geojson::{Feature, Geometry};

/// One subscribed group.  `name` is assumed unique within the dataset.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Group {
    /// Group name, the join key.
    pub name: String,
    /// Game area the group belongs to.
    pub area: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub long: f64,
}

impl From<&Group> for Feature {
    /// One map point per record, carrying only `name` and `area`.
    ///
    /// Coordinates use the GeoJSON `[long, lat]` axis order.
    ///
    fn from(group: &Group) -> Self {
        let mut properties = Map::new();
        properties.insert("name".into(), Value::from(group.name.as_str()));
        properties.insert("area".into(), Value::from(group.area.as_str()));

        Feature {
            geometry: Geometry::point(group.long, group.lat),
            properties,
            ..Feature::default()
        }
    }
}

/// The `{"data": [...]}` envelope.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Subscriptions {
    pub data: Vec<Group>,
}

impl Subscriptions {
    /// Load the dataset from a JSON file.
    ///
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self> {
        trace!("loading subscriptions");

        let data = fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.into(),
            source: e,
        })?;
        let subs: Subscriptions = serde_json::from_str(&data).map_err(|e| Error::Parse {
            path: path.into(),
            source: e,
        })?;
        Ok(subs)
    }

    /// Write the dataset, same formatting rules as the GeoJSON output.
    ///
    #[tracing::instrument(skip(self))]
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string(self).map_err(Error::Serialize)?;
        fs::write(path, data).map_err(|e| Error::Write {
            path: path.into(),
            source: e,
        })
    }

    /// Area of the first group matching `name`, linear scan.
    ///
    pub fn area_of(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|group| group.name == name)
            .map(|group| group.area.as_str())
    }
}
