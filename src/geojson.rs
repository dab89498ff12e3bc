//! Minimal GeoJSON support, only what the game map needs.
//!
//! Point features inside a single `FeatureCollection`, with free-form properties.
//! The `type` discriminators are closed enums, so anything else in an input file is
//! rejected at parse time instead of being carried along blindly.  Properties keep
//! their on-disk order (`serde_json` with `preserve_order`), which makes rewriting a
//! collection a faithful operation: same keys, same order, non-ASCII text untouched.
//!

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum CollectionType {
    #[default]
    FeatureCollection,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum FeatureType {
    #[default]
    Feature,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum GeometryType {
    #[default]
    Point,
}

/// Point geometry.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: GeometryType,
    /// `[long, lat]`, GeoJSON axis order.
    pub coordinates: [f64; 2],
}

impl Geometry {
    /// Mind the axis order, longitude first.
    ///
    pub fn point(long: f64, lat: f64) -> Self {
        Geometry {
            kind: GeometryType::Point,
            coordinates: [long, lat],
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::point(0., 0.)
    }
}

/// A single feature.  Unknown members are refused rather than silently dropped on
/// the next rewrite.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

/// Top-level container.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: CollectionType,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Load a collection from a GeoJSON file.
    ///
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self> {
        trace!("loading geojson");

        let data = fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.into(),
            source: e,
        })?;
        let geo: FeatureCollection = serde_json::from_str(&data).map_err(|e| Error::Parse {
            path: path.into(),
            source: e,
        })?;
        Ok(geo)
    }

    /// Write the collection in one go: compact JSON, UTF-8 with non-ASCII text kept
    /// literal, no trailing newline.
    ///
    #[tracing::instrument(skip(self))]
    pub fn save(&self, path: &Path) -> Result<()> {
        trace!("writing {} features", self.features.len());

        let data = serde_json::to_string(self).map_err(Error::Serialize)?;
        fs::write(path, data).map_err(|e| Error::Write {
            path: path.into(),
            source: e,
        })
    }
}
