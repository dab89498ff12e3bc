//! Explicit file locations for the pipelines.
//!
//! The original scripts hardcoded their filenames; those stay as the defaults and a
//! small `jotigeo.hcl` in the current directory can override them:
//!
//! ```hcl
//! version = 1
//!
//! subscriptions = "subscriptions.json"
//! locations = "locations.geojson"
//! output = "locations_out.geojson"
//! ```
//!

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::trace;

use crate::error::{Error, Result};

/// Default subscriptions dataset.
pub const DEF_SUBSCRIPTIONS: &str = "subscriptions.json";
/// Default GeoJSON input, enrich pipeline only.
pub const DEF_LOCATIONS: &str = "locations.geojson";
/// Default output, shared by both merge pipelines.
pub const DEF_OUTPUT: &str = "locations_out.geojson";

/// Paths file name.
const CONFIG: &str = "jotigeo.hcl";

/// Current paths file version.
const PATHS_FILE_VER: usize = 1;

/// Where each pipeline reads and writes.  Everything is relative to the current
/// directory unless the paths file says otherwise.
///
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Paths {
    /// Version number for safety.
    pub version: usize,
    /// Subscriptions dataset (JSON).
    pub subscriptions: PathBuf,
    /// Existing GeoJSON input, enrich pipeline only.
    pub locations: PathBuf,
    /// Merged GeoJSON output.
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            version: PATHS_FILE_VER,
            subscriptions: PathBuf::from(DEF_SUBSCRIPTIONS),
            locations: PathBuf::from(DEF_LOCATIONS),
            output: PathBuf::from(DEF_OUTPUT),
        }
    }
}

impl Paths {
    /// Load the paths file, or fall back to the historical defaults when there is
    /// none.  A file named explicitly must exist.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Self> {
        let fname = match fname {
            Some(fname) => fname.to_owned(),
            None => {
                let def = PathBuf::from(CONFIG);
                if !def.exists() {
                    trace!("no {CONFIG}, using defaults");
                    return Ok(Paths::default());
                }
                def
            }
        };

        trace!("loading paths from {fname:?}");

        let data = fs::read_to_string(&fname).map_err(|e| Error::Read {
            path: fname.clone(),
            source: e,
        })?;
        let paths: Paths = hcl::from_str(&data).map_err(|e| Error::Config {
            path: fname,
            source: e,
        })?;

        if paths.version != PATHS_FILE_VER {
            return Err(Error::BadFileVersion(paths.version));
        }
        Ok(paths)
    }
}
