//! Error module
//!

use std::path::PathBuf;

use thiserror::Error;

/// All the ways a run can fail.  Everything is fatal: no retry, no partial output.
///
#[derive(Debug, Error)]
pub enum Error {
    #[error("Bad paths file version {0}")]
    BadFileVersion(usize),
    #[cfg(feature = "fetch")]
    #[error("Bad coordinate {value} for {name}")]
    BadCoordinate { name: String, value: String },
    #[error("Error reading paths file {path:?} ({source})")]
    Config { path: PathBuf, source: hcl::Error },
    #[cfg(feature = "fetch")]
    #[error("Can not fetch {url} ({source})")]
    Fetch { url: String, source: reqwest::Error },
    #[error("No subscription matching name {0}")]
    UnmatchedName(String),
    #[error("Feature {0} has no description property")]
    NoDescription(String),
    #[error("Feature without a name property")]
    NoName,
    #[error("Invalid JSON in {path:?} ({source})")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Can not read {path:?} ({source})")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Can not serialize ({0})")]
    Serialize(serde_json::Error),
    #[error("Can not write {path:?} ({source})")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
