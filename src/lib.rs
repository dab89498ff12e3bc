//! Library part of the `jotigeo` toolset.
//!
//! [Jotihunt] publishes the list of subscribed scouting groups as a JSON feed and the
//! game map wants GeoJSON.  This crate bridges the two with three small pipelines,
//! each one also available as a binary:
//!
//! - `build` creates a brand new `FeatureCollection` out of the subscriptions dataset,
//! - `enrich` injects each group's game `area` into an existing `FeatureCollection`,
//! - `fetch` (feature-gated, default on) retrieves the live feed and stores it as
//!   the dataset the other two read.
//!
//! Every pipeline is a single straight-line transformation, run once per invocation:
//! read the input(s), transform, write one output file.  All failures are fatal and
//! produce no partial output.
//!
//! The file locations are fixed by tradition (`subscriptions.json`,
//! `locations.geojson`, `locations_out.geojson`, all relative to the current
//! directory) and can be overridden through a small `jotigeo.hcl` file, see [Paths].
//!
//! [Jotihunt]: https://jotihunt.nl/
//!

pub mod build;
pub mod enrich;
#[cfg(feature = "fetch")]
pub mod fetch;

mod config;
mod error;
mod geojson;
mod logging;
mod subscriptions;

pub use config::*;
pub use error::*;
pub use geojson::*;
pub use logging::*;
pub use subscriptions::*;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
///
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
