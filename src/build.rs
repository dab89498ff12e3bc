//! Build a brand new `FeatureCollection` out of the subscriptions dataset.
//!
//! Every record becomes one `Point` feature carrying only `name` and `area`, in
//! input order.
//!

use tracing::{info, trace};

use crate::config::Paths;
use crate::error::Result;
use crate::geojson::{Feature, FeatureCollection};
use crate::subscriptions::Subscriptions;

/// Turn every record into a feature, keeping input order.
///
#[tracing::instrument(skip(subs))]
pub fn collection(subs: &Subscriptions) -> FeatureCollection {
    let features: Vec<Feature> = subs.data.iter().map(Feature::from).collect();

    FeatureCollection {
        features,
        ..FeatureCollection::default()
    }
}

/// File-to-file run: read the dataset, write the collection.
///
#[tracing::instrument]
pub fn run(paths: &Paths) -> Result<()> {
    trace!("reading {:?}", paths.subscriptions);

    let subs = Subscriptions::load(&paths.subscriptions)?;
    let geo = collection(&subs);
    geo.save(&paths.output)?;

    info!("{} features written to {:?}", geo.features.len(), paths.output);
    Ok(())
}
