//! Enrich an existing `FeatureCollection` with the game `area` of each group.
//!
//! Every feature must name a subscribed group: an unmatched name aborts the whole
//! run, which doubles as a check that the map and the feed are in sync.  The
//! `description` blurb is dropped on the way, everything else keeps its place.
//!

use serde_json::Value;
use tracing::{info, trace};

use crate::config::Paths;
use crate::error::{Error, Result};
use crate::geojson::FeatureCollection;
use crate::subscriptions::Subscriptions;

/// Inject `area` into every feature, dropping `description`.
///
/// Each feature ends up with the same properties minus `description` plus `area`,
/// `name` included, in unchanged order.  `area` overwrites in place when the key
/// already exists and is appended otherwise.
///
#[tracing::instrument(skip(geo, subs))]
pub fn collection(geo: &mut FeatureCollection, subs: &Subscriptions) -> Result<()> {
    for feature in &mut geo.features {
        let name = feature
            .properties
            .get("name")
            .and_then(Value::as_str)
            .ok_or(Error::NoName)?
            .to_owned();

        let area = subs
            .area_of(&name)
            .ok_or_else(|| Error::UnmatchedName(name.clone()))?
            .to_owned();

        feature
            .properties
            .shift_remove("description")
            .ok_or_else(|| Error::NoDescription(name.clone()))?;
        feature.properties.insert("area".into(), Value::from(area));
    }
    Ok(())
}

/// File-to-file run: read both inputs, write the merged collection.
///
/// Nothing is written unless the whole collection enriched.
///
#[tracing::instrument]
pub fn run(paths: &Paths) -> Result<()> {
    trace!("reading {:?} and {:?}", paths.locations, paths.subscriptions);

    let subs = Subscriptions::load(&paths.subscriptions)?;
    let mut geo = FeatureCollection::load(&paths.locations)?;

    collection(&mut geo, &subs)?;
    geo.save(&paths.output)?;

    info!("{} features written to {:?}", geo.features.len(), paths.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriptions() -> Subscriptions {
        serde_json::from_str(
            r#"{"data":[
                {"name":"Park","area":"North","lat":1.5,"long":2.5},
                {"name":"Mill","area":"South","lat":3.5,"long":4.5}
            ]}"#,
        )
        .unwrap()
    }

    fn geojson(features: &str) -> FeatureCollection {
        let raw = format!(r#"{{"type":"FeatureCollection","features":[{features}]}}"#);
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_area_injected_description_dropped() -> Result<()> {
        let mut geo = geojson(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[2.5,1.5]},"properties":{"name":"Park","description":"x"}}"#,
        );

        collection(&mut geo, &subscriptions())?;

        let props = &geo.features[0].properties;
        assert_eq!(
            r#"{"name":"Park","area":"North"}"#,
            serde_json::to_string(props).unwrap()
        );
        Ok(())
    }

    #[test]
    fn test_other_properties_keep_their_order() -> Result<()> {
        let mut geo = geojson(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[2.5,1.5]},"properties":{"zip":"5688","name":"Park","description":"x","phone":"112"}}"#,
        );

        collection(&mut geo, &subscriptions())?;

        assert_eq!(
            r#"{"zip":"5688","name":"Park","phone":"112","area":"North"}"#,
            serde_json::to_string(&geo.features[0].properties).unwrap()
        );
        Ok(())
    }

    #[test]
    fn test_existing_area_overwritten_in_place() -> Result<()> {
        let mut geo = geojson(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[2.5,1.5]},"properties":{"area":"stale","name":"Mill","description":"x"}}"#,
        );

        collection(&mut geo, &subscriptions())?;

        assert_eq!(
            r#"{"area":"South","name":"Mill"}"#,
            serde_json::to_string(&geo.features[0].properties).unwrap()
        );
        Ok(())
    }

    #[test]
    fn test_unmatched_name_names_the_group() {
        let mut geo = geojson(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[0.0,0.0]},"properties":{"name":"Ghost","description":"x"}}"#,
        );

        let res = collection(&mut geo, &subscriptions());
        match res {
            Err(Error::UnmatchedName(name)) => assert_eq!("Ghost", name),
            _ => panic!("expected UnmatchedName"),
        }
    }

    #[test]
    fn test_missing_description_is_fatal() {
        let mut geo = geojson(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[2.5,1.5]},"properties":{"name":"Park"}}"#,
        );

        let res = collection(&mut geo, &subscriptions());
        assert!(matches!(res, Err(Error::NoDescription(name)) if name == "Park"));
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let mut geo = geojson(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[2.5,1.5]},"properties":{"description":"x"}}"#,
        );

        let res = collection(&mut geo, &subscriptions());
        assert!(matches!(res, Err(Error::NoName)));
    }
}
