//! Merge the `area` of every subscribed group into `locations.geojson` and write
//! the result as `locations_out.geojson`.
//!
//! Takes no arguments; file locations come from `jotigeo.hcl` in the current
//! directory when present, the historical defaults otherwise.  A feature naming an
//! unknown group aborts the run, nothing is written.
//!

use eyre::Result;

use jotigeo::{enrich, init_logging, version, Paths};

fn main() -> Result<()> {
    // Initialise logging.
    //
    init_logging();

    eprintln!("{}", version());

    let paths = Paths::load(None)?;
    enrich::run(&paths)?;

    Ok(())
}
