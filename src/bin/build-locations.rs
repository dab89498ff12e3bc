//! Build `locations_out.geojson` from scratch out of `subscriptions.json`.
//!
//! Takes no arguments; file locations come from `jotigeo.hcl` in the current
//! directory when present, the historical defaults otherwise.
//!

use eyre::Result;

use jotigeo::{build, init_logging, version, Paths};

fn main() -> Result<()> {
    // Initialise logging.
    //
    init_logging();

    eprintln!("{}", version());

    let paths = Paths::load(None)?;
    build::run(&paths)?;

    Ok(())
}
