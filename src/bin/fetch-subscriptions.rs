//! Retrieve the live subscriptions feed and store it as `subscriptions.json`, the
//! dataset the two merge tools read.
//!
//! Takes no arguments; the target path comes from `jotigeo.hcl` in the current
//! directory when present, the historical default otherwise.
//!

use eyre::Result;

use jotigeo::{fetch, init_logging, version, Paths};

fn main() -> Result<()> {
    // Initialise logging.
    //
    init_logging();

    eprintln!("{}", version());

    let paths = Paths::load(None)?;
    fetch::run(&paths)?;

    Ok(())
}
