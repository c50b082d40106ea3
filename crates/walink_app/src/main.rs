mod platform;

use std::path::PathBuf;

use anyhow::Result;
use app_logging::LogDestination;
use log::warn;

fn main() -> Result<()> {
    app_logging::initialize(LogDestination::File);

    let data_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            warn!("Could not determine working directory, using '.': {}", err);
            PathBuf::from(".")
        }
    };
    platform::run_app(data_dir)
}
