use std::io;
use std::process::ExitCode;

use anyhow::Context;
use boltcal_icons::{Config, IconError, capability, driver, logger};

fn main() -> anyhow::Result<ExitCode> {
    logger::init();

    let config = Config::default();
    let mut stdout = io::stdout().lock();
    match driver::run(&config, capability::png_support, &mut stdout) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // already reported on stdout by the driver
        Err(IconError::MissingCapability) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e).with_context(|| format!("generating icons in {}", config.out_dir.display())),
    }
}
