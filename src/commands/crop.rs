use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::crop::crop_icon_file;

pub fn run(cli: &Cli, path: &Path, pad: Option<f64>, threshold: Option<u8>) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let mut opts = config.crop;
    if let Some(pad) = pad {
        opts.pad = pad;
    }
    if let Some(threshold) = threshold {
        opts.threshold = threshold;
    }
    opts.validate()?;

    crop_icon_file(path, &opts)?;
    println!("{} Cropped {}", "✓".green(), path.display());
    Ok(())
}
