use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::logo::{process_logo, LogoOptions};

#[derive(Debug, Default)]
pub struct Overrides {
    pub pad: Option<f64>,
    pub white_threshold: Option<u8>,
    pub black_threshold: Option<u8>,
    pub mark_size: Option<u32>,
}

impl Overrides {
    pub fn apply(&self, opts: LogoOptions) -> LogoOptions {
        LogoOptions {
            pad: self.pad.unwrap_or(opts.pad),
            white_threshold: self.white_threshold.unwrap_or(opts.white_threshold),
            black_threshold: self.black_threshold.unwrap_or(opts.black_threshold),
            mark_size: self.mark_size.unwrap_or(opts.mark_size),
        }
    }
}

pub fn run(
    cli: &Cli,
    src: &Path,
    out_mark: &Path,
    out_lockup: &Path,
    overrides: Overrides,
) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let opts = overrides.apply(config.logo);
    opts.validate()?;

    process_logo(src, out_mark, out_lockup, &opts)?;
    println!("{} Mark: {}", "✓".green(), out_mark.display());
    println!("{} Lockup: {}", "✓".green(), out_lockup.display());
    Ok(())
}
