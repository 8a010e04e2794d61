use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::clean::{clean_file, CleanOptions};
use crate::cli::Cli;
use crate::config::Config;

/// Values given on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub alpha_threshold: Option<u8>,
    pub no_black_bleed: bool,
    pub black_rgb_max: Option<u8>,
    pub remove_black_bg: bool,
    pub black_bg_max: Option<u8>,
}

impl Overrides {
    pub fn apply(&self, mut opts: CleanOptions) -> CleanOptions {
        if let Some(v) = self.alpha_threshold {
            opts.alpha_threshold = v;
        }
        if self.no_black_bleed {
            opts.black_bleed = false;
        }
        if let Some(v) = self.black_rgb_max {
            opts.black_rgb_max = v;
        }
        if self.remove_black_bg {
            opts.remove_black_bg = true;
        }
        if let Some(v) = self.black_bg_max {
            opts.black_bg_max = v;
        }
        opts
    }
}

pub fn run(cli: &Cli, path: &Path, overrides: Overrides) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let opts = overrides.apply(config.clean);
    tracing::debug!(?opts, "cleaning {}", path.display());

    let changed = clean_file(path, &opts)?;
    println!(
        "{} Cleaned {} ({} pixels cleared)",
        "✓".green(),
        path.display(),
        changed
    );
    Ok(())
}
