use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::launcher::{generate, manual_instructions, Converter, Outcome, ToolFinder};

pub fn run(cli: &Cli, root: &Path) -> Result<()> {
    run_with(cli, root, &ToolFinder::system())
}

/// Like [`run`], resolving converter executables through `tools`.
pub fn run_with(cli: &Cli, root: &Path, tools: &ToolFinder) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let targets = config.launcher.rooted(root);

    match generate(&targets, &Converter::PRIORITY, tools)? {
        Outcome::Written(converter) => {
            for png in targets.outputs() {
                println!("{} [{}] Wrote {}", "✓".green(), converter, png.display());
            }
            println!(
                "\nLauncher icons updated. Next: cd apps/mobile && dart run flutter_launcher_icons"
            );
            Ok(())
        }
        Outcome::Unavailable => {
            eprintln!("{}", manual_instructions(&targets));
            bail!("no SVG converter could render {}", targets.svg.display())
        }
    }
}
