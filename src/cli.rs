use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "brandkit",
    about = "Asset and demo-data tooling for the ProjectFlow mobile app"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, default_value = crate::config::CONFIG_NAME)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a commented brandkit.toml template
    Init,

    /// Clean transparent areas of a PNG so no black frame remains (modified in place)
    Clean {
        /// PNG file path
        path: PathBuf,

        /// Alpha below this becomes fully transparent [default: 128]
        #[arg(long = "alpha")]
        alpha_threshold: Option<u8>,

        /// Do not clear semi-transparent black pixels
        #[arg(long)]
        no_black_bleed: bool,

        /// RGB max for "black" in the bleed rule [default: 24]
        #[arg(long = "black-max")]
        black_rgb_max: Option<u8>,

        /// Make a solid black background transparent (for the lockup)
        #[arg(long)]
        remove_black_bg: bool,

        /// RGB max for the black background [default: 32]
        #[arg(long)]
        black_bg_max: Option<u8>,
    },

    /// Auto-crop app icon whitespace and re-square it at the original size
    CropIcon {
        /// Path to PNG icon (e.g. apps/mobile/assets/icon/app_icon.png)
        #[arg(long)]
        path: PathBuf,

        /// Padding ratio around detected content [default: 0.025]
        #[arg(long)]
        pad: Option<f64>,

        /// White-difference threshold; higher crops more aggressively [default: 12]
        #[arg(long)]
        threshold: Option<u8>,
    },

    /// Derive the icon-only mark and the background-free lockup from a logo
    Logo {
        /// Source PNG path
        #[arg(long)]
        src: PathBuf,

        /// Output icon-only PNG path
        #[arg(long)]
        out_mark: PathBuf,

        /// Output full-logo PNG path
        #[arg(long)]
        out_lockup: PathBuf,

        /// Padding ratio [default: 0.02]
        #[arg(long)]
        pad: Option<f64>,

        /// White threshold for detecting the icon area [default: 240]
        #[arg(long)]
        white_threshold: Option<u8>,

        /// Black threshold for removing the background [default: 16]
        #[arg(long)]
        black_threshold: Option<u8>,

        /// Side length of the mark output [default: 1024]
        #[arg(long)]
        mark_size: Option<u32>,
    },

    /// Render launcher icon PNGs from the white brand SVG
    LauncherIcons {
        /// Project root the asset paths are relative to
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Create a demo project with sample epics and tasks in OpenProject
    Seed {
        /// OpenProject instance URL (e.g. https://openproject.example.com)
        #[arg(long, env = "OPENPROJECT_URL")]
        url: Option<String>,

        /// API key (My account -> Access tokens)
        #[arg(long, env = "OPENPROJECT_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Name of the project to create
        #[arg(long)]
        project_name: Option<String>,

        /// Project identifier (used in URLs, no spaces)
        #[arg(long)]
        project_identifier: Option<String>,

        /// Print what would be created without calling the API
        #[arg(long)]
        dry_run: bool,
    },
}
