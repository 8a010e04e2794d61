use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::clean::CleanOptions;
use crate::crop::CropOptions;
use crate::launcher::LauncherTargets;
use crate::logo::LogoOptions;
use crate::seed::{DEFAULT_PROJECT_IDENTIFIER, DEFAULT_PROJECT_NAME};

pub const CONFIG_NAME: &str = "brandkit.toml";

/// Per-command defaults. Every section is optional; CLI flags take precedence.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub clean: CleanOptions,
    pub crop: CropOptions,
    pub logo: LogoOptions,
    pub launcher: LauncherTargets,
    pub seed: SeedConfig,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Instance URL; `OPENPROJECT_URL` and `--url` override it.
    pub url: Option<String>,
    pub project_name: String,
    pub project_identifier: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            url: None,
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            project_identifier: DEFAULT_PROJECT_IDENTIFIER.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Loads `path`, or returns the defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.crop.validate().context("Invalid [crop] section")?;
        self.logo.validate().context("Invalid [logo] section")?;
        if self.launcher.size == 0 {
            bail!("[launcher] size must be greater than 0");
        }
        if self.seed.project_identifier.contains(char::is_whitespace) {
            bail!(
                "[seed] project_identifier must not contain whitespace: '{}'",
                self.seed.project_identifier
            );
        }
        if self.seed.timeout_secs == 0 {
            bail!("[seed] timeout_secs must be greater than 0");
        }
        Ok(())
    }

    pub fn default_template() -> String {
        r#"# brandkit configuration
# Every value below is the built-in default; command-line flags override them.

# PNG transparency cleanup (`brandkit clean`)
# [clean]
# alpha_threshold = 128   # alpha below this becomes fully transparent
# black_bleed = true      # clear near-black semi-transparent fringe pixels
# black_rgb_max = 24      # channel max for "black" in the fringe rule
# remove_black_bg = false # clear a solid near-black background (lockup)
# black_bg_max = 32       # channel max for the background rule

# App icon auto-crop (`brandkit crop-icon`)
# [crop]
# pad = 0.025             # padding as a share of the content's larger side
# threshold = 12          # white-difference threshold, higher crops more

# Logo mark/lockup (`brandkit logo`)
# [logo]
# pad = 0.02
# white_threshold = 240   # min channel value of the icon area
# black_threshold = 16    # max channel value of the background
# mark_size = 1024        # side of the square mark output

# Launcher icons (`brandkit launcher-icons`), paths relative to --root
# [launcher]
# svg = "apps/mobile/assets/brand/projectflow_lockup_white.svg"
# legacy = "apps/mobile/assets/icon/app_icon_legacy.png"
# foreground = "apps/mobile/assets/icon/app_icon_foreground.png"
# size = 1024

# OpenProject demo data (`brandkit seed`)
# The API key is only read from OPENPROJECT_API_KEY or --api-key.
# [seed]
# url = "https://openproject.example.com"
# project_name = "Mobile Demo"
# project_identifier = "mobile-demo"
# timeout_secs = 30
"#
        .to_string()
    }
}
