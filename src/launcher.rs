//! Renders the white-background brand SVG into the launcher icon PNGs.
//!
//! Converters are tried in priority order: Inkscape, ImageMagick, then the
//! in-process `resvg` renderer when compiled in. A converter failing for any
//! reason only moves on to the next one.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LauncherTargets {
    pub svg: PathBuf,
    pub legacy: PathBuf,
    pub foreground: PathBuf,
    pub size: u32,
}

impl Default for LauncherTargets {
    fn default() -> Self {
        let assets = Path::new("apps").join("mobile").join("assets");
        let icon_dir = assets.join("icon");
        Self {
            svg: assets.join("brand").join("projectflow_lockup_white.svg"),
            legacy: icon_dir.join("app_icon_legacy.png"),
            foreground: icon_dir.join("app_icon_foreground.png"),
            size: 1024,
        }
    }
}

impl LauncherTargets {
    /// Resolves relative paths against `root`.
    pub fn rooted(&self, root: &Path) -> Self {
        Self {
            svg: root.join(&self.svg),
            legacy: root.join(&self.legacy),
            foreground: root.join(&self.foreground),
            size: self.size,
        }
    }

    pub fn outputs(&self) -> [&Path; 2] {
        [self.legacy.as_path(), self.foreground.as_path()]
    }
}

/// Locates external executables, on `PATH` or an explicit search path.
#[derive(Debug, Clone, Default)]
pub struct ToolFinder {
    search_path: Option<OsString>,
}

impl ToolFinder {
    pub fn system() -> Self {
        Self::default()
    }

    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    pub fn find(&self, name: &str) -> Option<PathBuf> {
        match &self.search_path {
            None => which::which(name).ok(),
            Some(paths) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(name, Some(paths), cwd).ok()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    Inkscape,
    ImageMagick,
    Builtin,
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converter::Inkscape => write!(f, "Inkscape"),
            Converter::ImageMagick => write!(f, "ImageMagick"),
            Converter::Builtin => write!(f, "resvg"),
        }
    }
}

impl Converter {
    pub const PRIORITY: [Converter; 3] =
        [Converter::Inkscape, Converter::ImageMagick, Converter::Builtin];

    /// Renders `svg` to `png` at `size × size`. Returns `false` on any failure.
    pub fn render(&self, svg: &Path, png: &Path, size: u32, tools: &ToolFinder) -> bool {
        let result = match self {
            Converter::Inkscape => render_inkscape(svg, png, size, tools),
            Converter::ImageMagick => render_imagemagick(svg, png, size, tools),
            Converter::Builtin => render_builtin(svg, png, size),
        };

        match result {
            Ok(()) if png.exists() => true,
            Ok(()) => {
                tracing::debug!(converter = %self, png = %png.display(), "no output produced");
                false
            }
            Err(e) => {
                tracing::debug!(converter = %self, "conversion failed: {e:#}");
                false
            }
        }
    }
}

fn run_tool(exe: &Path, args: &[OsString]) -> Result<()> {
    tracing::debug!(exe = %exe.display(), ?args, "running converter");
    let output = Command::new(exe)
        .args(args)
        .output()
        .with_context(|| format!("Failed to spawn {}", exe.display()))?;

    if !output.status.success() {
        bail!(
            "{} exited with {}: {}",
            exe.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}

fn render_inkscape(svg: &Path, png: &Path, size: u32, tools: &ToolFinder) -> Result<()> {
    let Some(exe) = tools.find("inkscape") else {
        bail!("inkscape not found");
    };

    let mut export_filename = OsString::from("--export-filename=");
    export_filename.push(png);
    let args = [
        svg.as_os_str().to_owned(),
        "--export-type=png".into(),
        export_filename,
        format!("--export-width={size}").into(),
        format!("--export-height={size}").into(),
    ];
    run_tool(&exe, &args)
}

fn render_imagemagick(svg: &Path, png: &Path, size: u32, tools: &ToolFinder) -> Result<()> {
    let geometry: OsString = format!("{size}x{size}").into();
    let mut last_error = None;

    for cmd in ["magick", "convert"] {
        let Some(exe) = tools.find(cmd) else {
            continue;
        };

        let args: Vec<OsString> = if cmd == "magick" {
            vec![
                svg.as_os_str().to_owned(),
                "-resize".into(),
                geometry.clone(),
                png.as_os_str().to_owned(),
            ]
        } else {
            vec![
                "-background".into(),
                "white".into(),
                svg.as_os_str().to_owned(),
                "-resize".into(),
                geometry.clone(),
                png.as_os_str().to_owned(),
            ]
        };

        match run_tool(&exe, &args) {
            Ok(()) => return Ok(()),
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error.unwrap_or_else(|| anyhow::anyhow!("neither magick nor convert found")))
}

#[cfg(feature = "resvg")]
fn render_builtin(svg: &Path, png: &Path, size: u32) -> Result<()> {
    use resvg::{tiny_skia, usvg};

    let data = std::fs::read(svg).with_context(|| format!("Failed to read {}", svg.display()))?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default())
        .context("Failed to parse SVG")?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| anyhow::anyhow!("Failed to create {size}x{size} pixmap"))?;
    let scale_x = size as f32 / tree.size().width();
    let scale_y = size as f32 / tree.size().height();
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale_x, scale_y),
        &mut pixmap.as_mut(),
    );

    pixmap
        .save_png(png)
        .with_context(|| format!("Failed to write {}", png.display()))?;
    Ok(())
}

#[cfg(not(feature = "resvg"))]
fn render_builtin(_svg: &Path, _png: &Path, _size: u32) -> Result<()> {
    bail!("built without the `resvg` feature")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both outputs were written by this converter.
    Written(Converter),
    /// Every converter failed; the outputs must be created by hand.
    Unavailable,
}

/// Tries `converters` in order until one writes both outputs.
///
/// Fails only when the source SVG is missing or the icon directory cannot be
/// created; converter failures are reported through [`Outcome::Unavailable`].
pub fn generate(
    targets: &LauncherTargets,
    converters: &[Converter],
    tools: &ToolFinder,
) -> Result<Outcome> {
    if !targets.svg.exists() {
        bail!("White logo not found: {}", targets.svg.display());
    }

    for out in targets.outputs() {
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    for converter in converters {
        let all_written = targets
            .outputs()
            .iter()
            .all(|png| converter.render(&targets.svg, png, targets.size, tools));

        if all_written {
            return Ok(Outcome::Written(*converter));
        }
        tracing::debug!(converter = %converter, "converter unavailable, trying next");
    }

    Ok(Outcome::Unavailable)
}

/// Steps for producing the launcher PNGs by hand.
pub fn manual_instructions(targets: &LauncherTargets) -> String {
    let size = targets.size;
    format!(
        "No automatic converter found (Inkscape, ImageMagick or resvg).\n\
         \n\
         --- Manual method ---\n\
         1. Open this file: {svg}\n\
         2. Export it as a {size}x{size} PNG (browser screenshot, Inkscape or Illustrator).\n\
         3. Save the PNG at {size}x{size} to both locations:\n\
         \x20  - {legacy}\n\
         \x20  - {foreground}\n\
         4. Then run: cd apps/mobile && dart run flutter_launcher_icons",
        svg = targets.svg.display(),
        legacy = targets.legacy.display(),
        foreground = targets.foreground.display(),
    )
}
