// SPDX-License-Identifier: MIT
//
// n-soft — soft surfaces under a moving light.
//
// This binary is the demonstration harness that wires the crates together:
//
//   n-ambient → driver config, angle clock, ticking thread
//   n-style   → elevation formulas, style descriptors, CSS
//   n-color   → base color parsing and luminance shifts
//
// Two outputs:
//
//   default   one block of CSS per context, one line per elevation mode
//   --html    a static page with one soft box per mode
//
// With `--ticks N` the harness follows the live driver for N ticks,
// printing every published context; otherwise it prints the starting
// context once. Logs go to stderr (RUST_LOG), output to stdout.

mod page;

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use n_ambient::{AmbientDriver, DriverConfig, builtin_config, builtin_names};
use n_color::Color;
use n_style::{AmbientContext, ElevationMode, resolve_tag};

use crate::page::{DemoBox, render_page, showcase_boxes};

// ─── Command line ───────────────────────────────────────────────────────────

/// Print soft (neumorphic) surface styles for a rotating light.
#[derive(Debug, Parser)]
#[command(name = "n-soft", version)]
struct Cli {
    /// Driver config file (TOML). Takes precedence over --preset.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Named starting configuration.
    #[arg(long, default_value = "showcase")]
    preset: String,

    /// Base surface color (#rgb, #rrggbb or rgb(r, g, b)).
    #[arg(long)]
    color: Option<Color>,

    /// Starting light angle in degrees.
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Elevation depth (shadow offset; blur is twice this).
    #[arg(long, allow_negative_numbers = true)]
    elevation: Option<f64>,

    /// Milliseconds between ticks when following the driver.
    #[arg(long, value_name = "MS")]
    interval: Option<u64>,

    /// Elevation mode to render; repeat for several. Defaults to the
    /// four showcase boxes. Unknown tags render flat.
    #[arg(long = "mode", value_name = "TAG")]
    modes: Vec<String>,

    /// Follow the live driver for this many ticks.
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Emit a static HTML page instead of CSS lines.
    #[arg(long, conflicts_with = "ticks")]
    html: bool,
}

impl Cli {
    /// Preset or file, then individual flag overrides, then validation.
    fn driver_config(&self) -> Result<DriverConfig> {
        let mut config = match &self.config {
            Some(path) => DriverConfig::load(path)?,
            None => builtin_config(&self.preset).ok_or_else(|| {
                anyhow!(
                    "unknown preset `{}` (available: {})",
                    self.preset,
                    builtin_names().join(", ")
                )
            })?,
        };

        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(angle) = self.angle {
            config.start_angle = angle;
        }
        if let Some(elevation) = self.elevation {
            config.elevation_depth = elevation;
        }
        if let Some(interval) = self.interval {
            config.tick_interval_ms = interval;
        }

        Ok(config.validate()?)
    }

    fn boxes(&self) -> Vec<DemoBox> {
        if self.modes.is_empty() {
            return showcase_boxes();
        }
        for tag in &self.modes {
            if let Err(err) = tag.parse::<ElevationMode>() {
                tracing::warn!(%err, "rendering as flat");
            }
        }
        self.modes.iter().map(|tag| DemoBox::tagged(tag)).collect()
    }
}

// ─── Output ─────────────────────────────────────────────────────────────────

/// One block per context: a header line, then `tag  css` per box.
fn render_css(ctx: &AmbientContext, boxes: &[DemoBox]) -> String {
    let width = boxes.iter().map(|b| b.tag.len()).max().unwrap_or(0);
    let mut out = format!("angle {}\n", ctx.angle);
    for demo in boxes {
        let style = resolve_tag(&demo.tag, ctx);
        let css = if style.is_empty() {
            "(no style)".to_owned()
        } else {
            style.to_css()
        };
        let _ = writeln!(out, "  {:<width$}  {css}", demo.tag);
    }
    out
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.driver_config()?;
    let boxes = cli.boxes();

    if cli.html {
        out.write_all(render_page(&config.context(), &boxes).as_bytes())?;
        return Ok(());
    }

    if cli.ticks == 0 {
        out.write_all(render_css(&config.context(), &boxes).as_bytes())?;
        return Ok(());
    }

    let mut driver = AmbientDriver::spawn(config).context("failed to start ambient driver")?;
    let updates = driver.subscribe();
    // The first message is the starting snapshot, then one per tick.
    let wanted = usize::try_from(cli.ticks).unwrap_or(usize::MAX).saturating_add(1);
    for ctx in updates.iter().take(wanted) {
        out.write_all(render_css(&ctx, &boxes).as_bytes())?;
        out.flush()?;
    }
    driver.stop();
    Ok(())
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    install_tracing();
    let cli = Cli::parse();
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
