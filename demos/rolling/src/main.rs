//! Rolls a toggle on the headless backend and logs what each frame shows.
//!
//! ```text
//! RUST_LOG=info cargo run -p rollkit-demo -- --taps 2 --axis vertical --rotations 2
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use rollkit::layout::{Point, Size};
use rollkit::prelude::*;
use rollkit_headless::{HeadlessHost, RenderNode};

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 600;

#[derive(Debug, Parser)]
#[command(name = "rollkit-demo")]
#[command(about = "Taps a rolling toggle and prints the animation", long_about = None)]
#[command(version)]
struct Cli {
    /// Read the toggle configuration from a JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Full turns per switch, overriding the configuration
    #[arg(long)]
    rotations: Option<u32>,

    /// Roll direction, overriding the configuration
    #[arg(long, value_enum)]
    axis: Option<AxisArg>,

    /// Number of taps to simulate
    #[arg(long, default_value_t = 2)]
    taps: u32,

    /// Draw a generic toggle styled as a rolling toggle instead of the widget
    #[arg(long)]
    styled: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AxisArg {
    Horizontal,
    Vertical,
}

impl From<AxisArg> for Axis {
    fn from(value: AxisArg) -> Self {
        match value {
            AxisArg::Horizontal => Self::Horizontal,
            AxisArg::Vertical => Self::Vertical,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    rollkit::logging::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RollingConfig::load(path)
            .wrap_err_with(|| format!("could not load {}", path.display()))?,
        None => RollingConfig::default(),
    };
    if let Some(rotations) = cli.rotations {
        config.rotation_count = rotations;
    }
    if let Some(axis) = cli.axis {
        config.axis = axis.into();
    }
    tracing::info!(?config, styled = cli.styled, "starting");

    let size = match config.axis {
        Axis::Horizontal => Size::new(240.0, 40.0),
        Axis::Vertical => Size::new(40.0, 240.0),
    };
    let is_on = binding(true);

    if cli.styled {
        let state = is_on.clone();
        let host = HeadlessHost::new(size, move || {
            toggle(("☀ on", "☾ off"), &state)
                .toggle_style(RollingToggleStyle::from_config(config))
        });
        play(host, size, cli.taps)
    } else {
        let state = is_on.clone();
        let host = HeadlessHost::new(size, move || {
            rolling_toggle(&state, "☀ on", "☾ off").config(config)
        });
        play(host, size, cli.taps)
    }
}

fn play<F, V>(mut host: HeadlessHost<F>, size: Size, taps: u32) -> Result<()>
where
    F: FnMut() -> V,
    V: View,
{
    let centre = Point::new(size.width / 2.0, size.height / 2.0);
    let mut now = Duration::ZERO;
    report(host.frame(now)?, now);

    for tap in 1..=taps {
        let handled = host.tap(centre);
        tracing::info!(tap, handled, "tapped");

        for _ in 0..MAX_FRAMES {
            now += FRAME;
            let frame = host.frame(now)?;
            report(frame, now);
            if host.is_settled() {
                break;
            }
        }
    }
    Ok(())
}

fn report(frame: &RenderNode, now: Duration) {
    let rotation = frame.rotation().map_or(0.0, Angle::to_degrees);
    let faces: Vec<String> = frame
        .texts()
        .into_iter()
        .map(|text| {
            let opacity = frame.opacity_of(text).unwrap_or_default();
            let origin = frame.text_frame(text).map(|rect| rect.origin()).unwrap_or_default();
            format!("{text} α={opacity:.2} @({:.1}, {:.1})", origin.x, origin.y)
        })
        .collect();
    tracing::info!(
        t = format_args!("{:>5}ms", now.as_millis()),
        rotation = format_args!("{rotation:>7.1}°"),
        alignment = ?frame.frame_alignment(),
        faces = %faces.join(" | "),
    );
}
