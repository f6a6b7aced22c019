use anyhow::{Context, Result};
use clap::Parser;

use flexsheet::config::SheetConfig;
use flexsheet::model::SheetModel;
use flexsheet::replay::{self, ReplayFrame, ReplayScript};
use flexsheet::resolver::{self, DragRelease};
use flexsheet::sheet::{SheetState, SnapHeights};

mod cli;

use cli::{CliArgs, RunConfig, RunMode};

fn load_sheet_config(run: &RunConfig) -> Result<SheetConfig> {
    match &run.config_path {
        Some(path) => SheetConfig::from_file(path)
            .with_context(|| format!("loading sheet config {}", path.display())),
        None => Ok(SheetConfig::load()),
    }
}

fn print_frame(frame: &ReplayFrame) {
    let commands = if frame.commands.is_empty() {
        String::new()
    } else {
        format!("  [{}]", frame.commands.join("; "))
    };
    println!(
        "{:>3} {:<22} {:<8} {:<9} offset={:<8.1} live={:<8.1} scroll={}{}",
        frame.step,
        frame.op,
        frame.state,
        frame.phase,
        frame.rendered_offset,
        frame.live_offset,
        if frame.scroll_enabled { "on" } else { "off" },
        commands
    );
}

fn run_replay(run: &RunConfig, script_path: &std::path::Path, json: bool) -> Result<()> {
    let config = load_sheet_config(run)?;
    let source = std::fs::read_to_string(script_path)
        .with_context(|| format!("reading script {}", script_path.display()))?;
    let script = ReplayScript::from_yaml(&source)
        .with_context(|| format!("parsing script {}", script_path.display()))?;

    let viewport = run.viewport_or(script.viewport);
    let mut model = SheetModel::from_config(config, viewport)
        .with_context(|| format!("building sheet for viewport {}", viewport))?;

    tracing::info!(
        script = %script_path.display(),
        steps = script.steps.len(),
        viewport,
        "replaying"
    );

    if !json {
        println!(
            "  0 {:<22} {:<8} {:<9} offset={:.1}",
            "start",
            model.state(),
            "idle",
            model.rendered_offset()
        );
    }

    for frame in replay::run(&mut model, &script.steps) {
        if json {
            println!(
                "{}",
                serde_json::to_string(&frame).context("serializing frame")?
            );
        } else {
            print_frame(&frame);
        }
    }

    Ok(())
}

fn run_resolve(
    run: &RunConfig,
    state: SheetState,
    translation: f32,
    velocity: f32,
    allow_hide: bool,
) -> Result<()> {
    let config = load_sheet_config(run)?;
    let viewport = run.viewport_or(None);
    config
        .style
        .validate()
        .context("validating sheet style")?;
    let heights: SnapHeights = config
        .geometry
        .resolve(viewport)
        .with_context(|| format!("resolving geometry for viewport {}", viewport))?;
    let style = if allow_hide {
        config.style.with_allow_hide(true)
    } else {
        config.style
    };

    let release = DragRelease::new(translation, velocity);
    let (next, resolution) = resolver::resolve_with_reason(state, release, &style, &heights);
    let implied = resolver::implied_height(state, translation, &heights);

    println!("{} -> {} ({:?})", state, next, resolution);
    println!(
        "implied height {:.1}; snap heights minimal={:.1} half={:.1} full={:.1}",
        implied, heights.minimal, heights.half, heights.full
    );
    Ok(())
}

fn main() -> Result<()> {
    let run = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    if run.file_logging {
        flexsheet::tracing::init();
    } else {
        flexsheet::tracing::init_with_file_logging(false);
    }

    match run.mode.clone() {
        RunMode::Replay { script, json } => run_replay(&run, &script, json),
        RunMode::Resolve {
            state,
            translation,
            velocity,
            allow_hide,
        } => run_resolve(&run, state, translation, velocity, allow_hide),
    }
}
