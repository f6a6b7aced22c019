//! Command-line argument parsing for the sheet simulator
//!
//! Supports:
//! - Replaying a YAML gesture script
//! - Resolving a single drag release

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use flexsheet::sheet::SheetState;

/// Viewport height used when neither the flag nor the script gives one
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 812.0;

/// Gesture-driven bottom sheet simulator
#[derive(Parser, Debug)]
#[command(name = "flexsheet", version, about = "Bottom sheet snap-state simulator")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Sheet config file (defaults to ~/.config/flexsheet/config.yaml)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Viewport height in points
    #[arg(long, global = true, value_name = "PX")]
    pub viewport: Option<f32>,

    /// Do not write the rolling log file
    #[arg(long, global = true)]
    pub no_log_file: bool,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Replay a gesture script and print the sheet after each step
    Replay {
        /// YAML script with a `steps` list
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Print one JSON object per step
        #[arg(long)]
        json: bool,
    },

    /// Resolve one drag release and print the resulting state
    Resolve {
        /// State the drag started in
        #[arg(long, default_value = "half")]
        state: SheetState,

        /// Vertical translation at release (down is positive)
        #[arg(long, allow_hyphen_values = true)]
        translation: f32,

        /// Release velocity (`predicted_end - translation`)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        velocity: f32,

        /// Allow collapsing into the hidden state
        #[arg(long)]
        allow_hide: bool,
    },
}

/// What to run
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    Replay {
        script: PathBuf,
        json: bool,
    },
    Resolve {
        state: SheetState,
        translation: f32,
        velocity: f32,
        allow_hide: bool,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub mode: RunMode,
    /// Explicit config file; `None` means the user config dir
    pub config_path: Option<PathBuf>,
    /// Viewport override; replay scripts may carry their own
    pub viewport: Option<f32>,
    pub file_logging: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        if let Some(viewport) = self.viewport {
            if !viewport.is_finite() || viewport <= 0.0 {
                return Err(format!("Viewport height must be positive, got {}", viewport));
            }
        }

        let mode = match self.command {
            CliCommand::Replay { script, json } => RunMode::Replay { script, json },
            CliCommand::Resolve {
                state,
                translation,
                velocity,
                allow_hide,
            } => {
                if !translation.is_finite() || !velocity.is_finite() {
                    return Err("Translation and velocity must be finite".to_string());
                }
                RunMode::Resolve {
                    state,
                    translation,
                    velocity,
                    allow_hide,
                }
            }
        };

        Ok(RunConfig {
            mode,
            config_path: self.config,
            viewport: self.viewport,
            file_logging: !self.no_log_file,
        })
    }
}

impl RunConfig {
    /// Viewport to build the sheet with, given the script's own value
    pub fn viewport_or(&self, script_viewport: Option<f32>) -> f32 {
        self.viewport
            .or(script_viewport)
            .unwrap_or(DEFAULT_VIEWPORT_HEIGHT)
    }
}
