//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging gesture,
//! snap resolution and scroll bridge behaviour.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,sheet=debug` - scoped filtering
//! - `RUST_LOG=flexsheet::session=trace` - per-sample drag logging
//!
//! # Log Files
//!
//! Logs are written to `~/.config/flexsheet/logs/flexsheet.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::SheetModel;
use crate::session::DragPhase;
use crate::sheet::SheetState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/flexsheet/logs/flexsheet.log` at debug level.
pub fn init() {
    init_with_file_logging(true);
}

/// Initialize tracing, optionally without the rolling log file
pub fn init_with_file_logging(file_logging: bool) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer goes to stderr so replay output on stdout stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = if file_logging {
        match crate::config_paths::ensure_logs_dir() {
            Ok(logs_dir) => {
                let file_appender = tracing_appender::rolling::daily(logs_dir, "flexsheet.log");
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of sheet state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSnapshot {
    pub state: SheetState,
    pub phase: &'static str,
    pub live_offset: f32,
    pub scroll_enabled: bool,
    pub expanding: bool,
}

impl SheetSnapshot {
    pub fn from_model(model: &SheetModel) -> Self {
        Self {
            state: model.state(),
            phase: match model.session.phase() {
                DragPhase::Idle => "idle",
                DragPhase::Dragging { .. } => "dragging",
                DragPhase::Settling { .. } => "settling",
            },
            live_offset: model.live_offset(),
            scroll_enabled: model.content_scroll_enabled(),
            expanding: model.bridge.is_expanding(),
        }
    }

    /// Generate a diff description between two snapshots
    ///
    /// Live offset changes are left out; they change on every drag sample.
    pub fn diff(&self, other: &SheetSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.state != other.state {
            changes.push(format!("state: {} → {}", self.state, other.state));
        }
        if self.phase != other.phase {
            changes.push(format!("phase: {} → {}", self.phase, other.phase));
        }
        if self.scroll_enabled != other.scroll_enabled {
            changes.push(format!(
                "scroll: {}",
                if other.scroll_enabled { "enabled" } else { "disabled" }
            ));
        }
        if self.expanding != other.expanding {
            changes.push(format!("expanding: {}", other.expanding));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
