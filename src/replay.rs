//! Gesture script replay
//!
//! Drives a `SheetModel` through a scripted sequence of host events and records
//! what the sheet looks like after each one. Used by the `flexsheet replay`
//! command and by integration tests.
//!
//! ```yaml
//! viewport: 812
//! steps:
//!   - { op: drag, translation: 40 }
//!   - { op: release, translation: 100, velocity: 50 }
//!   - { op: settle }
//!   - { op: scroll, offset: 25 }
//!   - { op: set, state: full }
//! ```

use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::config::ConfigError;
use crate::messages::{Msg, SheetMsg};
use crate::model::SheetModel;
use crate::session::DragPhase;
use crate::sheet::SheetState;
use crate::update::update;

/// A replay script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Initial viewport height; the CLI flag wins when both are given
    #[serde(default)]
    pub viewport: Option<f32>,
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// One scripted host event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Drag sample
    Drag { translation: f32 },
    /// Release with an explicit velocity (`predicted_end - translation`)
    Release {
        translation: f32,
        #[serde(default)]
        velocity: f32,
    },
    /// Nested content scroll offset
    Scroll { offset: f32 },
    /// Programmatic state change
    Set { state: SheetState },
    /// New viewport height
    Resize { height: f32 },
    /// Report an interpolated offset for the running animation
    Progress { offset: f32 },
    /// Finish the running animation
    Settle,
}

impl ReplayStep {
    /// Message for this step, given the model it will be applied to
    ///
    /// Animation steps without a running animation produce no message.
    pub fn to_msg(&self, model: &SheetModel) -> Option<Msg> {
        let running = match model.session.phase() {
            DragPhase::Settling { animation, .. } => Some(animation.id),
            _ => None,
        };

        match *self {
            ReplayStep::Drag { translation } => Some(Msg::drag_changed(translation)),
            ReplayStep::Release {
                translation,
                velocity,
            } => Some(Msg::drag_ended_with_velocity(translation, velocity)),
            ReplayStep::Scroll { offset } => Some(Msg::scroll(offset)),
            ReplayStep::Set { state } => Some(Msg::set_state(state)),
            ReplayStep::Resize { height } => Some(Msg::resize(height)),
            ReplayStep::Progress { offset } => running.map(|animation| {
                Msg::Sheet(SheetMsg::SettleProgress { animation, offset })
            }),
            ReplayStep::Settle => running.map(|id| Msg::Sheet(SheetMsg::SettleFinished(id))),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ReplayStep::Drag { translation } => format!("drag {}", translation),
            ReplayStep::Release {
                translation,
                velocity,
            } => format!("release {} @ {}", translation, velocity),
            ReplayStep::Scroll { offset } => format!("scroll {}", offset),
            ReplayStep::Set { state } => format!("set {}", state),
            ReplayStep::Resize { height } => format!("resize {}", height),
            ReplayStep::Progress { offset } => format!("progress {}", offset),
            ReplayStep::Settle => "settle".to_string(),
        }
    }
}

/// Sheet state observed after a step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayFrame {
    pub step: usize,
    pub op: String,
    pub state: SheetState,
    pub phase: &'static str,
    pub live_offset: f32,
    pub rendered_offset: f32,
    pub scroll_enabled: bool,
    pub commands: Vec<String>,
}

impl ReplayFrame {
    fn capture(step: usize, op: String, model: &SheetModel, cmd: Option<Cmd>) -> Self {
        Self {
            step,
            op,
            state: model.state(),
            phase: match model.session.phase() {
                DragPhase::Idle => "idle",
                DragPhase::Dragging { .. } => "dragging",
                DragPhase::Settling { .. } => "settling",
            },
            live_offset: model.live_offset(),
            rendered_offset: model.rendered_offset(),
            scroll_enabled: model.content_scroll_enabled(),
            commands: cmd
                .map(|cmd| cmd.flatten().iter().map(describe_cmd).collect())
                .unwrap_or_default(),
        }
    }
}

/// Short human-readable form of a command
pub fn describe_cmd(cmd: &Cmd) -> String {
    match cmd {
        Cmd::None => "none".to_string(),
        Cmd::Redraw => "redraw".to_string(),
        Cmd::Animate(animation) => format!(
            "animate {} -> {} ({} → {})",
            animation.id, animation.target, animation.from_offset, animation.to_offset
        ),
        Cmd::CancelAnimation(id) => format!("cancel {}", id),
        Cmd::Batch(cmds) => cmds.iter().map(describe_cmd).collect::<Vec<_>>().join(", "),
    }
}

/// Apply every step in order, capturing a frame after each
pub fn run(model: &mut SheetModel, steps: &[ReplayStep]) -> Vec<ReplayFrame> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let cmd = step.to_msg(model).and_then(|msg| update(model, msg));
            ReplayFrame::capture(index + 1, step.label(), model, cmd)
        })
        .collect()
}
