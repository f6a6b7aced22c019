//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use crate::session::{AnimationId, SettleAnimation};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the sheet at `SheetModel::rendered_offset()`
    Redraw,
    /// Start interpolating the live offset; replaces any running animation
    Animate(SettleAnimation),
    /// Stop a running animation without jumping to its end value
    CancelAnimation(AnimationId),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Collapse a list into a single command, dropping `None`s
    pub fn batch(cmds: impl IntoIterator<Item = Cmd>) -> Cmd {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|cmd| !matches!(cmd, Cmd::None))
            .collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Flatten into individual commands, in execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// The animation this command starts, if any
    pub fn animation(&self) -> Option<SettleAnimation> {
        self.clone().flatten().into_iter().find_map(|cmd| match cmd {
            Cmd::Animate(animation) => Some(animation),
            _ => None,
        })
    }

    pub fn is_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }
}
