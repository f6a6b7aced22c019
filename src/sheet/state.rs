//! Resting states of the sheet

use serde::{Deserialize, Serialize};

/// A resting position of the sheet, ordered by extent
///
/// `Hidden < Minimal < Half < Full`. Once a gesture finishes the sheet is always
/// in exactly one of these states.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SheetState {
    /// Fully off-screen (only reachable when the style allows hiding)
    #[serde(alias = "not_show")]
    Hidden,
    /// Only the header strip is visible
    #[default]
    Minimal,
    /// Intermediate resting height
    Half,
    /// Most expanded state; the only one where content may scroll
    Full,
}

/// Direction of a one-rank step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Toward larger states (upward fling)
    Expand,
    /// Toward smaller states (downward fling)
    Collapse,
}

impl SheetState {
    /// All states in rank order
    pub const ALL: [SheetState; 4] = [
        SheetState::Hidden,
        SheetState::Minimal,
        SheetState::Half,
        SheetState::Full,
    ];

    /// Position in the rank order (Hidden = 0)
    pub fn rank(&self) -> usize {
        match self {
            SheetState::Hidden => 0,
            SheetState::Minimal => 1,
            SheetState::Half => 2,
            SheetState::Full => 3,
        }
    }

    /// Next larger state, clamped at `Full`
    pub fn expanded(&self) -> SheetState {
        match self {
            SheetState::Hidden => SheetState::Minimal,
            SheetState::Minimal => SheetState::Half,
            SheetState::Half | SheetState::Full => SheetState::Full,
        }
    }

    /// Next smaller state, clamped at the lowest reachable one
    ///
    /// `Minimal` only steps down to `Hidden` when `allow_hide` is set. A sheet
    /// that was hidden programmatically lands on `Minimal` when hiding is not
    /// allowed.
    pub fn collapsed(&self, allow_hide: bool) -> SheetState {
        match self {
            SheetState::Full => SheetState::Half,
            SheetState::Half => SheetState::Minimal,
            SheetState::Minimal | SheetState::Hidden if allow_hide => SheetState::Hidden,
            SheetState::Minimal | SheetState::Hidden => SheetState::Minimal,
        }
    }

    /// Step exactly one rank in the given direction
    pub fn step(&self, direction: StepDirection, allow_hide: bool) -> SheetState {
        match direction {
            StepDirection::Expand => self.expanded(),
            StepDirection::Collapse => self.collapsed(allow_hide),
        }
    }

    /// Whether this state can be landed on with the given hide policy
    pub fn is_reachable(&self, allow_hide: bool) -> bool {
        allow_hide || *self != SheetState::Hidden
    }

    /// Short lowercase name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            SheetState::Hidden => "hidden",
            SheetState::Minimal => "minimal",
            SheetState::Half => "half",
            SheetState::Full => "full",
        }
    }
}

impl std::fmt::Display for SheetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl std::str::FromStr for SheetState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hidden" | "not_show" | "notshow" => Ok(SheetState::Hidden),
            "minimal" => Ok(SheetState::Minimal),
            "half" => Ok(SheetState::Half),
            "full" => Ok(SheetState::Full),
            other => Err(format!("Unknown sheet state: {}", other)),
        }
    }
}
