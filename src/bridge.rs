//! Scroll bridge - couples nested-content scrolling to the sheet state
//!
//! Content offsets are measured from the content's own top: positive values mean
//! the content has moved up (scrolled forward), negative values mean it is being
//! pulled down past its top.
//!
//! - At `Half`, pushing the content up by more than the deadband expands to `Full`.
//! - At `Full`, pulling the content down past its top by more than the deadband
//!   collapses to the configured state.
//!
//! The bridge never acts while a handle drag is in progress; the drag session
//! is the only writer of the state during a gesture.

use crate::sheet::SheetState;
use crate::style::ScrollBridgeConfig;

/// Outcome of one bridge evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeDecision {
    pub next: Option<SheetState>,
    /// Debounce flag: an expansion was triggered and has not been undone yet
    pub expanding: bool,
}

/// Evaluate the bridge rules for one offset against a reference offset
pub fn bridge_step(
    offset: f32,
    previous_offset: f32,
    state: SheetState,
    expanding: bool,
    config: &ScrollBridgeConfig,
    allow_hide: bool,
) -> BridgeDecision {
    let unchanged = BridgeDecision {
        next: None,
        expanding,
    };

    let delta = offset - previous_offset;
    if !config.enabled || !delta.is_finite() || delta.abs() <= config.deadband {
        return unchanged;
    }

    match state {
        SheetState::Half if delta > 0.0 && !expanding => BridgeDecision {
            next: Some(SheetState::Full),
            expanding: true,
        },
        SheetState::Full if delta < 0.0 && offset <= -config.deadband => BridgeDecision {
            next: Some(config.collapse_target(allow_hide)),
            expanding: false,
        },
        _ => unchanged,
    }
}

/// Stateful bridge fed with raw content offsets
///
/// Movement is measured from the offset where the current scroll run started,
/// so slow scrolls accumulate past the deadband while direction changes restart
/// the measurement.
#[derive(Debug, Clone)]
pub struct ScrollBridge {
    config: ScrollBridgeConfig,
    allow_hide: bool,
    last_offset: Option<f32>,
    anchor: Option<f32>,
    expanding: bool,
}

impl ScrollBridge {
    /// `allow_hide` decides whether a collapse may land on `Hidden`
    pub fn new(config: ScrollBridgeConfig, allow_hide: bool) -> Self {
        Self {
            config,
            allow_hide,
            last_offset: None,
            anchor: None,
            expanding: false,
        }
    }

    pub fn config(&self) -> &ScrollBridgeConfig {
        &self.config
    }

    pub fn is_expanding(&self) -> bool {
        self.expanding
    }

    pub fn last_offset(&self) -> Option<f32> {
        self.last_offset
    }

    /// Forget the current scroll run and debounce flag
    ///
    /// Called whenever the state changes through some other path.
    pub fn reset(&mut self) {
        self.anchor = self.last_offset;
        self.expanding = false;
    }

    /// Feed a content offset; returns the state to move to, if any
    ///
    /// Inert while `dragging`: the offset is still recorded so the next run
    /// starts from a fresh baseline.
    pub fn on_scroll(
        &mut self,
        offset: f32,
        state: SheetState,
        dragging: bool,
    ) -> Option<SheetState> {
        if !offset.is_finite() {
            return None;
        }

        let Some(previous) = self.last_offset.replace(offset) else {
            self.anchor = Some(offset);
            return None;
        };

        if dragging || !self.config.enabled {
            self.anchor = Some(offset);
            return None;
        }

        let mut anchor = self.anchor.unwrap_or(previous);
        let step = offset - previous;
        let run = previous - anchor;
        if (step > 0.0 && run < 0.0) || (step < 0.0 && run > 0.0) {
            anchor = previous;
        }

        let decision = bridge_step(
            offset,
            anchor,
            state,
            self.expanding,
            &self.config,
            self.allow_hide,
        );
        self.expanding = decision.expanding;
        self.anchor = Some(if decision.next.is_some() { offset } else { anchor });

        if let Some(next) = decision.next {
            tracing::debug!(
                from = %state,
                to = %next,
                offset,
                anchor,
                "scroll bridge triggered"
            );
        }

        decision.next
    }
}
