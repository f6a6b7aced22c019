//! Sheet update handlers
//!
//! Handles programmatic state changes, viewport resizes and settle animation
//! callbacks from the host.

use crate::commands::Cmd;
use crate::messages::SheetMsg;
use crate::model::{SheetModel, StateSource};
use crate::sheet::SheetState;

use super::settle_cmd;

/// Update function for sheet messages
pub fn update_sheet(model: &mut SheetModel, msg: SheetMsg) -> Option<Cmd> {
    match msg {
        SheetMsg::SetState(state) => apply_state_change(model, state, StateSource::Programmatic),

        SheetMsg::Resize(viewport_height) => {
            if viewport_height == model.viewport_height() {
                return None;
            }
            match model.set_viewport_height(viewport_height) {
                Ok(()) => Some(Cmd::Redraw),
                Err(e) => {
                    tracing::warn!(
                        viewport_height,
                        "Rejected viewport resize, keeping {}: {}",
                        model.viewport_height(),
                        e
                    );
                    None
                }
            }
        }

        SheetMsg::SettleProgress { animation, offset } => {
            if model.session.settle_progress(animation, offset) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        SheetMsg::SettleFinished(animation) => {
            if model.session.settle_finished(animation) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}

/// Move to `state` from outside a drag release, keeping the panel's visual
/// position continuous
pub(super) fn apply_state_change(
    model: &mut SheetModel,
    state: SheetState,
    source: StateSource,
) -> Option<Cmd> {
    let old = model.state();
    if !model.set_state(state, source) {
        return None;
    }

    let (animation, cancelled) = model.reanchor(old, state);
    Some(settle_cmd(cancelled, animation))
}
