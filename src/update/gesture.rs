//! Drag gesture handlers
//!
//! Samples feed the drag session; the release resolves the next state and
//! hands the settle animation to the host.

use crate::commands::Cmd;
use crate::messages::GestureMsg;
use crate::model::SheetModel;
use crate::resolver::DragRelease;

use super::settle_cmd;

/// Update function for drag gesture messages
pub fn update_gesture(model: &mut SheetModel, msg: GestureMsg) -> Option<Cmd> {
    match msg {
        GestureMsg::DragChanged { translation } => {
            if !translation.is_finite() {
                tracing::trace!(translation, "ignoring non-finite drag sample");
                return None;
            }

            let state = model.state();
            let sample = model.session.drag_changed(translation, state);
            Some(settle_cmd(sample.cancelled, None))
        }

        GestureMsg::DragEnded {
            translation,
            predicted_end_translation,
        } => {
            let release = DragRelease::from_prediction(translation, predicted_end_translation);
            let outcome = model.release_drag(release);
            Some(settle_cmd(outcome.cancelled, outcome.animation))
        }
    }
}
