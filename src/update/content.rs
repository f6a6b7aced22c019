//! Nested content handlers
//!
//! Scroll offsets reach the scroll bridge, which may move the sheet between
//! `Half` and `Full`. The bridge is inert while a handle drag is active.

use crate::commands::Cmd;
use crate::messages::ContentMsg;
use crate::model::{SheetModel, StateSource};

use super::sheet::apply_state_change;

/// Update function for content messages
pub fn update_content(model: &mut SheetModel, msg: ContentMsg) -> Option<Cmd> {
    match msg {
        ContentMsg::ScrollOffsetChanged(offset) => {
            let dragging = model.is_dragging();
            let state = model.state();
            let next = model.bridge.on_scroll(offset, state, dragging)?;
            apply_state_change(model, next, StateSource::ScrollBridge)
        }
    }
}
