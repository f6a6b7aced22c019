//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod content;
mod gesture;
mod sheet;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::SheetModel;

#[cfg(debug_assertions)]
use crate::tracing::SheetSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use content::update_content;
pub use gesture::update_gesture;
pub use sheet::update_sheet;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut SheetModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut SheetModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Gesture(m) => gesture::update_gesture(model, m),
        Msg::Content(m) => content::update_content(model, m),
        Msg::Sheet(m) => sheet::update_sheet(model, m),
    }
}

/// Build the command list shared by every state change path
pub(crate) fn settle_cmd(
    cancelled: Option<crate::session::AnimationId>,
    animation: Option<crate::session::SettleAnimation>,
) -> Cmd {
    Cmd::batch([
        cancelled.map_or(Cmd::None, Cmd::CancelAnimation),
        animation.map_or(Cmd::None, Cmd::Animate),
        Cmd::Redraw,
    ])
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after sheet state and logs diffs for debugging.
/// Per-frame messages (drag samples, scroll offsets, animation progress) are
/// not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut SheetModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{ContentMsg, GestureMsg, SheetMsg};

    let is_noisy = matches!(
        &msg,
        Msg::Gesture(GestureMsg::DragChanged { .. })
            | Msg::Content(ContentMsg::ScrollOffsetChanged(_))
            | Msg::Sheet(SheetMsg::SettleProgress { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SheetSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SheetSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "sheet", %diff, "state changed");
    }

    model.assert_invariants();

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Gesture::DragEnded { translation: 100.0, predicted_end_translation: 150.0 }`
/// - `Sheet::SetState(Full)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Gesture(m) => format!("Gesture::{:?}", m),
        Msg::Content(m) => format!("Content::{:?}", m),
        Msg::Sheet(m) => format!("Sheet::{:?}", m),
    }
}
