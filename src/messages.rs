//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::session::AnimationId;
use crate::sheet::SheetState;

/// Decoded drag gesture samples from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureMsg {
    /// Pointer moved; `translation` is the vertical delta since gesture start
    /// (down is positive)
    DragChanged { translation: f32 },
    /// Pointer lifted; `predicted_end_translation` includes fling momentum
    DragEnded {
        translation: f32,
        predicted_end_translation: f32,
    },
}

/// Signals from the hosted content container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentMsg {
    /// Content scroll offset relative to its own top (positive = scrolled forward)
    ScrollOffsetChanged(f32),
}

/// Host-driven sheet messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetMsg {
    /// Programmatic open/close
    SetState(SheetState),
    /// Viewport height for the next layout pass
    Resize(f32),
    /// Interpolated live offset of a running settle animation
    SettleProgress { animation: AnimationId, offset: f32 },
    /// A settle animation completed
    SettleFinished(AnimationId),
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// Drag gesture messages (handle or inert content)
    Gesture(GestureMsg),
    /// Nested content messages (scroll offsets)
    Content(ContentMsg),
    /// Sheet messages (programmatic state, layout, animation)
    Sheet(SheetMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn drag_changed(translation: f32) -> Self {
        Msg::Gesture(GestureMsg::DragChanged { translation })
    }

    pub fn drag_ended(translation: f32, predicted_end_translation: f32) -> Self {
        Msg::Gesture(GestureMsg::DragEnded {
            translation,
            predicted_end_translation,
        })
    }

    /// Release with an explicit velocity instead of a predicted end point
    pub fn drag_ended_with_velocity(translation: f32, velocity: f32) -> Self {
        Self::drag_ended(translation, translation + velocity)
    }

    pub fn scroll(offset: f32) -> Self {
        Msg::Content(ContentMsg::ScrollOffsetChanged(offset))
    }

    pub fn set_state(state: SheetState) -> Self {
        Msg::Sheet(SheetMsg::SetState(state))
    }

    pub fn resize(viewport_height: f32) -> Self {
        Msg::Sheet(SheetMsg::Resize(viewport_height))
    }
}
