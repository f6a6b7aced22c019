//! Content-interaction gate
//!
//! Nested content may scroll only while the sheet is fully expanded. In every
//! other state pointer motion over the content drives the sheet instead.

use super::SheetState;

/// Who owns pointer motion over the content region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentInteraction {
    /// Content scrolls; the sheet only moves from handle drags or the scroll bridge
    Scroll,
    /// Content is inert; motion over it is a sheet drag
    DragSheet,
}

impl ContentInteraction {
    pub fn for_state(state: SheetState) -> Self {
        if content_scroll_enabled(state) {
            ContentInteraction::Scroll
        } else {
            ContentInteraction::DragSheet
        }
    }
}

/// `true` iff nested content may scroll in this state
pub fn content_scroll_enabled(state: SheetState) -> bool {
    state == SheetState::Full
}
