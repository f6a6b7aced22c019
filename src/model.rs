//! Sheet model - the complete state of one flexible sheet
//!
//! `currentState` has exactly two writers: the drag session on release and the
//! scroll bridge on a qualifying scroll. Programmatic changes from the host go
//! through `SheetMsg::SetState`. The content gate is recomputed in the same call
//! that changes the state, so it is never observed out of sync.

use crate::bridge::ScrollBridge;
use crate::config::{ConfigError, SheetConfig};
use crate::resolver::DragRelease;
use crate::session::{AnimationId, DragSession, SettleAnimation, SettleOutcome};
use crate::sheet::{
    content_scroll_enabled, ContentInteraction, GeometryConfig, GeometryError, SheetState,
    SnapHeights,
};
use crate::style::PanelStyle;

/// What moved the sheet into its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSource {
    Initial,
    DragRelease,
    ScrollBridge,
    Programmatic,
}

/// One flexible sheet
#[derive(Debug, Clone)]
pub struct SheetModel {
    style: PanelStyle,
    geometry: GeometryConfig,
    heights: SnapHeights,
    state: SheetState,
    last_source: StateSource,
    content_scroll_enabled: bool,
    pub session: DragSession,
    pub bridge: ScrollBridge,
}

impl SheetModel {
    /// Build a sheet, rejecting geometry that is not strictly ordered for the
    /// initial viewport
    pub fn new(
        style: PanelStyle,
        geometry: GeometryConfig,
        viewport_height: f32,
    ) -> Result<Self, GeometryError> {
        let heights = geometry.resolve(viewport_height)?;
        let state = style.reachable_initial_state();
        let bridge = ScrollBridge::new(style.scroll_bridge, style.allow_hide);

        tracing::debug!(
            %state,
            viewport_height,
            minimal = heights.minimal,
            half = heights.half,
            full = heights.full,
            "sheet created"
        );

        Ok(Self {
            style,
            geometry,
            heights,
            state,
            last_source: StateSource::Initial,
            content_scroll_enabled: content_scroll_enabled(state),
            session: DragSession::new(),
            bridge,
        })
    }

    /// Build a sheet from a loaded config, validating the style as well as
    /// the geometry
    pub fn from_config(config: SheetConfig, viewport_height: f32) -> Result<Self, ConfigError> {
        config.style.validate()?;
        Ok(Self::new(config.style, config.geometry, viewport_height)?)
    }

    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    pub fn heights(&self) -> &SnapHeights {
        &self.heights
    }

    pub fn viewport_height(&self) -> f32 {
        self.heights.viewport
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    pub fn last_source(&self) -> StateSource {
        self.last_source
    }

    pub fn content_scroll_enabled(&self) -> bool {
        self.content_scroll_enabled
    }

    pub fn content_interaction(&self) -> ContentInteraction {
        ContentInteraction::for_state(self.state)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Live drag or animation contribution to the offset
    pub fn live_offset(&self) -> f32 {
        self.session.live_offset()
    }

    /// Top edge of the panel to render this frame
    pub fn rendered_offset(&self) -> f32 {
        self.heights.offset(self.state, self.session.live_offset())
    }

    /// Visible panel height this frame
    pub fn rendered_height(&self) -> f32 {
        (self.heights.viewport - self.rendered_offset()).max(0.0)
    }

    /// Assign the state and recompute everything derived from it
    ///
    /// Returns whether the state actually changed.
    pub(crate) fn set_state(&mut self, state: SheetState, source: StateSource) -> bool {
        let previous = self.state;
        self.state = state;
        self.last_source = source;
        self.content_scroll_enabled = content_scroll_enabled(state);

        if source != StateSource::ScrollBridge {
            self.bridge.reset();
        }

        if previous != state {
            tracing::debug!(
                from = %previous,
                to = %state,
                ?source,
                scroll_enabled = self.content_scroll_enabled,
                "state changed"
            );
        }
        previous != state
    }

    /// Apply a new viewport height, keeping the old one if the geometry does
    /// not hold for it
    pub(crate) fn set_viewport_height(&mut self, viewport_height: f32) -> Result<(), GeometryError> {
        self.heights = self.geometry.resolve(viewport_height)?;
        Ok(())
    }

    /// Re-anchor the session after a non-drag state change
    pub(crate) fn reanchor(
        &mut self,
        old: SheetState,
        new: SheetState,
    ) -> (Option<SettleAnimation>, Option<AnimationId>) {
        let heights = self.heights;
        let spec = self.style.animation;
        self.session.state_changed(old, new, &heights, spec)
    }

    /// Release the active gesture, resolve it and commit the resulting state
    pub(crate) fn release_drag(&mut self, release: DragRelease) -> SettleOutcome {
        let outcome = self
            .session
            .drag_ended(release, self.state, &self.style, &self.heights);
        self.set_state(outcome.to, StateSource::DragRelease);
        outcome
    }

    /// Debug-build consistency checks
    pub fn assert_invariants(&self) {
        debug_assert!(
            self.state.is_reachable(self.style.allow_hide) || self.last_source == StateSource::Programmatic,
            "state {} is not reachable with allow_hide={}",
            self.state,
            self.style.allow_hide
        );
        debug_assert_eq!(
            self.content_scroll_enabled,
            content_scroll_enabled(self.state),
            "content gate out of sync with state {}",
            self.state
        );
    }
}
