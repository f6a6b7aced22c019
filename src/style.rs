//! Panel style - immutable per-sheet behaviour settings
//!
//! A `PanelStyle` is supplied when the sheet is constructed and is read-only for
//! the lifetime of the sheet.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sheet::SheetState;

/// Default fling threshold in pixels of projected travel
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 500.0;

/// Default scroll deadband in pixels
pub const DEFAULT_SCROLL_DEADBAND: f32 = 20.0;

/// Handle bar chrome, in points
pub const HANDLE_BAR_HEIGHT: f32 = 40.0;
pub const HANDLE_BAR_WIDTH: f32 = 24.0;
pub const HANDLE_BAR_THICKNESS: f32 = 2.0;
pub const CORNER_RADIUS: f32 = 10.0;

/// How the host should interpolate a settle transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationSpec {
    /// Damped spring; `response` is the period in seconds
    Spring {
        response: f32,
        damping_fraction: f32,
        #[serde(default)]
        blend_duration: f32,
    },
    /// Ease-in-out curve over a fixed duration in seconds
    EaseInOut { duration: f32 },
    /// Jump straight to the target
    Immediate,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        AnimationSpec::spring(0.3, 0.7)
    }
}

impl AnimationSpec {
    pub const fn spring(response: f32, damping_fraction: f32) -> Self {
        AnimationSpec::Spring {
            response,
            damping_fraction,
            blend_duration: 0.0,
        }
    }

    /// Whether the host needs to run frames for this animation
    pub fn is_animated(&self) -> bool {
        match self {
            AnimationSpec::Spring { response, .. } => *response > 0.0,
            AnimationSpec::EaseInOut { duration } => *duration > 0.0,
            AnimationSpec::Immediate => false,
        }
    }
}

/// Style settings that cannot produce a well-behaved sheet
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("drag sensitivity must be a non-negative finite number, got {0}")]
    InvalidSensitivity(f32),

    #[error("scroll deadband must be a non-negative finite number, got {0}")]
    InvalidDeadband(f32),

    #[error("scroll bridge cannot collapse from full to {0}")]
    CollapseTargetNotBelowFull(SheetState),

    #[error("scroll bridge collapses to hidden but allow_hide is false")]
    CollapseTargetUnreachable,
}

/// Settings for coupling nested-content scroll to the sheet state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollBridgeConfig {
    pub enabled: bool,
    /// Minimum scroll movement (pixels) acted upon
    pub deadband: f32,
    /// State to collapse to when content is pulled down past its top at `Full`
    pub collapse_to: SheetState,
}

impl ScrollBridgeConfig {
    /// State a collapse at `Full` lands on
    ///
    /// Always below `Full` and never `Hidden` unless hiding is allowed.
    pub fn collapse_target(&self, allow_hide: bool) -> SheetState {
        match self.collapse_to {
            SheetState::Full => SheetState::Half,
            state if !state.is_reachable(allow_hide) => SheetState::Minimal,
            state => state,
        }
    }
}

impl Default for ScrollBridgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            deadband: DEFAULT_SCROLL_DEADBAND,
            collapse_to: SheetState::Half,
        }
    }
}

/// Behaviour settings for one sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelStyle {
    pub animation: AnimationSpec,
    /// Projected-travel threshold above which a release is treated as a fling
    pub drag_sensitivity: f32,
    /// Whether a downward fling from `Minimal` may hide the sheet
    pub allow_hide: bool,
    pub handle_bar_visible: bool,
    /// State the sheet starts in
    pub initial_state: SheetState,
    pub scroll_bridge: ScrollBridgeConfig,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self::default_flex()
    }
}

impl PanelStyle {
    /// Snappy spring, fling threshold 500, no hiding
    pub fn default_flex() -> Self {
        Self {
            animation: AnimationSpec::spring(0.3, 0.7),
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            allow_hide: false,
            handle_bar_visible: false,
            initial_state: SheetState::Minimal,
            scroll_bridge: ScrollBridgeConfig::default(),
        }
    }

    /// Softer spring, more sensitive flings, hiding allowed
    pub fn interactive_flex() -> Self {
        Self {
            animation: AnimationSpec::Spring {
                response: 0.6,
                damping_fraction: 0.8,
                blend_duration: 0.8,
            },
            drag_sensitivity: 300.0,
            allow_hide: true,
            ..Self::default_flex()
        }
    }

    pub fn with_allow_hide(mut self, allow_hide: bool) -> Self {
        self.allow_hide = allow_hide;
        self
    }

    pub fn with_drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    pub fn with_initial_state(mut self, state: SheetState) -> Self {
        self.initial_state = state;
        self
    }

    /// Initial state, moved to `Minimal` when hiding is not allowed
    pub fn reachable_initial_state(&self) -> SheetState {
        if self.initial_state.is_reachable(self.allow_hide) {
            self.initial_state
        } else {
            SheetState::Minimal
        }
    }

    /// Reject thresholds and bridge targets the sheet cannot honour
    pub fn validate(&self) -> Result<(), StyleError> {
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity < 0.0 {
            return Err(StyleError::InvalidSensitivity(self.drag_sensitivity));
        }

        let bridge = &self.scroll_bridge;
        if !bridge.deadband.is_finite() || bridge.deadband < 0.0 {
            return Err(StyleError::InvalidDeadband(bridge.deadband));
        }
        if bridge.collapse_to == SheetState::Full {
            return Err(StyleError::CollapseTargetNotBelowFull(bridge.collapse_to));
        }
        if !bridge.collapse_to.is_reachable(self.allow_hide) {
            return Err(StyleError::CollapseTargetUnreachable);
        }
        Ok(())
    }

    /// Vertical space taken by the handle bar (zero when hidden)
    pub fn handle_bar_height(&self) -> f32 {
        if self.handle_bar_visible {
            HANDLE_BAR_HEIGHT
        } else {
            0.0
        }
    }

    pub fn handle_bar_metrics(&self) -> HandleBarMetrics {
        HandleBarMetrics {
            visible: self.handle_bar_visible,
            height: self.handle_bar_height(),
            width: HANDLE_BAR_WIDTH,
            thickness: HANDLE_BAR_THICKNESS,
            corner_radius: CORNER_RADIUS,
        }
    }
}

/// Sizes a renderer needs to draw the handle bar and panel corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleBarMetrics {
    pub visible: bool,
    pub height: f32,
    pub width: f32,
    pub thickness: f32,
    pub corner_radius: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flex_values() {
        let style = PanelStyle::default_flex();
        assert_eq!(style.drag_sensitivity, 500.0);
        assert!(!style.allow_hide);
        assert_eq!(style.initial_state, SheetState::Minimal);
        assert_eq!(style.scroll_bridge.deadband, 20.0);
    }

    #[test]
    fn test_interactive_flex_allows_hide() {
        let style = PanelStyle::interactive_flex();
        assert!(style.allow_hide);
        assert_eq!(style.drag_sensitivity, 300.0);
        assert!(matches!(
            style.animation,
            AnimationSpec::Spring { response, .. } if response == 0.6
        ));
    }

    #[test]
    fn test_unreachable_initial_state_falls_back() {
        let style = PanelStyle::default_flex().with_initial_state(SheetState::Hidden);
        assert_eq!(style.reachable_initial_state(), SheetState::Minimal);

        let style = style.with_allow_hide(true);
        assert_eq!(style.reachable_initial_state(), SheetState::Hidden);
    }

    #[test]
    fn test_handle_bar_height_tracks_visibility() {
        let mut style = PanelStyle::default_flex();
        assert_eq!(style.handle_bar_height(), 0.0);
        style.handle_bar_visible = true;
        assert_eq!(style.handle_bar_metrics().height, HANDLE_BAR_HEIGHT);
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        let style = PanelStyle::default_flex().with_drag_sensitivity(-1.0);
        assert_eq!(style.validate(), Err(StyleError::InvalidSensitivity(-1.0)));

        let style = PanelStyle::default_flex().with_drag_sensitivity(f32::NAN);
        assert!(matches!(
            style.validate(),
            Err(StyleError::InvalidSensitivity(_))
        ));

        let mut style = PanelStyle::default_flex();
        style.scroll_bridge.deadband = f32::INFINITY;
        assert!(matches!(style.validate(), Err(StyleError::InvalidDeadband(_))));

        assert_eq!(PanelStyle::default_flex().validate(), Ok(()));
        assert_eq!(PanelStyle::interactive_flex().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unusable_collapse_target() {
        let mut style = PanelStyle::default_flex();
        style.scroll_bridge.collapse_to = SheetState::Hidden;
        assert_eq!(style.validate(), Err(StyleError::CollapseTargetUnreachable));
        assert_eq!(style.clone().with_allow_hide(true).validate(), Ok(()));

        style.scroll_bridge.collapse_to = SheetState::Full;
        assert_eq!(
            style.validate(),
            Err(StyleError::CollapseTargetNotBelowFull(SheetState::Full))
        );
    }

    #[test]
    fn test_collapse_target_is_clamped() {
        let mut config = ScrollBridgeConfig::default();
        assert_eq!(config.collapse_target(false), SheetState::Half);
        config.collapse_to = SheetState::Full;
        assert_eq!(config.collapse_target(false), SheetState::Half);
        config.collapse_to = SheetState::Hidden;
        assert_eq!(config.collapse_target(false), SheetState::Minimal);
        assert_eq!(config.collapse_target(true), SheetState::Hidden);
    }

    #[test]
    fn test_animation_spec_yaml() {
        let spec: AnimationSpec =
            serde_yaml::from_str("kind: spring\nresponse: 0.5\ndamping_fraction: 0.9\n").unwrap();
        assert_eq!(spec, AnimationSpec::spring(0.5, 0.9));

        let spec: AnimationSpec = serde_yaml::from_str("kind: immediate\n").unwrap();
        assert!(!spec.is_animated());
    }
}
