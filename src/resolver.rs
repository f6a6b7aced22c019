//! Snap resolution - maps a finished gesture to the next resting state
//!
//! Two mutually exclusive strategies, picked by comparing the release velocity
//! with the style's drag sensitivity:
//!
//! - **Fling** (`|velocity| > sensitivity`): step exactly one rank in the fling
//!   direction. A fling never skips a rank, whatever its magnitude.
//! - **Nearest** (otherwise): land on the reachable state whose height is closest
//!   to the height the panel would have if the gesture simply stopped.
//!
//! The resolver is total: any input, including non-finite numbers, produces a
//! visible or explicitly allowed state.

use crate::sheet::{SheetState, SnapHeights, StepDirection};
use crate::style::PanelStyle;

/// State used when no candidate can be ranked
pub const FALLBACK_STATE: SheetState = SheetState::Minimal;

/// Candidate order for nearest-snap; earlier entries win ties
const NEAREST_CANDIDATES: [SheetState; 4] = [
    SheetState::Minimal,
    SheetState::Half,
    SheetState::Full,
    SheetState::Hidden,
];

/// Which strategy decided a release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Fling(StepDirection),
    Nearest,
}

/// A finished gesture as seen by the resolver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Signed vertical translation since the gesture began (down is positive)
    pub translation: f32,
    /// `predicted_end_translation - translation`
    pub velocity: f32,
}

impl DragRelease {
    pub fn new(translation: f32, velocity: f32) -> Self {
        Self {
            translation,
            velocity,
        }
    }

    /// Build from the host's translation and its momentum projection
    pub fn from_prediction(translation: f32, predicted_end_translation: f32) -> Self {
        Self {
            translation,
            velocity: predicted_end_translation - translation,
        }
    }
}

/// Decide which strategy applies to a release
pub fn classify(velocity: f32, drag_sensitivity: f32) -> Resolution {
    if velocity.abs() > drag_sensitivity {
        if velocity > 0.0 {
            Resolution::Fling(StepDirection::Collapse)
        } else {
            Resolution::Fling(StepDirection::Expand)
        }
    } else {
        Resolution::Nearest
    }
}

/// Resolve the state a released gesture lands on
pub fn resolve(
    current: SheetState,
    release: DragRelease,
    style: &PanelStyle,
    heights: &SnapHeights,
) -> SheetState {
    resolve_with_reason(current, release, style, heights).0
}

/// Like `resolve`, also reporting which strategy fired
pub fn resolve_with_reason(
    current: SheetState,
    release: DragRelease,
    style: &PanelStyle,
    heights: &SnapHeights,
) -> (SheetState, Resolution) {
    let resolution = classify(release.velocity, style.drag_sensitivity);
    let next = match resolution {
        Resolution::Fling(direction) => current.step(direction, style.allow_hide),
        Resolution::Nearest => {
            let implied = implied_height(current, release.translation, heights);
            nearest_state(implied, heights, style.allow_hide)
        }
    };

    tracing::debug!(
        from = %current,
        to = %next,
        ?resolution,
        translation = release.translation,
        velocity = release.velocity,
        "resolved release"
    );

    (next, resolution)
}

/// Height the panel would rest at if the gesture stopped here
///
/// Dragging down (positive translation) shrinks the panel.
pub fn implied_height(current: SheetState, translation: f32, heights: &SnapHeights) -> f32 {
    let offset = heights.viewport - heights.height(current) + translation;
    heights.viewport - offset
}

/// Reachable state whose height is numerically closest to `height`
///
/// Ties go to the first candidate in `Minimal, Half, Full, Hidden` order.
/// Falls back to `FALLBACK_STATE` when nothing can be compared.
pub fn nearest_state(height: f32, heights: &SnapHeights, allow_hide: bool) -> SheetState {
    let mut best: Option<(SheetState, f32)> = None;

    for state in NEAREST_CANDIDATES {
        if !state.is_reachable(allow_hide) {
            continue;
        }
        let distance = (height - heights.height(state)).abs();
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((state, distance)),
        }
    }

    best.map(|(state, _)| state).unwrap_or(FALLBACK_STATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::GeometryConfig;

    fn heights() -> SnapHeights {
        GeometryConfig::fixed(60.0, 324.0, 711.0)
            .resolve(812.0)
            .unwrap()
    }

    #[test]
    fn test_classify_threshold_is_exclusive() {
        assert_eq!(classify(500.0, 500.0), Resolution::Nearest);
        assert_eq!(classify(-500.0, 500.0), Resolution::Nearest);
        assert_eq!(
            classify(500.1, 500.0),
            Resolution::Fling(StepDirection::Collapse)
        );
        assert_eq!(
            classify(-600.0, 500.0),
            Resolution::Fling(StepDirection::Expand)
        );
    }

    #[test]
    fn test_implied_height() {
        let heights = heights();
        assert_eq!(implied_height(SheetState::Half, 100.0, &heights), 224.0);
        assert_eq!(implied_height(SheetState::Half, -100.0, &heights), 424.0);
    }

    #[test]
    fn test_nearest_prefers_minimal_on_tie() {
        let heights = heights();
        // exactly between minimal (60) and half (324)
        assert_eq!(nearest_state(192.0, &heights, false), SheetState::Minimal);
    }

    #[test]
    fn test_nearest_excludes_hidden_unless_allowed() {
        let heights = heights();
        assert_eq!(nearest_state(5.0, &heights, false), SheetState::Minimal);
        assert_eq!(nearest_state(5.0, &heights, true), SheetState::Hidden);
    }

    #[test]
    fn test_visible_state_wins_tie_with_hidden() {
        let heights = heights();
        assert_eq!(nearest_state(30.0, &heights, true), SheetState::Minimal);
    }

    #[test]
    fn test_nan_falls_back_to_minimal() {
        let heights = heights();
        assert_eq!(nearest_state(f32::NAN, &heights, true), FALLBACK_STATE);
        let style = PanelStyle::default_flex();
        let next = resolve(
            SheetState::Full,
            DragRelease::new(f32::NAN, 0.0),
            &style,
            &heights,
        );
        assert_eq!(next, SheetState::Minimal);
    }

    #[test]
    fn test_release_from_prediction() {
        let release = DragRelease::from_prediction(40.0, 700.0);
        assert_eq!(release.velocity, 660.0);
    }
}
