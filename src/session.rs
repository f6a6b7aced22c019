//! Drag session controller
//!
//! Per-gesture state machine: `Idle -> Dragging -> Settling -> Idle`.
//!
//! While dragging, every sample recomputes the live offset. On release the
//! resolver runs once and the session emits a `SettleAnimation` that moves the
//! live offset from its last interactive value to zero, expressed relative to
//! the newly resolved state so the panel's top edge stays continuous.
//!
//! A gesture that starts while a settle animation is in flight cancels it and
//! continues from the last presented offset rather than jumping.

use crate::resolver::{self, DragRelease, Resolution};
use crate::sheet::{SheetState, SnapHeights};
use crate::style::{AnimationSpec, PanelStyle};

/// Identifies one settle animation so stale host callbacks can be ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

impl std::fmt::Display for AnimationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "anim#{}", self.0)
    }
}

/// Command for the host: interpolate the live offset from `from_offset` to
/// `to_offset` using `spec`, reporting progress back to the sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleAnimation {
    pub id: AnimationId,
    pub target: SheetState,
    pub from_offset: f32,
    pub to_offset: f32,
    pub spec: AnimationSpec,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging {
        /// Offset carried over from an interrupted settle animation
        base_offset: f32,
        /// Raw translation of the latest sample
        translation: f32,
        /// Offset applied to the panel right now
        live_offset: f32,
    },
    Settling {
        animation: SettleAnimation,
        /// Last interpolated value reported by the host
        presented_offset: f32,
    },
}

/// Result of feeding one movement sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub live_offset: f32,
    /// Set on the first sample of a gesture that interrupted a settle animation
    pub cancelled: Option<AnimationId>,
    /// Whether this sample started the gesture
    pub started: bool,
}

/// Result of releasing a gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleOutcome {
    pub from: SheetState,
    pub to: SheetState,
    pub resolution: Resolution,
    /// `None` when the panel is already at rest or the spec is immediate
    pub animation: Option<SettleAnimation>,
    pub cancelled: Option<AnimationId>,
}

/// Drag session for one sheet; only one gesture is tracked at a time
#[derive(Debug, Clone)]
pub struct DragSession {
    phase: DragPhase,
    next_animation_id: u64,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            next_animation_id: 1,
        }
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, DragPhase::Settling { .. })
    }

    /// Offset to add to the resting position when rendering
    pub fn live_offset(&self) -> f32 {
        match self.phase {
            DragPhase::Idle => 0.0,
            DragPhase::Dragging { live_offset, .. } => live_offset,
            DragPhase::Settling {
                presented_offset, ..
            } => presented_offset,
        }
    }

    /// In-flight animation, if any
    pub fn animation(&self) -> Option<&SettleAnimation> {
        match &self.phase {
            DragPhase::Settling { animation, .. } => Some(animation),
            _ => None,
        }
    }

    /// Feed a movement sample
    pub fn drag_changed(&mut self, translation: f32, state: SheetState) -> DragSample {
        let (base_offset, cancelled, started) = self.gesture_base();
        let live_offset = clamp_live_offset(state, base_offset + translation);

        if started {
            tracing::debug!(%state, base_offset, ?cancelled, "drag started");
        }
        tracing::trace!(translation, live_offset, "drag sample");

        self.phase = DragPhase::Dragging {
            base_offset,
            translation,
            live_offset,
        };

        DragSample {
            live_offset,
            cancelled,
            started,
        }
    }

    /// Release the gesture: resolve the next state and plan the settle
    pub fn drag_ended(
        &mut self,
        release: DragRelease,
        state: SheetState,
        style: &PanelStyle,
        heights: &SnapHeights,
    ) -> SettleOutcome {
        let (base_offset, cancelled, _) = self.gesture_base();
        let translation = base_offset + release.translation;
        let (next, resolution) = resolver::resolve_with_reason(
            state,
            DragRelease::new(translation, release.velocity),
            style,
            heights,
        );

        let last_live = clamp_live_offset(state, translation);
        let from_offset = heights.offset(state, last_live) - heights.offset(next, 0.0);
        let animation = self.plan_settle(next, from_offset, style.animation);

        tracing::debug!(
            from = %state,
            to = %next,
            from_offset,
            animated = animation.is_some(),
            "drag ended"
        );

        SettleOutcome {
            from: state,
            to: next,
            resolution,
            animation,
            cancelled,
        }
    }

    /// Re-anchor the live offset after the state was changed by something other
    /// than a drag release (programmatic set or the scroll bridge)
    ///
    /// An active drag keeps tracking the finger against the new state. Otherwise
    /// the visual position is carried over into a settle animation.
    pub fn state_changed(
        &mut self,
        old: SheetState,
        new: SheetState,
        heights: &SnapHeights,
        spec: AnimationSpec,
    ) -> (Option<SettleAnimation>, Option<AnimationId>) {
        match self.phase {
            DragPhase::Dragging {
                base_offset,
                translation,
                ..
            } => {
                self.phase = DragPhase::Dragging {
                    base_offset,
                    translation,
                    live_offset: clamp_live_offset(new, base_offset + translation),
                };
                (None, None)
            }
            DragPhase::Settling {
                animation,
                presented_offset,
            } => {
                let from_offset =
                    heights.offset(old, presented_offset) - heights.offset(new, 0.0);
                (
                    self.plan_settle(new, from_offset, spec),
                    Some(animation.id),
                )
            }
            DragPhase::Idle => {
                let from_offset = heights.offset(old, 0.0) - heights.offset(new, 0.0);
                (self.plan_settle(new, from_offset, spec), None)
            }
        }
    }

    /// Host reported an interpolated value; ignored for stale animations
    pub fn settle_progress(&mut self, id: AnimationId, offset: f32) -> bool {
        match &mut self.phase {
            DragPhase::Settling {
                animation,
                presented_offset,
            } if animation.id == id && offset.is_finite() => {
                *presented_offset = offset;
                true
            }
            _ => false,
        }
    }

    /// Host finished an animation; returns to `Idle` if it is the current one
    pub fn settle_finished(&mut self, id: AnimationId) -> bool {
        match self.phase {
            DragPhase::Settling { animation, .. } if animation.id == id => {
                tracing::debug!(%id, target = %animation.target, "settle finished");
                self.phase = DragPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Offset a new gesture starts from, and the animation it interrupts
    fn gesture_base(&self) -> (f32, Option<AnimationId>, bool) {
        match self.phase {
            DragPhase::Idle => (0.0, None, true),
            DragPhase::Dragging { base_offset, .. } => (base_offset, None, false),
            DragPhase::Settling {
                animation,
                presented_offset,
            } => (presented_offset, Some(animation.id), true),
        }
    }

    fn plan_settle(
        &mut self,
        target: SheetState,
        from_offset: f32,
        spec: AnimationSpec,
    ) -> Option<SettleAnimation> {
        if !spec.is_animated() || from_offset == 0.0 || !from_offset.is_finite() {
            self.phase = DragPhase::Idle;
            return None;
        }

        let animation = SettleAnimation {
            id: AnimationId(self.next_animation_id),
            target,
            from_offset,
            to_offset: 0.0,
            spec,
        };
        self.next_animation_id += 1;
        self.phase = DragPhase::Settling {
            animation,
            presented_offset: from_offset,
        };
        Some(animation)
    }
}

/// The panel cannot be dragged above its full height: an upward translation
/// while `Full` is clamped to zero. Applies to the live gesture only.
pub fn clamp_live_offset(state: SheetState, translation: f32) -> f32 {
    if state == SheetState::Full && translation < 0.0 {
        0.0
    } else {
        translation
    }
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
    fn test_first_sample_starts_gesture() {
        let mut session = DragSession::new();
        let sample = session.drag_changed(10.0, SheetState::Half);
        assert!(sample.started);
        assert_eq!(sample.live_offset, 10.0);

        let sample = session.drag_changed(25.0, SheetState::Half);
        assert!(!sample.started);
        assert_eq!(session.live_offset(), 25.0);
    }

    #[test]
    fn test_upward_drag_at_full_is_clamped() {
        let mut session = DragSession::new();
        let sample = session.drag_changed(-80.0, SheetState::Full);
        assert_eq!(sample.live_offset, 0.0);

        let sample = session.drag_changed(40.0, SheetState::Full);
        assert_eq!(sample.live_offset, 40.0);
    }

    #[test]
    fn test_release_plans_continuous_animation() {
        let heights = heights();
        let style = PanelStyle::default_flex();
        let mut session = DragSession::new();
        session.drag_changed(200.0, SheetState::Half);

        let outcome = session.drag_ended(
            DragRelease::new(200.0, 50.0),
            SheetState::Half,
            &style,
            &heights,
        );
        assert_eq!(outcome.to, SheetState::Minimal);

        let animation = outcome.animation.unwrap();
        // top edge before: 812 - 324 + 200 = 688; at rest in minimal: 752
        assert_eq!(animation.from_offset, 688.0 - 752.0);
        assert_eq!(animation.to_offset, 0.0);
        assert!(session.is_settling());
        assert_eq!(
            heights.offset(outcome.to, session.live_offset()),
            heights.offset(SheetState::Half, 200.0)
        );
    }

    #[test]
    fn test_immediate_spec_goes_straight_to_idle() {
        let heights = heights();
        let mut style = PanelStyle::default_flex();
        style.animation = AnimationSpec::Immediate;
        let mut session = DragSession::new();
        session.drag_changed(300.0, SheetState::Full);

        let outcome = session.drag_ended(
            DragRelease::new(300.0, 0.0),
            SheetState::Full,
            &style,
            &heights,
        );
        assert!(outcome.animation.is_none());
        assert_eq!(*session.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_release_in_place_needs_no_animation() {
        let heights = heights();
        let style = PanelStyle::default_flex();
        let mut session = DragSession::new();
        session.drag_changed(0.0, SheetState::Half);

        let outcome = session.drag_ended(
            DragRelease::new(0.0, 0.0),
            SheetState::Half,
            &style,
            &heights,
        );
        assert_eq!(outcome.to, SheetState::Half);
        assert!(outcome.animation.is_none());
        assert_eq!(*session.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_new_gesture_blends_from_presented_offset() {
        let heights = heights();
        let style = PanelStyle::default_flex();
        let mut session = DragSession::new();
        session.drag_changed(200.0, SheetState::Half);
        let outcome = session.drag_ended(
            DragRelease::new(200.0, 0.0),
            SheetState::Half,
            &style,
            &heights,
        );
        let animation = outcome.animation.unwrap();

        assert!(session.settle_progress(animation.id, -30.0));
        let sample = session.drag_changed(5.0, outcome.to);
        assert!(sample.started);
        assert_eq!(sample.cancelled, Some(animation.id));
        assert_eq!(sample.live_offset, -25.0);

        // stale callbacks from the cancelled animation are ignored
        assert!(!session.settle_finished(animation.id));
        assert!(session.is_dragging());
    }

    #[test]
    fn test_settle_finished_returns_to_idle() {
        let heights = heights();
        let style = PanelStyle::default_flex();
        let mut session = DragSession::new();
        session.drag_changed(-200.0, SheetState::Half);
        let outcome = session.drag_ended(
            DragRelease::new(-200.0, -900.0),
            SheetState::Half,
            &style,
            &heights,
        );
        assert_eq!(outcome.to, SheetState::Full);
        let animation = outcome.animation.unwrap();

        assert!(!session.settle_finished(AnimationId(animation.id.0 + 1)));
        assert!(session.settle_finished(animation.id));
        assert_eq!(session.live_offset(), 0.0);
    }

    #[test]
    fn test_programmatic_change_while_idle_animates() {
        let heights = heights();
        let mut session = DragSession::new();
        let (animation, cancelled) = session.state_changed(
            SheetState::Minimal,
            SheetState::Full,
            &heights,
            AnimationSpec::default(),
        );
        let animation = animation.unwrap();
        assert!(cancelled.is_none());
        assert_eq!(animation.from_offset, 711.0 - 60.0);
        assert_eq!(animation.target, SheetState::Full);
    }

    #[test]
    fn test_programmatic_change_while_dragging_keeps_tracking() {
        let heights = heights();
        let mut session = DragSession::new();
        session.drag_changed(-50.0, SheetState::Half);
        let (animation, cancelled) = session.state_changed(
            SheetState::Half,
            SheetState::Full,
            &heights,
            AnimationSpec::default(),
        );
        assert!(animation.is_none());
        assert!(cancelled.is_none());
        assert!(session.is_dragging());
        assert_eq!(session.live_offset(), 0.0);
    }
}
