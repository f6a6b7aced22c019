//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use flexsheet::commands::Cmd;
use flexsheet::messages::{Msg, SheetMsg};
use flexsheet::model::SheetModel;
use flexsheet::session::AnimationId;
use flexsheet::sheet::{GeometryConfig, SheetState, SnapHeights};
use flexsheet::style::PanelStyle;
use flexsheet::update::update;

pub const VIEWPORT: f32 = 812.0;

/// Minimal=60, Half=324, Full=711 at any viewport
pub fn test_geometry() -> GeometryConfig {
    GeometryConfig::fixed(60.0, 324.0, 711.0)
}

pub fn test_heights() -> SnapHeights {
    test_geometry().resolve(VIEWPORT).unwrap()
}

/// Create a test sheet resting in `state` on an 812pt viewport
pub fn test_model(state: SheetState) -> SheetModel {
    test_model_with_style(PanelStyle::default_flex().with_initial_state(state))
}

pub fn test_model_with_style(style: PanelStyle) -> SheetModel {
    SheetModel::new(style, test_geometry(), VIEWPORT).unwrap()
}

/// Drag through `samples` and release at the last one with `velocity`
pub fn drag_and_release(model: &mut SheetModel, samples: &[f32], velocity: f32) -> Option<Cmd> {
    for &translation in samples {
        update(model, Msg::drag_changed(translation));
    }
    let last = samples.last().copied().unwrap_or(0.0);
    update(model, Msg::drag_ended_with_velocity(last, velocity))
}

/// Id of the animation currently running, if any
pub fn running_animation(model: &SheetModel) -> Option<AnimationId> {
    model.session.animation().map(|animation| animation.id)
}

/// Complete whatever animation is running, as the host would
pub fn finish_animation(model: &mut SheetModel) -> Option<Cmd> {
    let id = running_animation(model)?;
    update(model, Msg::Sheet(SheetMsg::SettleFinished(id)))
}

/// Feed a sequence of content offsets
pub fn scroll_through(model: &mut SheetModel, offsets: &[f32]) {
    for &offset in offsets {
        update(model, Msg::scroll(offset));
    }
}
