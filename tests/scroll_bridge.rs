//! Scroll bridge tests - content scrolling driving Half <-> Full

mod common;

use common::{drag_and_release, scroll_through, test_model, test_model_with_style};
use flexsheet::messages::Msg;
use flexsheet::model::StateSource;
use flexsheet::sheet::SheetState;
use flexsheet::style::{PanelStyle, ScrollBridgeConfig};
use flexsheet::update::update;

#[test]
fn test_push_up_at_half_expands_to_full() {
    let mut model = test_model(SheetState::Half);
    scroll_through(&mut model, &[0.0]);
    let cmd = update(&mut model, Msg::scroll(25.0)).unwrap();

    assert_eq!(model.state(), SheetState::Full);
    assert_eq!(model.last_source(), StateSource::ScrollBridge);
    assert!(model.content_scroll_enabled());
    assert!(model.bridge.is_expanding());

    let animation = cmd.animation().unwrap();
    assert_eq!(animation.from_offset, 488.0 - 101.0);
}

#[test]
fn test_jitter_inside_deadband_is_ignored() {
    let mut model = test_model(SheetState::Half);
    scroll_through(&mut model, &[0.0, 8.0, 3.0, 12.0, 20.0]);
    assert_eq!(model.state(), SheetState::Half);
}

#[test]
fn test_pull_down_past_top_at_full_collapses_to_half() {
    let mut model = test_model(SheetState::Full);
    scroll_through(&mut model, &[0.0, 300.0, 0.0]);
    assert_eq!(model.state(), SheetState::Full);

    update(&mut model, Msg::scroll(-25.0));
    assert_eq!(model.state(), SheetState::Half);
    assert!(!model.content_scroll_enabled());
    assert!(!model.bridge.is_expanding());
}

#[test]
fn test_collapse_target_follows_config() {
    let style = PanelStyle {
        scroll_bridge: ScrollBridgeConfig {
            collapse_to: SheetState::Minimal,
            ..ScrollBridgeConfig::default()
        },
        ..PanelStyle::default_flex().with_initial_state(SheetState::Full)
    };
    let mut model = test_model_with_style(style);
    scroll_through(&mut model, &[0.0, -30.0]);
    assert_eq!(model.state(), SheetState::Minimal);
}

#[test]
fn test_deadband_follows_config() {
    let style = PanelStyle {
        scroll_bridge: ScrollBridgeConfig {
            deadband: 50.0,
            ..ScrollBridgeConfig::default()
        },
        ..PanelStyle::default_flex().with_initial_state(SheetState::Half)
    };
    let mut model = test_model_with_style(style);
    scroll_through(&mut model, &[0.0, 40.0]);
    assert_eq!(model.state(), SheetState::Half);
    scroll_through(&mut model, &[60.0]);
    assert_eq!(model.state(), SheetState::Full);
}

#[test]
fn test_minimal_ignores_content_scroll() {
    let mut model = test_model(SheetState::Minimal);
    scroll_through(&mut model, &[0.0, 100.0, -100.0]);
    assert_eq!(model.state(), SheetState::Minimal);
}

#[test]
fn test_bridge_is_inert_while_dragging() {
    let mut model = test_model(SheetState::Half);
    scroll_through(&mut model, &[0.0]);

    update(&mut model, Msg::drag_changed(-10.0));
    for offset in [30.0, 80.0, 150.0] {
        assert_eq!(update(&mut model, Msg::scroll(offset)), None);
        update(&mut model, Msg::drag_changed(-10.0 - offset));
    }
    assert_eq!(model.state(), SheetState::Half);
    assert!(!model.bridge.is_expanding());

    update(&mut model, Msg::drag_ended_with_velocity(-160.0, -700.0));
    assert_eq!(model.state(), SheetState::Full);
    assert_eq!(model.last_source(), StateSource::DragRelease);
}

#[test]
fn test_drag_release_clears_expanding_flag() {
    let mut model = test_model(SheetState::Half);
    scroll_through(&mut model, &[0.0, 30.0]);
    assert!(model.bridge.is_expanding());

    drag_and_release(&mut model, &[80.0], 800.0);
    assert_eq!(model.state(), SheetState::Half);
    assert!(!model.bridge.is_expanding());

    // a fresh push from the last recorded offset expands again
    scroll_through(&mut model, &[55.0]);
    assert_eq!(model.state(), SheetState::Full);
}

#[test]
fn test_programmatic_change_restarts_scroll_run() {
    let mut model = test_model(SheetState::Half);
    scroll_through(&mut model, &[0.0, 15.0]);
    update(&mut model, Msg::set_state(SheetState::Half));
    // only 10px since the reset
    scroll_through(&mut model, &[25.0]);
    assert_eq!(model.state(), SheetState::Half);
}

#[test]
fn test_disabled_bridge_leaves_state_alone() {
    let style = PanelStyle {
        scroll_bridge: ScrollBridgeConfig {
            enabled: false,
            ..ScrollBridgeConfig::default()
        },
        ..PanelStyle::default_flex().with_initial_state(SheetState::Half)
    };
    let mut model = test_model_with_style(style);
    scroll_through(&mut model, &[0.0, 200.0]);
    assert_eq!(model.state(), SheetState::Half);
}

#[test]
fn test_collapse_never_hides_when_hiding_is_disallowed() {
    let style = PanelStyle {
        scroll_bridge: ScrollBridgeConfig {
            collapse_to: SheetState::Hidden,
            ..ScrollBridgeConfig::default()
        },
        ..PanelStyle::default_flex()
            .with_allow_hide(false)
            .with_initial_state(SheetState::Full)
    };
    let mut model = test_model_with_style(style);
    scroll_through(&mut model, &[0.0, -30.0]);
    assert_eq!(model.state(), SheetState::Minimal);
    assert!(!model.content_scroll_enabled());
}

#[test]
fn test_collapse_to_hidden_when_hiding_is_allowed() {
    let style = PanelStyle {
        scroll_bridge: ScrollBridgeConfig {
            collapse_to: SheetState::Hidden,
            ..ScrollBridgeConfig::default()
        },
        ..PanelStyle::default_flex()
            .with_allow_hide(true)
            .with_initial_state(SheetState::Full)
    };
    let mut model = test_model_with_style(style);
    scroll_through(&mut model, &[0.0, -30.0]);
    assert_eq!(model.state(), SheetState::Hidden);
}
