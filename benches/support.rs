//! Shared helpers for benchmarks

use flexsheet::model::SheetModel;
use flexsheet::sheet::{GeometryConfig, SheetState};
use flexsheet::style::PanelStyle;

/// Create a sheet on a phone-sized viewport, resting in `state`
#[allow(dead_code)]
pub fn make_model(state: SheetState) -> SheetModel {
    SheetModel::new(
        PanelStyle::default_flex().with_initial_state(state),
        GeometryConfig::list_layout(),
        812.0,
    )
    .expect("list layout is valid at 812pt")
}

/// Translation samples for a smooth drag of `distance` over `samples` frames
#[allow(dead_code)]
pub fn drag_samples(distance: f32, samples: usize) -> Vec<f32> {
    (1..=samples)
        .map(|i| distance * i as f32 / samples as f32)
        .collect()
}
