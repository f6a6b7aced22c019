//! Sheet state and geometry model
//!
//! ## Architecture
//!
//! - `SheetState`: the closed set of resting positions (`Hidden < Minimal < Half < Full`)
//! - `GeometryConfig`: per-state height formulas, evaluated against the viewport height
//! - `SnapHeights`: validated heights for one viewport, used by the resolver
//! - `content_scroll_enabled`: the content-interaction gate derived from the state
//!
//! ## Integration
//!
//! The model is consumed by:
//! - Snap resolution in `resolver.rs`
//! - The drag session in `session.rs` (live offsets, settle animations)
//! - `SheetModel` in `model.rs`, which recomputes the gate on every state change

mod gate;
mod geometry;
mod state;

pub use gate::{content_scroll_enabled, ContentInteraction};
pub use geometry::{
    compute_offset, GeometryConfig, GeometryError, HeightSpec, SnapHeights,
    DESIGN_REFERENCE_HEIGHT,
};
pub use state::{SheetState, StepDirection};
