//! FlexSheet - gesture-driven bottom sheet state machine
//!
//! This crate provides the core types and logic for a draggable panel anchored
//! to the bottom of a viewport, implementing the Elm Architecture pattern: the
//! host feeds decoded drag samples and content scroll offsets in as `Msg`s, and
//! renders the sheet at `SheetModel::rendered_offset()` after running the
//! returned `Cmd`s.

pub mod bridge;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod replay;
pub mod resolver;
pub mod session;
pub mod sheet;
pub mod style;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SheetConfig;
pub use messages::Msg;
pub use model::SheetModel;
pub use sheet::{GeometryConfig, SheetState};
pub use style::PanelStyle;
