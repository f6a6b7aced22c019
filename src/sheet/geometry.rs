//! Height and offset geometry for the sheet
//!
//! Each resting state maps to an absolute panel height for a given viewport
//! height. Heights are linear combinations of a fixed pixel term, a fraction of
//! the viewport and a design-scaled term, which covers every height formula the
//! sheet presets need.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SheetState;

/// Viewport height the design-scaled terms were authored against
pub const DESIGN_REFERENCE_HEIGHT: f32 = 812.0;

/// Rejected geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("viewport height must be a positive finite number, got {0}")]
    InvalidViewport(f32),

    #[error("height for {state} is not finite ({height})")]
    NonFiniteHeight { state: SheetState, height: f32 },

    #[error("heights must be strictly increasing: {lower} ({lower_height}) >= {upper} ({upper_height})")]
    Unordered {
        lower: SheetState,
        lower_height: f32,
        upper: SheetState,
        upper_height: f32,
    },

    #[error("full height {full} exceeds viewport height {viewport}")]
    ExceedsViewport { full: f32, viewport: f32 },
}

/// Height formula for one state
///
/// `height = fixed + fraction * viewport + scaled * viewport / reference`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightSpec {
    /// Absolute pixels
    pub fixed: f32,
    /// Fraction of the viewport height
    pub fraction: f32,
    /// Pixels at the design reference height, scaled with the viewport
    pub scaled: f32,
}

impl HeightSpec {
    pub const fn fixed(px: f32) -> Self {
        Self {
            fixed: px,
            fraction: 0.0,
            scaled: 0.0,
        }
    }

    pub const fn fraction(fraction: f32) -> Self {
        Self {
            fixed: 0.0,
            fraction,
            scaled: 0.0,
        }
    }

    pub const fn scaled(design_px: f32) -> Self {
        Self {
            fixed: 0.0,
            fraction: 0.0,
            scaled: design_px,
        }
    }

    /// Combine two formulas term by term
    pub fn plus(self, other: HeightSpec) -> Self {
        Self {
            fixed: self.fixed + other.fixed,
            fraction: self.fraction + other.fraction,
            scaled: self.scaled + other.scaled,
        }
    }

    /// Evaluate for a viewport height
    pub fn eval(&self, viewport_height: f32, reference_height: f32) -> f32 {
        let scale = if reference_height > 0.0 {
            viewport_height / reference_height
        } else {
            1.0
        };
        self.fixed + self.fraction * viewport_height + self.scaled * scale
    }
}

/// Per-state height formulas plus the consumer's chrome offsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub minimal: HeightSpec,
    pub half: HeightSpec,
    pub full: HeightSpec,
    /// Extra offset subtracted from the top edge in the `Minimal` state, so the
    /// visible panel sits above a fixed header stacked below it
    pub minimal_header_offset: f32,
    /// Reference viewport height for `HeightSpec::scaled` terms
    pub reference_height: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self::list_layout()
    }
}

impl GeometryConfig {
    /// Quarter / half / 90% of the viewport
    pub fn proportional() -> Self {
        Self {
            minimal: HeightSpec::fraction(0.25),
            half: HeightSpec::fraction(0.5),
            full: HeightSpec::fraction(0.9),
            minimal_header_offset: 0.0,
            reference_height: DESIGN_REFERENCE_HEIGHT,
        }
    }

    /// Header strip when minimal, two list rows plus header and bottom chrome
    /// when half, 87.6% of the viewport when full
    ///
    /// Every scaled term is scaled once by `viewport / reference_height`, so
    /// the half height grows linearly with the viewport. The tab bar and safe
    /// area are not scaled a second time; at the 812pt reference both forms
    /// give the same 383pt.
    pub fn list_layout() -> Self {
        let header = HeightSpec::scaled(60.0);
        let rows = HeightSpec::scaled(120.0 * 2.0);
        let tab_bar = HeightSpec::scaled(49.0);
        let safe_area_bottom = HeightSpec::scaled(34.0);

        Self {
            minimal: header,
            half: rows.plus(header).plus(tab_bar).plus(safe_area_bottom),
            full: HeightSpec::fraction(0.876),
            minimal_header_offset: 0.0,
            reference_height: DESIGN_REFERENCE_HEIGHT,
        }
    }

    /// Absolute pixel heights, one per state
    pub fn fixed(minimal: f32, half: f32, full: f32) -> Self {
        Self {
            minimal: HeightSpec::fixed(minimal),
            half: HeightSpec::fixed(half),
            full: HeightSpec::fixed(full),
            minimal_header_offset: 0.0,
            reference_height: DESIGN_REFERENCE_HEIGHT,
        }
    }

    pub fn with_minimal_header_offset(mut self, offset: f32) -> Self {
        self.minimal_header_offset = offset;
        self
    }

    /// Panel height for a state. Pure and total; `Hidden` is always zero.
    pub fn height(&self, state: SheetState, viewport_height: f32) -> f32 {
        let spec = match state {
            SheetState::Hidden => return 0.0,
            SheetState::Minimal => &self.minimal,
            SheetState::Half => &self.half,
            SheetState::Full => &self.full,
        };
        spec.eval(viewport_height, self.reference_height)
    }

    /// Top edge of the panel: `viewport - height(state) + live_delta`
    ///
    /// `Minimal` additionally subtracts `minimal_header_offset`.
    pub fn offset(&self, state: SheetState, viewport_height: f32, live_delta: f32) -> f32 {
        let mut offset = viewport_height - self.height(state, viewport_height) + live_delta;
        if state == SheetState::Minimal {
            offset -= self.minimal_header_offset;
        }
        offset
    }

    /// Evaluate all heights for a viewport and check they are usable
    pub fn resolve(&self, viewport_height: f32) -> Result<SnapHeights, GeometryError> {
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            return Err(GeometryError::InvalidViewport(viewport_height));
        }

        let heights = SnapHeights {
            viewport: viewport_height,
            minimal: self.height(SheetState::Minimal, viewport_height),
            half: self.height(SheetState::Half, viewport_height),
            full: self.height(SheetState::Full, viewport_height),
            minimal_header_offset: self.minimal_header_offset,
        };

        for state in SheetState::ALL {
            let height = heights.height(state);
            if !height.is_finite() {
                return Err(GeometryError::NonFiniteHeight { state, height });
            }
        }

        for pair in SheetState::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            let (lower_height, upper_height) = (heights.height(lower), heights.height(upper));
            if lower_height >= upper_height {
                return Err(GeometryError::Unordered {
                    lower,
                    lower_height,
                    upper,
                    upper_height,
                });
            }
        }

        if heights.full > viewport_height {
            return Err(GeometryError::ExceedsViewport {
                full: heights.full,
                viewport: viewport_height,
            });
        }

        Ok(heights)
    }
}

/// Validated heights for one viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapHeights {
    pub viewport: f32,
    pub minimal: f32,
    pub half: f32,
    pub full: f32,
    pub minimal_header_offset: f32,
}

impl SnapHeights {
    pub fn height(&self, state: SheetState) -> f32 {
        match state {
            SheetState::Hidden => 0.0,
            SheetState::Minimal => self.minimal,
            SheetState::Half => self.half,
            SheetState::Full => self.full,
        }
    }

    /// Top edge of the panel for a state plus the in-progress drag contribution
    pub fn offset(&self, state: SheetState, live_delta: f32) -> f32 {
        let mut offset = self.viewport - self.height(state) + live_delta;
        if state == SheetState::Minimal {
            offset -= self.minimal_header_offset;
        }
        offset
    }
}

/// Top edge of the panel for a state, viewport and live drag offset
pub fn compute_offset(
    geometry: &GeometryConfig,
    state: SheetState,
    viewport_height: f32,
    live_delta: f32,
) -> f32 {
    geometry.offset(state, viewport_height, live_delta)
}
