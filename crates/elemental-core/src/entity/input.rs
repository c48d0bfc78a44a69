//! Per-tick player intent
//!
//! The input collaborator polls whatever devices it likes and hands the core
//! one of these per tick. The core never touches hardware state.

/// Movement and selection intent for one simulation tick
#[derive(Debug, Clone)]
pub struct InputIntent {
    /// Analog horizontal axis in [-1, 1]; small values are ignored
    pub horizontal_axis: f32,

    // Digital movement; left/right override the analog axis and are scaled
    // by the active element's speed multiplier
    pub left_pressed: bool,
    pub right_pressed: bool,

    // Up/down steer hovering elements vertically
    pub up_pressed: bool,
    pub down_pressed: bool,

    /// Jump button held this tick
    pub jump_pressed: bool,

    /// Requested element switch (catalog index), if any
    pub element_select: Option<u8>,
}

impl InputIntent {
    pub fn new() -> Self {
        Self {
            horizontal_axis: 0.0,
            left_pressed: false,
            right_pressed: false,
            up_pressed: false,
            down_pressed: false,
            jump_pressed: false,
            element_select: None,
        }
    }
}

impl Default for InputIntent {
    fn default() -> Self {
        Self::new()
    }
}
