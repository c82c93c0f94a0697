//! Interpolation and pixel-space conversion.
//!
//! Model:
//! - `N` in-between cels divide the [first, last] pivot segment into `N + 1`
//!   equal steps; the cel at order-index `i` (1-based) receives the position
//!   at step `i`. Position in the deduplicated sequence drives the step, not
//!   frame span: a cel held over many frames advances one step, same as a
//!   cel shown for a single frame.
//! - Pixel conversion scales normalized scene units by a fixed
//!   units-per-field factor, with the vertical axis corrected by the scene's
//!   unit aspect ratio.

use crate::data::{PivotPoint, PixelPoint};

/// Host units-per-field to pixel conversion factor (one field in pixels).
pub const FIELD_SCALE: f32 = 208.33333;

/// Interpolated pivot for the cel at 1-based order-index `index` among
/// `count` in-between cels, in normalized scene units.
pub fn step_pivot(first: PivotPoint, last: PivotPoint, count: usize, index: usize) -> PivotPoint {
    let steps = (count + 1) as f32;
    let i = index as f32;
    PivotPoint {
        x: -(first.x - last.x) / steps * i + first.x,
        y: -(first.y - last.y) / steps * i + first.y,
    }
}

/// Convert a normalized pivot into the host's pixel-addressed space.
/// `aspect` is the scene's vertical-to-horizontal unit ratio.
pub fn to_pixels(pivot: PivotPoint, aspect: f32) -> PixelPoint {
    PixelPoint {
        x: FIELD_SCALE * pivot.x,
        y: FIELD_SCALE * pivot.y * aspect,
    }
}
