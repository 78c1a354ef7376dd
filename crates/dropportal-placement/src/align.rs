#![forbid(unsafe_code)]

//! Cross-axis alignment.
//!
//! Coordinates here are boundary-relative: 0 is the page (or viewport) start
//! and `span.total()` its end. The result is clamped so the overlay never
//! starts before 0; when the content is larger than the whole boundary the
//! start edge wins over the end edge.
//!
//! `Start` slides back when the far edge would escape. `End` has no far-edge
//! correction and relies on the zero clamp alone.

use dropportal_core::AxisSpan;

use crate::options::Alignment;

/// Boundary-relative coordinate of the overlay's near edge on the cross axis.
pub fn align(content: f64, span: &AxisSpan, alignment: Alignment) -> f64 {
    let coord = match alignment {
        Alignment::Start => {
            let overflow_far = content - span.size - span.far;
            if overflow_far > 0.0 {
                span.near - overflow_far
            } else {
                span.near
            }
        }
        Alignment::Middle => {
            let half_diff = (span.size - content) / 2.0;
            let centered = span.near + half_diff;
            // Both overflows are measured from the centered position.
            let overflow_far = content - span.size - span.far + half_diff;
            let overflow_near = content - span.size - span.near + half_diff;
            if overflow_far > 0.0 {
                centered - overflow_far
            } else if overflow_near > 0.0 {
                centered + overflow_near
            } else {
                centered
            }
        }
        Alignment::End => span.far_edge() - content,
    };
    coord.max(0.0)
}
