#![forbid(unsafe_code)]

//! Anchor measurement.
//!
//! Turns a viewport-relative anchor rectangle into a [`TargetMeasure`]: page
//! coordinates for the near edges, remaining space for the far edges, and the
//! same four values against the viewport.
//!
//! The function is total. Anchors partly or fully off-screen produce zero or
//! negative space rather than an error.

use crate::geometry::{AnchorRect, PageMetrics, TargetMeasure, ViewportSpace};

/// Measure an anchor against the page and the viewport.
///
/// ```
/// use dropportal_core::{AnchorRect, PageMetrics, measure_anchor};
///
/// let metrics = PageMetrics::unscrolled(1000.0, 800.0).scrolled(0.0, 200.0);
/// let target = measure_anchor(AnchorRect::new(50.0, 100.0, 400.0, 50.0), &metrics);
///
/// assert_eq!(target.top, 250.0);
/// assert_eq!(target.space_bottom, 800.0 - 50.0 - 250.0);
/// assert_eq!(target.window.unwrap().top, 50.0);
/// ```
pub fn measure_anchor(rect: AnchorRect, metrics: &PageMetrics) -> TargetMeasure {
    let top = metrics.scroll_y + rect.top;
    let left = metrics.scroll_x + rect.left;
    let space_right = metrics.page_width - rect.width - left;
    let space_bottom = metrics.page_height - rect.height - top;

    let window = ViewportSpace {
        top: rect.top,
        left: rect.left,
        right: metrics.viewport_width - rect.width - rect.left,
        bottom: metrics.viewport_height - rect.height - rect.top,
    };

    crate::trace!(
        top,
        left,
        space_right,
        space_bottom,
        "anchor measured"
    );

    TargetMeasure {
        top,
        left,
        space_right,
        space_bottom,
        width: rect.width,
        height: rect.height,
        window: Some(window),
    }
}
