#![forbid(unsafe_code)]

//! Core: geometry data model and anchor measurement for overlay placement.
//!
//! Callers measure the anchor against the viewport, feed the rectangle and
//! page metrics to [`anchor::measure_anchor`], and hand the resulting
//! [`geometry::TargetMeasure`] to a placement resolver.

pub mod anchor;
pub mod geometry;
pub mod logging;
pub mod scroll;

pub use anchor::measure_anchor;
pub use geometry::{
    AnchorRect, Axis, AxisSpan, Boundary, ContentMeasure, PageMetrics, TargetMeasure,
    ViewportSpace, same_px,
};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, trace_span};
