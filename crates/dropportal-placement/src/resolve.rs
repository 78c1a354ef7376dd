#![forbid(unsafe_code)]

//! Placement resolution.
//!
//! Combines main-axis side selection ([`crate::side`]) with cross-axis
//! alignment ([`crate::align`]) into a [`PortalMeasure`].
//!
//! Fit decisions and alignment are made against the viewport unless
//! `can_overflow_screen` is set, in which case the whole page is used. The
//! result is always expressed in page coordinates.

use dropportal_core::{Axis, Boundary, ContentMeasure, TargetMeasure, same_px};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::align::align;
use crate::options::{Alignment, PlacementOptions, Position};
use crate::side::{SideDecision, choose_side, place_on_side};

/// Resolved overlay rectangle in page coordinates.
///
/// `width`/`height` are never negative; a zero extent means there is no room
/// to show the overlay. `top`/`left` may be negative for anchors outside the
/// page.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PortalMeasure {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    /// Side actually used; may be the opposite of the requested one.
    pub position: Position,
    pub alignment: Alignment,
    /// Snapshot of the target the placement was computed from.
    pub target: TargetMeasure,
}

impl PortalMeasure {
    /// Whether the overlay has a visible area.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Field-by-field comparison where `NaN` equals `NaN`, so hosts can skip
/// re-applying an unchanged placement.
impl PartialEq for PortalMeasure {
    fn eq(&self, other: &Self) -> bool {
        same_px(self.top, other.top)
            && same_px(self.left, other.left)
            && same_px(self.width, other.width)
            && same_px(self.height, other.height)
            && self.position == other.position
            && self.alignment == other.alignment
            && self.target.same_as(&other.target)
    }
}

/// Resolve where the overlay goes.
///
/// ```
/// use dropportal_core::{ContentMeasure, TargetMeasure};
/// use dropportal_placement::{PlacementOptions, Position, resolve_placement};
///
/// let content = ContentMeasure::new(200.0, 200.0);
/// let target = TargetMeasure::new(400.0, 100.0, 400.0, 100.0, 400.0, 50.0);
///
/// let placed = resolve_placement(content, &target, &PlacementOptions::default());
/// assert_eq!(placed.position, Position::Top);
/// assert_eq!(placed.top, 200.0);
/// ```
pub fn resolve_placement(
    content: ContentMeasure,
    target: &TargetMeasure,
    options: &PlacementOptions,
) -> PortalMeasure {
    resolve_with_evidence(content, target, options).0
}

/// Resolve and also return the main-axis decision evidence.
pub fn resolve_with_evidence(
    content: ContentMeasure,
    target: &TargetMeasure,
    options: &PlacementOptions,
) -> (PortalMeasure, SideDecision) {
    let span = dropportal_core::trace_span!(
        "resolve_placement",
        position = options.position.as_str(),
        alignment = options.alignment.as_str()
    );
    let _guard = span.enter();

    let boundary = if options.can_overflow_screen {
        Boundary::Page
    } else {
        Boundary::Viewport
    };
    let main = options.position.axis();
    let cross = main.cross();

    let main_span = target.span(main, boundary);
    let main_offset = options.offset(main);
    let decision = choose_side(
        content.extent(main),
        &main_span,
        options.position,
        main_offset,
        options.min_extent(main),
    );
    let (main_coord, main_extent) =
        place_on_side(content.extent(main), &main_span, decision.chosen, main_offset);

    let cross_span = target.span(cross, boundary);
    let cross_coord = cross_span.to_page(align(
        content.extent(cross),
        &cross_span,
        options.alignment,
    )) + options.offset(cross);

    let (top, left, width, height) = match main {
        Axis::Vertical => (main_coord, cross_coord, content.width, main_extent),
        Axis::Horizontal => (cross_coord, main_coord, main_extent, content.height),
    };

    dropportal_core::trace!(
        requested = decision.requested.as_str(),
        chosen = decision.chosen.as_str(),
        reason = decision.reason.as_str(),
        overflow = decision.overflow_preferred,
        "side resolved"
    );
    dropportal_core::trace!(top, left, width, height, "portal placed");

    let measure = PortalMeasure {
        top,
        left,
        width,
        height,
        position: decision.chosen,
        alignment: options.alignment,
        target: *target,
    };
    (measure, decision)
}
