//! Property-based invariants for placement resolution.
//!
//! 1. Content that fits on the requested side stays there.
//! 2. Content that overflows the requested side but fits the opposite one flips.
//! 3. Space above the minimum extent keeps the requested side, clamped.
//! 4. When both sides overflow, the roomier side wins with its full space.
//! 5. Cross-axis coordinates stay inside the boundary unless unresolvable.
//! 6. Offsets shift the main-axis coordinate (down below, up above) without
//!    touching the extent.
//! 7. The chosen side is always on the requested axis.
//! 8. Extents never exceed the content or go negative.
//! 9. Against a scrolled viewport, cross-axis coordinates stay inside the
//!    visible window, with `End` pinned to the window start on overflow.

use dropportal_core::{AnchorRect, Axis, PageMetrics, measure_anchor};
use dropportal_placement::{
    Alignment, ContentMeasure, PlacementOptions, PortalMeasure, Position, TargetMeasure,
    resolve_placement,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn position_strategy() -> impl Strategy<Value = Position> {
    prop_oneof![
        Just(Position::Top),
        Just(Position::Right),
        Just(Position::Bottom),
        Just(Position::Left),
    ]
}

fn alignment_strategy() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Start),
        Just(Alignment::Middle),
        Just(Alignment::End),
    ]
}

/// Integer-valued pixels keep the arithmetic exact.
fn px(range: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = f64> {
    range.prop_map(f64::from)
}

fn target_strategy() -> impl Strategy<Value = TargetMeasure> {
    (
        px(0..=1500),
        px(0..=1500),
        px(0..=1500),
        px(0..=1500),
        px(0..=600),
        px(0..=600),
    )
        .prop_map(|(top, left, right, bottom, w, h)| TargetMeasure::new(top, left, right, bottom, w, h))
}

fn content_strategy() -> impl Strategy<Value = ContentMeasure> {
    (px(0..=1200), px(0..=1200)).prop_map(|(w, h)| ContentMeasure::new(w, h))
}

/// Page-relative space on `side`.
fn space(target: &TargetMeasure, side: Position) -> f64 {
    match side {
        Position::Top => target.top,
        Position::Bottom => target.space_bottom,
        Position::Left => target.left,
        Position::Right => target.space_right,
    }
}

fn main_extent(content: &ContentMeasure, side: Position) -> f64 {
    match side {
        Position::Top | Position::Bottom => content.height,
        Position::Left | Position::Right => content.width,
    }
}

/// Target whose `side` has `preferred` space and whose opposite has `opposite`.
fn target_with_spaces(side: Position, preferred: f64, opposite: f64) -> TargetMeasure {
    let mut target = TargetMeasure::new(300.0, 300.0, 300.0, 300.0, 120.0, 40.0);
    for (s, value) in [(side, preferred), (side.opposite(), opposite)] {
        match s {
            Position::Top => target.top = value,
            Position::Bottom => target.space_bottom = value,
            Position::Left => target.left = value,
            Position::Right => target.space_right = value,
        }
    }
    target
}

/// Content whose extent along `side`'s axis is `extent`.
fn content_along(side: Position, extent: f64) -> ContentMeasure {
    match side.axis() {
        Axis::Vertical => ContentMeasure::new(150.0, extent),
        Axis::Horizontal => ContentMeasure::new(extent, 150.0),
    }
}

fn placed_extent(placed: &PortalMeasure, side: Position) -> f64 {
    match side.axis() {
        Axis::Vertical => placed.height,
        Axis::Horizontal => placed.width,
    }
}

/// Scrolled page with an anchor inside the viewport, plus a content box no
/// wider or taller than the viewport. All values are whole pixels.
fn scrolled_case_strategy() -> impl Strategy<Value = (PageMetrics, AnchorRect, ContentMeasure)> {
    (
        (0i32..=2000, 0i32..=2000, 0i32..=500),
        (200i32..=1600, 200i32..=1200),
        (0i32..=100, 0i32..=100, 0i32..=100, 0i32..=100),
        (0i32..=100, 0i32..=100),
    )
        .prop_map(
            |((scroll_x, scroll_y, extra), (vw, vh), (w_pct, h_pct, x_pct, y_pct), (cw_pct, ch_pct))| {
                let width = vw * w_pct / 100;
                let height = vh * h_pct / 100;
                let left = (vw - width) * x_pct / 100;
                let top = (vh - height) * y_pct / 100;
                let metrics = PageMetrics::unscrolled(
                    f64::from(scroll_x + vw + extra),
                    f64::from(scroll_y + vh + extra),
                )
                .scrolled(f64::from(scroll_x), f64::from(scroll_y))
                .viewport(f64::from(vw), f64::from(vh));
                let rect = AnchorRect::new(
                    f64::from(top),
                    f64::from(left),
                    f64::from(width),
                    f64::from(height),
                );
                let content = ContentMeasure::new(
                    f64::from(vw * cw_pct / 100),
                    f64::from(vh * ch_pct / 100),
                );
                (metrics, rect, content)
            },
        )
}

proptest! {
    #[test]
    fn fit_stays_preferred(
        target in target_strategy(),
        content in content_strategy(),
        position in position_strategy(),
    ) {
        let content_size = main_extent(&content, position);
        prop_assume!(content_size < space(&target, position));
        let placed = resolve_placement(content, &target, &PlacementOptions::default().position(position));
        prop_assert_eq!(placed.position, position);
    }

    #[test]
    fn overflow_flips_to_roomy_opposite(
        position in position_strategy(),
        preferred in px(0..=1000),
        excess in px(1..=500),
        slack in px(0..=500),
    ) {
        let size = preferred + excess;
        let target = target_with_spaces(position, preferred, size + slack);
        let content = content_along(position, size);
        let placed = resolve_placement(content, &target, &PlacementOptions::default().position(position));
        prop_assert_eq!(placed.position, position.opposite());
    }

    #[test]
    fn min_extent_keeps_preferred_and_clamps(
        position in position_strategy(),
        min in px(0..=500),
        above_min in px(1..=500),
        excess in px(1..=500),
        opposite in px(0..=1500),
    ) {
        let available = min + above_min;
        let target = target_with_spaces(position, available, opposite);
        let content = content_along(position, available + excess);
        let options = PlacementOptions::default()
            .position(position)
            .min_width(min)
            .min_height(min);
        let placed = resolve_placement(content, &target, &options);
        prop_assert_eq!(placed.position, position);
        prop_assert_eq!(placed_extent(&placed, position), available);
    }

    #[test]
    fn both_overflow_picks_larger_space(
        position in position_strategy(),
        preferred in px(0..=800),
        opposite in px(0..=800),
        excess in px(1..=500),
    ) {
        prop_assume!(preferred != opposite);
        let target = target_with_spaces(position, preferred, opposite);
        let content = content_along(position, preferred.max(opposite) + excess);
        let placed = resolve_placement(content, &target, &PlacementOptions::default().position(position));
        let (winner, room) = if preferred > opposite {
            (position, preferred)
        } else {
            (position.opposite(), opposite)
        };
        prop_assert_eq!(placed.position, winner);
        prop_assert_eq!(placed_extent(&placed, position), room);
    }

    #[test]
    fn cross_axis_stays_in_bounds(
        target in target_strategy(),
        content in content_strategy(),
        position in position_strategy(),
        alignment in alignment_strategy(),
    ) {
        let options = PlacementOptions::default().position(position).alignment(alignment);
        let placed = resolve_placement(content, &target, &options);
        let (coord, size, total) = match position.axis() {
            Axis::Vertical => (
                placed.left,
                content.width,
                target.left + target.width + target.space_right,
            ),
            Axis::Horizontal => (
                placed.top,
                content.height,
                target.top + target.height + target.space_bottom,
            ),
        };
        prop_assert!(coord >= 0.0);
        if size <= total {
            prop_assert!(coord + size <= total, "coord={} size={} total={}", coord, size, total);
        } else {
            prop_assert_eq!(coord, 0.0);
        }
    }

    #[test]
    fn offset_shifts_bottom_placement_down(
        height in px(0..=500),
        d in px(1..=40),
        slack in px(1..=500),
    ) {
        let target = target_with_spaces(Position::Bottom, height + d + slack, 0.0);
        let content = content_along(Position::Bottom, height);
        let base = resolve_placement(content, &target, &PlacementOptions::default());
        let nudged = resolve_placement(content, &target, &PlacementOptions::default().offset_y(d));
        prop_assert_eq!(base.position, Position::Bottom);
        prop_assert_eq!(nudged.position, Position::Bottom);
        prop_assert_eq!(nudged.top, base.top + d);
        prop_assert_eq!(nudged.height, base.height);
    }

    #[test]
    fn offset_shifts_flipped_placement_up(
        height in 1i32..=500,
        below_pct in 0i32..=100,
        d in px(1..=40),
        slack in px(1..=500),
    ) {
        let below = f64::from(height * below_pct / 100);
        let height = f64::from(height);
        let target = target_with_spaces(Position::Bottom, below, height + d + slack);
        let content = content_along(Position::Bottom, height);
        let base = resolve_placement(content, &target, &PlacementOptions::default());
        let nudged = resolve_placement(content, &target, &PlacementOptions::default().offset_y(d));
        prop_assert_eq!(base.position, Position::Top);
        prop_assert_eq!(nudged.position, Position::Top);
        prop_assert_eq!(nudged.top, base.top - d);
        prop_assert_eq!(nudged.height, base.height);
    }

    #[test]
    fn side_stays_on_requested_axis(
        target in target_strategy(),
        content in content_strategy(),
        position in position_strategy(),
    ) {
        let placed = resolve_placement(content, &target, &PlacementOptions::default().position(position));
        prop_assert_eq!(placed.position.axis(), position.axis());
    }

    #[test]
    fn extent_bounded_by_content_and_space(
        target in target_strategy(),
        content in content_strategy(),
        position in position_strategy(),
    ) {
        let placed = resolve_placement(content, &target, &PlacementOptions::default().position(position));
        prop_assert!(placed.width >= 0.0 && placed.height >= 0.0);
        prop_assert!(placed.width <= content.width);
        prop_assert!(placed.height <= content.height);
        prop_assert!(placed_extent(&placed, position) <= space(&target, placed.position).max(0.0));
    }

    #[test]
    fn cross_axis_stays_in_scrolled_viewport(
        (metrics, rect, content) in scrolled_case_strategy(),
        position in position_strategy(),
        alignment in alignment_strategy(),
    ) {
        let target = measure_anchor(rect, &metrics);
        let options = PlacementOptions::default().position(position).alignment(alignment);
        let placed = resolve_placement(content, &target, &options);

        let (coord, size, window, anchor_far_edge) = match position.axis() {
            Axis::Vertical => (
                placed.left - metrics.scroll_x,
                content.width,
                metrics.viewport_width,
                rect.left + rect.width,
            ),
            Axis::Horizontal => (
                placed.top - metrics.scroll_y,
                content.height,
                metrics.viewport_height,
                rect.top + rect.height,
            ),
        };
        prop_assert!(coord >= 0.0, "coord={} alignment={:?}", coord, alignment);
        prop_assert!(
            coord + size <= window,
            "coord={} size={} window={} alignment={:?}",
            coord,
            size,
            window,
            alignment
        );
        if alignment == Alignment::End && anchor_far_edge < size {
            prop_assert_eq!(coord, 0.0);
        }
    }
}
