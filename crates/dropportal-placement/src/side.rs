#![forbid(unsafe_code)]

//! Main-axis side selection.
//!
//! One-shot decision per request: the overlay either stays on the preferred
//! side or flips to the opposite side of the same axis. There is no further
//! iteration.
//!
//! The preferred side is kept when, checked in order:
//!
//! 1. the content fits (`overflow < 0`),
//! 2. the space exceeds the minimum extent (`min - space < 0`),
//! 3. the preferred side overflows less than the opposite one.
//!
//! Only when all three fail does it flip. A tie in overflow therefore flips.

use std::fmt;

use dropportal_core::AxisSpan;

use crate::options::Position;

/// Why the side was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionReason {
    /// Content fits on the preferred side.
    Fits,
    /// Content overflows, but the space beats the minimum extent.
    MeetsMinimum,
    /// Both sides overflow; the preferred one overflows less.
    LessOverflow,
    /// The opposite side was taken.
    Flipped,
}

impl DecisionReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fits => "fits",
            Self::MeetsMinimum => "meets_minimum",
            Self::LessOverflow => "less_overflow",
            Self::Flipped => "flipped",
        }
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evidence for a main-axis decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideDecision {
    pub requested: Position,
    pub chosen: Position,
    pub reason: DecisionReason,
    /// Space on the requested side, net of the offset.
    pub space_preferred: f64,
    /// Space on the opposite side, net of the offset.
    pub space_opposite: f64,
    /// `content - space_preferred`.
    pub overflow_preferred: f64,
    /// `content - space_opposite`.
    pub overflow_opposite: f64,
    /// `min - space_preferred`, when a minimum is set.
    pub min_overflow_preferred: Option<f64>,
}

impl SideDecision {
    /// Whether the overlay left the requested side.
    #[must_use]
    pub fn flipped(&self) -> bool {
        self.chosen != self.requested
    }

    /// Serialize to a single JSON line (for diagnostics/evidence logs).
    ///
    /// Non-finite numbers are written as `null`.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        format!(
            r#"{{"event":"side_decision","requested":"{}","chosen":"{}","reason":"{}","space_preferred":{},"space_opposite":{},"overflow_preferred":{},"overflow_opposite":{},"min_overflow_preferred":{}}}"#,
            self.requested,
            self.chosen,
            self.reason,
            json_number(self.space_preferred),
            json_number(self.space_opposite),
            json_number(self.overflow_preferred),
            json_number(self.overflow_opposite),
            self.min_overflow_preferred
                .map_or_else(|| "null".to_string(), json_number),
        )
    }
}

fn json_number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "null".to_string()
    }
}

/// Space available on `side`, net of `offset`.
#[inline]
pub fn space_on(span: &AxisSpan, side: Position, offset: f64) -> f64 {
    if side.is_far() {
        span.far - offset
    } else {
        span.near - offset
    }
}

/// Decide between `preferred` and its opposite.
pub fn choose_side(
    content: f64,
    span: &AxisSpan,
    preferred: Position,
    offset: f64,
    min_extent: Option<f64>,
) -> SideDecision {
    let opposite = preferred.opposite();
    let space_preferred = space_on(span, preferred, offset);
    let space_opposite = space_on(span, opposite, offset);
    let overflow_preferred = content - space_preferred;
    let overflow_opposite = content - space_opposite;
    let min_overflow_preferred = min_extent.map(|min| min - space_preferred);

    let (chosen, reason) = if overflow_preferred < 0.0 {
        (preferred, DecisionReason::Fits)
    } else if min_overflow_preferred.is_some_and(|over| over < 0.0) {
        (preferred, DecisionReason::MeetsMinimum)
    } else if overflow_preferred < overflow_opposite {
        (preferred, DecisionReason::LessOverflow)
    } else {
        (opposite, DecisionReason::Flipped)
    };

    SideDecision {
        requested: preferred,
        chosen,
        reason,
        space_preferred,
        space_opposite,
        overflow_preferred,
        overflow_opposite,
        min_overflow_preferred,
    }
}

/// Page coordinate and extent of the overlay on `side`.
///
/// The extent never exceeds the content or the side's space and is never
/// negative. A near-side coordinate is clamped to the boundary start.
pub fn place_on_side(content: f64, span: &AxisSpan, side: Position, offset: f64) -> (f64, f64) {
    let coord = if side.is_far() {
        span.far_edge() + offset
    } else {
        (span.near - content - offset).max(0.0)
    };
    let extent = space_on(span, side, offset).min(content).max(0.0);
    (span.to_page(coord), extent)
}
