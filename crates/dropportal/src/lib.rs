#![forbid(unsafe_code)]

//! DropPortal public facade crate.
//!
//! Re-exports the geometry model and the resolver, and offers [`place`] for
//! the common measure-then-resolve pipeline.
//!
//! ```
//! use dropportal::prelude::*;
//!
//! let metrics = PageMetrics::unscrolled(1000.0, 800.0);
//! let anchor = AnchorRect::new(700.0, 100.0, 120.0, 30.0);
//! let placed = place(anchor, &metrics, ContentMeasure::new(200.0, 240.0), &PlacementOptions::default());
//!
//! assert_eq!(placed.position, Position::Top);
//! assert_eq!(placed.top, 460.0);
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use dropportal_core::scroll::{ScrollContainer, scrollable_ancestors};
pub use dropportal_core::{
    AnchorRect, Axis, AxisSpan, Boundary, ContentMeasure, PageMetrics, TargetMeasure,
    ViewportSpace, measure_anchor, same_px,
};

// --- Placement re-exports --------------------------------------------------

pub use dropportal_placement::{
    Alignment, DecisionReason, OptionError, OptionsParse, ParseAlignmentError,
    ParsePositionError, PlacementOptions, PortalMeasure, Position, SideDecision,
    resolve_placement, resolve_with_evidence,
};

/// Measure the anchor and resolve the overlay placement in one call.
pub fn place(
    anchor: AnchorRect,
    metrics: &PageMetrics,
    content: ContentMeasure,
    options: &PlacementOptions,
) -> PortalMeasure {
    let target = measure_anchor(anchor, metrics);
    resolve_placement(content, &target, options)
}

/// Read options through a key lookup, failing on any rejected value.
pub fn options_from_lookup<F>(get: F) -> Result<PlacementOptions>
where
    F: Fn(&str) -> Option<String>,
{
    PlacementOptions::from_lookup(get)
        .into_result()
        .map_err(Error::Options)
}

// --- Errors ---------------------------------------------------------------

/// Top-level error type for DropPortal configuration.
///
/// Placement itself is total; only option parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A position string named no side.
    Position(ParsePositionError),
    /// An alignment string named no alignment.
    Alignment(ParseAlignmentError),
    /// One or more option values were rejected.
    Options(Vec<OptionError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(err) => write!(f, "{err}"),
            Self::Alignment(err) => write!(f, "{err}"),
            Self::Options(errors) => {
                f.write_str("invalid placement options: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Position(err) => Some(err),
            Self::Alignment(err) => Some(err),
            Self::Options(errors) => errors
                .first()
                .map(|err| err as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<ParsePositionError> for Error {
    fn from(err: ParsePositionError) -> Self {
        Self::Position(err)
    }
}

impl From<ParseAlignmentError> for Error {
    fn from(err: ParseAlignmentError) -> Self {
        Self::Alignment(err)
    }
}

impl From<Vec<OptionError>> for Error {
    fn from(errors: Vec<OptionError>) -> Self {
        Self::Options(errors)
    }
}

/// Standard result type for DropPortal APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, AnchorRect, ContentMeasure, Error, PageMetrics, PlacementOptions,
        PortalMeasure, Position, Result, TargetMeasure, measure_anchor, place,
        resolve_placement,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn place_matches_manual_pipeline() {
        let metrics = PageMetrics::unscrolled(1200.0, 3000.0)
            .scrolled(0.0, 500.0)
            .viewport(1200.0, 700.0);
        let anchor = AnchorRect::new(600.0, 80.0, 200.0, 40.0);
        let content = ContentMeasure::new(300.0, 250.0);
        let options = PlacementOptions::default().alignment(Alignment::Middle);

        let target = measure_anchor(anchor, &metrics);
        assert_eq!(
            place(anchor, &metrics, content, &options),
            resolve_placement(content, &target, &options)
        );
    }

    #[test]
    fn place_respects_viewport_when_scrolled() {
        // Page has 1860px below the anchor; the viewport only 60px.
        let metrics = PageMetrics::unscrolled(1200.0, 3000.0)
            .scrolled(0.0, 500.0)
            .viewport(1200.0, 700.0);
        let anchor = AnchorRect::new(600.0, 80.0, 200.0, 40.0);
        let content = ContentMeasure::new(300.0, 250.0);

        let placed = place(anchor, &metrics, content, &PlacementOptions::default());
        assert_eq!(placed.position, Position::Top);
        assert_eq!(placed.top, 500.0 + 600.0 - 250.0);

        let page = PlacementOptions::default().can_overflow_screen(true);
        let placed = place(anchor, &metrics, content, &page);
        assert_eq!(placed.position, Position::Bottom);
        assert_eq!(placed.top, 500.0 + 640.0);
    }

    #[test]
    fn options_from_lookup_collects_errors() {
        let map: HashMap<&str, &str> = [("position", "nowhere"), ("offsetY", "x")].into();
        let err = options_from_lookup(|key| map.get(key).map(|v| v.to_string())).unwrap_err();
        match &err {
            Error::Options(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
        let text = err.to_string();
        assert!(text.starts_with("invalid placement options: position=nowhere"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn options_from_lookup_accepts_valid_values() {
        let options = options_from_lookup(|key| match key {
            "position" => Some("right".to_string()),
            "minWidth" => Some("120".to_string()),
            _ => None,
        })
        .expect("valid options");
        assert_eq!(options.position, Position::Right);
        assert_eq!(options.min_width, Some(120.0));
    }

    #[test]
    fn parse_errors_convert_with_question_mark() {
        fn parse(position: &str, alignment: &str) -> Result<(Position, Alignment)> {
            Ok((position.parse::<Position>()?, alignment.parse::<Alignment>()?))
        }
        assert_eq!(parse("top", "end"), Ok((Position::Top, Alignment::End)));
        assert!(matches!(parse("up", "end"), Err(Error::Position(_))));
        assert!(matches!(parse("top", "up"), Err(Error::Alignment(_))));
    }
}
