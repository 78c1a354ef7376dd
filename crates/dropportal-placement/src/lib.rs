#![forbid(unsafe_code)]

//! Overlay placement resolver.
//!
//! Given the measured content size, a [`TargetMeasure`] and
//! [`PlacementOptions`], decides which side of the anchor the overlay goes on
//! and where it starts along the other axis.
//!
//! - [`side`] - preferred-vs-flipped side on the main axis
//! - [`align`] - start/middle/end alignment on the cross axis
//! - [`resolve`] - the combined [`resolve_placement`] entry point
//! - [`options`] - options, defaults and string parsing
//!
//! Everything here is a pure function of its inputs. Deciding *when* to
//! re-resolve (resize, scroll) is up to the host.
//!
//! ```
//! use dropportal_core::{ContentMeasure, TargetMeasure};
//! use dropportal_placement::{Alignment, PlacementOptions, Position, resolve_placement};
//!
//! let content = ContentMeasure::new(800.0, 200.0);
//! let target = TargetMeasure::new(100.0, 400.0, 100.0, 400.0, 400.0, 50.0);
//! let options = PlacementOptions::default().alignment(Alignment::Middle);
//!
//! let placed = resolve_placement(content, &target, &options);
//! assert_eq!(placed.position, Position::Bottom);
//! assert_eq!(placed.left, 100.0);
//! ```

pub mod align;
pub mod options;
pub mod resolve;
pub mod side;

pub use dropportal_core::{ContentMeasure, TargetMeasure};
pub use options::{
    Alignment, OptionError, OptionsParse, ParseAlignmentError, ParsePositionError,
    PlacementOptions, Position,
};
pub use resolve::{PortalMeasure, resolve_placement, resolve_with_evidence};
pub use side::{DecisionReason, SideDecision};
