#![forbid(unsafe_code)]

//! Geometric data model shared by the anchor measurer and the resolver.
//!
//! Every quantity is in CSS pixels as an `f64`. Page coordinates have their
//! origin at the top-left of the scrollable document; viewport coordinates at
//! the top-left of the visible window.
//!
//! `right`/`bottom` never mean a raw edge coordinate in this crate. They are
//! always the *remaining space* between the anchor's far edge and the far edge
//! of the page (or viewport), which is why the fields are named
//! `space_right`/`space_bottom`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compare two pixel values, treating `NaN` as equal to `NaN`.
#[inline]
pub fn same_px(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Measured size of the overlay content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContentMeasure {
    pub width: f64,
    pub height: f64,
}

impl ContentMeasure {
    /// Create a new content measure.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    #[inline]
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Anchor rectangle as reported by the host, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl AnchorRect {
    /// Create a new anchor rectangle.
    #[inline]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// Document and viewport metrics needed to normalize an [`AnchorRect`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageMetrics {
    /// Total scrollable width of the document.
    pub page_width: f64,
    /// Total scrollable height of the document.
    pub page_height: f64,
    /// Horizontal scroll offset.
    pub scroll_x: f64,
    /// Vertical scroll offset.
    pub scroll_y: f64,
    /// Visible window width.
    pub viewport_width: f64,
    /// Visible window height.
    pub viewport_height: f64,
}

impl PageMetrics {
    /// Metrics for an unscrolled page that exactly fills the viewport.
    pub const fn unscrolled(width: f64, height: f64) -> Self {
        Self {
            page_width: width,
            page_height: height,
            scroll_x: 0.0,
            scroll_y: 0.0,
            viewport_width: width,
            viewport_height: height,
        }
    }

    /// Set the scroll offsets.
    #[must_use]
    pub const fn scrolled(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    /// Set the viewport size.
    #[must_use]
    pub const fn viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }
}

/// Free space around the anchor measured against the viewport edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewportSpace {
    /// Distance from the viewport top to the anchor top.
    pub top: f64,
    /// Distance from the viewport left to the anchor left.
    pub left: f64,
    /// Distance from the anchor right edge to the viewport right.
    pub right: f64,
    /// Distance from the anchor bottom edge to the viewport bottom.
    pub bottom: f64,
}

impl ViewportSpace {
    /// Field-by-field equality where `NaN` matches `NaN`.
    pub fn same_as(&self, other: &Self) -> bool {
        same_px(self.top, other.top)
            && same_px(self.left, other.left)
            && same_px(self.right, other.right)
            && same_px(self.bottom, other.bottom)
    }
}

/// Normalized anchor measurement.
///
/// `top`/`left` are the anchor's page coordinates, which double as the space
/// between the page origin and the anchor's near edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetMeasure {
    pub top: f64,
    pub left: f64,
    /// Page width minus the anchor's right edge.
    pub space_right: f64,
    /// Page height minus the anchor's bottom edge.
    pub space_bottom: f64,
    pub width: f64,
    pub height: f64,
    /// Viewport-relative space, present when the measurer knew the viewport.
    pub window: Option<ViewportSpace>,
}

impl TargetMeasure {
    /// Create a page-only target measure (no viewport information).
    pub const fn new(
        top: f64,
        left: f64,
        space_right: f64,
        space_bottom: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            top,
            left,
            space_right,
            space_bottom,
            width,
            height,
            window: None,
        }
    }

    /// Attach viewport-relative space.
    #[must_use]
    pub const fn with_window(mut self, window: ViewportSpace) -> Self {
        self.window = Some(window);
        self
    }

    /// Drop the viewport-relative space.
    #[must_use]
    pub const fn page_only(mut self) -> Self {
        self.window = None;
        self
    }

    /// Field-by-field equality where `NaN` matches `NaN`.
    pub fn same_as(&self, other: &Self) -> bool {
        same_px(self.top, other.top)
            && same_px(self.left, other.left)
            && same_px(self.space_right, other.space_right)
            && same_px(self.space_bottom, other.space_bottom)
            && same_px(self.width, other.width)
            && same_px(self.height, other.height)
            && match (&self.window, &other.window) {
                (Some(a), Some(b)) => a.same_as(b),
                (None, None) => true,
                _ => false,
            }
    }

    /// Project the target onto one axis against the requested boundary.
    ///
    /// Falls back to the page boundary when `Viewport` is requested but no
    /// viewport space was measured.
    pub fn span(&self, axis: Axis, boundary: Boundary) -> AxisSpan {
        let (page_near, far, size) = match axis {
            Axis::Horizontal => (self.left, self.space_right, self.width),
            Axis::Vertical => (self.top, self.space_bottom, self.height),
        };
        match (boundary, self.window) {
            (Boundary::Viewport, Some(window)) => {
                let (near, far) = match axis {
                    Axis::Horizontal => (window.left, window.right),
                    Axis::Vertical => (window.top, window.bottom),
                };
                AxisSpan {
                    origin: page_near - near,
                    near,
                    size,
                    far,
                }
            }
            _ => AxisSpan {
                origin: 0.0,
                near: page_near,
                size,
                far,
            },
        }
    }
}

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Which edges bound the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Boundary {
    /// The whole scrollable document.
    Page,
    /// The visible window.
    #[default]
    Viewport,
}

/// One-dimensional view of a target: `near | size | far`.
///
/// `near + size + far` is the length of the boundary along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisSpan {
    /// Page coordinate of the boundary start.
    pub origin: f64,
    /// Space between the boundary start and the anchor.
    pub near: f64,
    /// Anchor extent.
    pub size: f64,
    /// Space between the anchor and the boundary end.
    pub far: f64,
}

impl AxisSpan {
    /// Total length of the boundary along the axis.
    #[inline]
    pub fn total(&self) -> f64 {
        self.near + self.size + self.far
    }

    /// Boundary-relative coordinate of the anchor's far edge.
    #[inline]
    pub fn far_edge(&self) -> f64 {
        self.near + self.size
    }

    /// Translate a boundary-relative coordinate back to page coordinates.
    #[inline]
    pub fn to_page(&self, coord: f64) -> f64 {
        self.origin + coord
    }
}
