#![forbid(unsafe_code)]

//! Placement options.
//!
//! [`PlacementOptions`] is built in code through its builder methods or read
//! from string key/value sources (host attributes, component props, the
//! process environment) through [`PlacementOptions::from_lookup`]. Values
//! that do not parse or fail [`PlacementOptions::validate`] fall back to the
//! default and are reported alongside the options instead of aborting.

use std::fmt;
use std::str::FromStr;

use dropportal_core::Axis;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lookup key for the preferred side.
pub const KEY_POSITION: &str = "position";
/// Lookup key for the cross-axis alignment.
pub const KEY_ALIGNMENT: &str = "alignment";
/// Lookup key for the horizontal offset.
pub const KEY_OFFSET_X: &str = "offsetX";
/// Lookup key for the vertical offset.
pub const KEY_OFFSET_Y: &str = "offsetY";
/// Lookup key for the minimum acceptable width.
pub const KEY_MIN_WIDTH: &str = "minWidth";
/// Lookup key for the minimum acceptable height.
pub const KEY_MIN_HEIGHT: &str = "minHeight";
/// Lookup key for the overflow policy.
pub const KEY_CAN_OVERFLOW_SCREEN: &str = "canOverflowScreen";

/// Prefix applied to lookup keys by [`PlacementOptions::from_env`].
const ENV_PREFIX: &str = "DROPPORTAL_";

/// Side of the anchor the overlay is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl Position {
    /// The side across the anchor on the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Main axis of this side.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Whether the side lies past the anchor's far edge (bottom or right).
    #[must_use]
    pub const fn is_far(self) -> bool {
        matches!(self, Self::Bottom | Self::Right)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown position {:?} (expected top, right, bottom or left)",
            self.0
        )
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "above" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" | "below" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            _ => Err(ParsePositionError(s.to_string())),
        }
    }
}

/// Cross-axis alignment against the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    /// Near edges line up; slides back if the far edge would escape.
    #[default]
    Start,
    /// Centered on the anchor; slides in whichever direction overflows.
    Middle,
    /// Far edges line up; only clamped at the boundary start.
    End,
}

impl Alignment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`Alignment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlignmentError(String);

impl fmt::Display for ParseAlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown alignment {:?} (expected start, middle or end)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlignmentError {}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "left" | "top" => Ok(Self::Start),
            "middle" | "center" | "centre" => Ok(Self::Middle),
            "end" | "right" | "bottom" => Ok(Self::End),
            _ => Err(ParseAlignmentError(s.to_string())),
        }
    }
}

/// Layout preferences for a single placement request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementOptions {
    /// Preferred side (default: bottom).
    pub position: Position,
    /// Cross-axis alignment (default: start).
    pub alignment: Alignment,
    /// Horizontal nudge in pixels (default: 0).
    pub offset_x: f64,
    /// Vertical nudge in pixels (default: 0).
    pub offset_y: f64,
    /// Width below which a horizontal placement flips (default: unbounded).
    pub min_width: Option<f64>,
    /// Height below which a vertical placement flips (default: unbounded).
    pub min_height: Option<f64>,
    /// Fit against the whole page instead of the viewport (default: false).
    pub can_overflow_screen: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            position: Position::Bottom,
            alignment: Alignment::Start,
            offset_x: 0.0,
            offset_y: 0.0,
            min_width: None,
            min_height: None,
            can_overflow_screen: false,
        }
    }
}

impl PlacementOptions {
    /// Set the preferred side.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the cross-axis alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the horizontal offset.
    #[must_use]
    pub fn offset_x(mut self, offset: f64) -> Self {
        self.offset_x = offset;
        self
    }

    /// Set the vertical offset.
    #[must_use]
    pub fn offset_y(mut self, offset: f64) -> Self {
        self.offset_y = offset;
        self
    }

    /// Set the minimum acceptable width.
    #[must_use]
    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set the minimum acceptable height.
    #[must_use]
    pub fn min_height(mut self, height: f64) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Set the overflow policy.
    #[must_use]
    pub fn can_overflow_screen(mut self, allow: bool) -> Self {
        self.can_overflow_screen = allow;
        self
    }

    /// Offset along `axis`.
    #[must_use]
    pub const fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.offset_x,
            Axis::Vertical => self.offset_y,
        }
    }

    /// Minimum acceptable extent along `axis`.
    #[must_use]
    pub const fn min_extent(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.min_width,
            Axis::Vertical => self.min_height,
        }
    }

    /// Read options from the process environment (`DROPPORTAL_POSITION`, ...).
    #[must_use]
    pub fn from_env() -> OptionsParse {
        Self::from_lookup(|key| std::env::var(env_key(key)).ok())
    }

    /// Read options through a key lookup.
    ///
    /// Keys are the `KEY_*` constants. Missing keys keep their default;
    /// malformed or out-of-range values keep their default and are reported in
    /// [`OptionsParse::errors`].
    #[must_use]
    pub fn from_lookup<F>(get: F) -> OptionsParse
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(KEY_POSITION) {
            match value.parse::<Position>() {
                Ok(position) => options.position = position,
                Err(err) => errors.push(OptionError::from_parse(KEY_POSITION, &value, &err)),
            }
        }
        if let Some(value) = get(KEY_ALIGNMENT) {
            match value.parse::<Alignment>() {
                Ok(alignment) => options.alignment = alignment,
                Err(err) => errors.push(OptionError::from_parse(KEY_ALIGNMENT, &value, &err)),
            }
        }
        if let Some(offset) = parse_number(&get, KEY_OFFSET_X, &mut errors) {
            options.offset_x = offset;
        }
        if let Some(offset) = parse_number(&get, KEY_OFFSET_Y, &mut errors) {
            options.offset_y = offset;
        }
        if let Some(min) = parse_number(&get, KEY_MIN_WIDTH, &mut errors) {
            options.min_width = Some(min);
        }
        if let Some(min) = parse_number(&get, KEY_MIN_HEIGHT, &mut errors) {
            options.min_height = Some(min);
        }
        if let Some(value) = get(KEY_CAN_OVERFLOW_SCREEN) {
            match parse_bool(&value) {
                Some(allow) => options.can_overflow_screen = allow,
                None => errors.push(OptionError::new(
                    KEY_CAN_OVERFLOW_SCREEN,
                    value,
                    "expected a boolean",
                )),
            }
        }

        if let Err(violations) = options.validate() {
            options.reset_fields(violations.iter().map(|violation| violation.field));
            errors.extend(violations);
        }
        if !errors.is_empty() {
            dropportal_core::debug!(
                count = errors.len(),
                fields = ?errors.iter().map(|err| err.field).collect::<Vec<_>>(),
                "option rejected"
            );
        }

        OptionsParse { options, errors }
    }

    /// Restore the default for each numeric field named.
    fn reset_fields<'a>(&mut self, fields: impl IntoIterator<Item = &'a str>) {
        let defaults = Self::default();
        for field in fields {
            match field {
                KEY_OFFSET_X => self.offset_x = defaults.offset_x,
                KEY_OFFSET_Y => self.offset_y = defaults.offset_y,
                KEY_MIN_WIDTH => self.min_width = defaults.min_width,
                KEY_MIN_HEIGHT => self.min_height = defaults.min_height,
                _ => {}
            }
        }
    }

    /// Check value constraints and return every violation.
    ///
    /// Resolution never fails on invalid options; this is for hosts that want
    /// to surface configuration mistakes.
    pub fn validate(&self) -> Result<(), Vec<OptionError>> {
        let mut errors = Vec::new();
        for (field, value) in [(KEY_OFFSET_X, self.offset_x), (KEY_OFFSET_Y, self.offset_y)] {
            if !value.is_finite() {
                errors.push(OptionError::new(field, value.to_string(), "must be finite"));
            }
        }
        for (field, value) in [(KEY_MIN_WIDTH, self.min_width), (KEY_MIN_HEIGHT, self.min_height)] {
            if let Some(min) = value
                && (min.is_nan() || min < 0.0)
            {
                errors.push(OptionError::new(
                    field,
                    min.to_string(),
                    "must be a non-negative number",
                ));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Options read from a string source, with whatever failed to parse.
#[derive(Debug, Clone)]
pub struct OptionsParse {
    pub options: PlacementOptions,
    pub errors: Vec<OptionError>,
}

impl OptionsParse {
    /// Options when nothing was rejected, otherwise every error.
    pub fn into_result(self) -> Result<PlacementOptions, Vec<OptionError>> {
        if self.errors.is_empty() {
            Ok(self.options)
        } else {
            Err(self.errors)
        }
    }
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl OptionError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }

    fn from_parse(field: &'static str, value: &str, err: &dyn std::error::Error) -> Self {
        Self::new(field, value, err.to_string())
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for OptionError {}

fn env_key(key: &str) -> String {
    let mut name = String::with_capacity(ENV_PREFIX.len() + key.len() + 4);
    name.push_str(ENV_PREFIX);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('_');
        }
        name.push(c.to_ascii_uppercase());
    }
    name
}

fn parse_number<F>(get: &F, field: &'static str, errors: &mut Vec<OptionError>) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let value = get(field)?;
    match value.trim().trim_end_matches("px").trim_end().parse::<f64>() {
        Ok(number) => Some(number),
        Err(err) => {
            errors.push(OptionError::new(field, value, err.to_string()));
            None
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
