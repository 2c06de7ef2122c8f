//! Page size values and their display format

use std::fmt;

/// How many points there are in one inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert a length in points (1/72 inch) to inches
pub fn points_to_inches(points: f64) -> f64 {
    points / POINTS_PER_INCH
}

/// Dimensions and rotation of a single page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_points: f64,
    pub height_points: f64,
    /// One of 0, 90, 180, 270
    pub rotation_degrees: i64,
}

impl PageSize {
    pub fn new(width_points: f64, height_points: f64, rotation_degrees: i64) -> Self {
        Self {
            width_points,
            height_points,
            rotation_degrees,
        }
    }

    pub fn width_inches(&self) -> f64 {
        points_to_inches(self.width_points)
    }

    pub fn height_inches(&self) -> f64 {
        points_to_inches(self.height_points)
    }

    /// The tally key for this page, e.g. `8.5 x 11.0 in rot: 0`
    pub fn key(&self) -> String {
        format_size(self)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps full precision and always shows a fractional part,
        // so 792pt reads as `11.0` rather than `11`.
        write!(
            f,
            "{:?} x {:?} in rot: {}",
            self.width_inches(),
            self.height_inches(),
            self.rotation_degrees
        )
    }
}

/// Format a page size as its tally key
pub fn format_size(size: &PageSize) -> String {
    size.to_string()
}
