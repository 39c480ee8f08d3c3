/// Widget rectangle in PDF user-space coordinates, as stored in a
/// widget annotation's `/Rect` entry: `[x0, y0, x1, y1]`.
///
/// Const-constructible so the static mapping table can carry literal
/// coordinates for rect-disambiguated fields and synthetic overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    /// Tolerance used when matching a table rect against a template
    /// widget's `/Rect`. Template reals survive round-trips through
    /// authoring tools with sub-point jitter; exact equality does not.
    pub const MATCH_TOLERANCE: f64 = 0.5;

    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// True if every coordinate of `other` is within `tolerance`.
    pub fn approx_eq(&self, other: &Rect, tolerance: f64) -> bool {
        (self.x0 - other.x0).abs() <= tolerance
            && (self.y0 - other.y0).abs() <= tolerance
            && (self.x1 - other.x1).abs() <= tolerance
            && (self.y1 - other.y1).abs() <= tolerance
    }

    /// Approximate equality at [`Rect::MATCH_TOLERANCE`].
    pub fn matches(&self, other: &Rect) -> bool {
        self.approx_eq(other, Self::MATCH_TOLERANCE)
    }
}
