//! Labelled planar point.

/// An immutable point in the plane with a display label.
///
/// Points are identified by their index in the owning list; the label
/// is only used for display and need not be unique.
///
/// # Examples
///
/// ```
/// use u_tsp_climb::distance::Point;
///
/// let a = Point::new(0.0, 0.0, "A");
/// let b = Point::new(3.0, 4.0, "B");
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// assert_eq!(b.label(), "B");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
    label: String,
}

impl Point {
    /// Creates a point at `(x, y)`.
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64, &str)> for Point {
    fn from((x, y, label): (f64, f64, &str)) -> Self {
        Point::new(x, y, label)
    }
}
