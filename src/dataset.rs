//! Built-in problem instances.

use crate::distance::Point;

/// Ten labelled campus locations on a 10×10 grid.
pub fn campuses() -> Vec<Point> {
    [
        (5.0, 5.0, "A"),
        (4.0, 7.0, "B"),
        (6.0, 4.0, "C"),
        (3.0, 8.0, "D"),
        (8.0, 2.0, "E"),
        (10.0, 1.0, "F"),
        (9.0, 3.0, "G"),
        (2.0, 6.0, "H"),
        (7.0, 6.0, "I"),
        (6.0, 8.0, "J"),
    ]
    .into_iter()
    .map(Point::from)
    .collect()
}

/// Corners of the unit square, in perimeter order.
pub fn unit_square() -> Vec<Point> {
    [
        (0.0, 0.0, "A"),
        (0.0, 1.0, "B"),
        (1.0, 1.0, "C"),
        (1.0, 0.0, "D"),
    ]
    .into_iter()
    .map(Point::from)
    .collect()
}
