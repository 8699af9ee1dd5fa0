// Copyright 2025 Lars Brubaker
// License: MIT
//
// Points and the geometric predicates driving the divide-and-conquer merge.
//
// Every predicate compares an f64 determinant against zero with strict
// inequality. There is no epsilon: exact ties (collinear, cocircular) always
// take the `false` branch, and callers branch on that explicitly.

pub type Real = f64;

/// A point in the plane.
///
/// Equality is exact coordinate equality. `-0.0 == 0.0`, so the two signed
/// zeros are treated as the same vertex.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    /// Placeholder origin for a dual record whose face has no circumcenter
    /// (the unbounded face, or a face not yet visited by the Voronoi pass).
    pub const INFINITE: Point = Point {
        x: Real::INFINITY,
        y: Real::INFINITY,
    };

    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// True if both coordinates are finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn distance_squared(&self, other: Point) -> Real {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Returns true if (a, b, c) turn counter-clockwise.
    /// Collinear triples return false.
    #[inline]
    pub fn counter_clock_wise(a: Point, b: Point, c: Point) -> bool {
        orient2d_det(a, b, c) > 0.0
    }

    /// Returns true if `d` lies strictly inside the circle through `a`, `b`, `c`.
    /// The triple must be in counter-clockwise order; for a clockwise triple the
    /// answer is inverted.
    #[inline]
    pub fn in_circle(a: Point, b: Point, c: Point, d: Point) -> bool {
        in_circle_det(a, b, c, d) > 0.0
    }

    /// Center of the circle through `a`, `b` and `c`.
    ///
    /// Returns [`Point::INFINITE`] when the three points are collinear.
    pub fn circumcenter(a: Point, b: Point, c: Point) -> Point {
        let len_a = a.x * a.x + a.y * a.y;
        let len_b = b.x * b.x + b.y * b.y;
        let len_c = c.x * c.x + c.y * c.y;

        let denom = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if denom == 0.0 {
            return Point::INFINITE;
        }

        let x = (len_a * (b.y - c.y) + len_b * (c.y - a.y) + len_c * (a.y - b.y)) / denom;
        let y = (len_a * (c.x - b.x) + len_b * (a.x - c.x) + len_c * (b.x - a.x)) / denom;
        Point::new(x, y)
    }
}

impl From<(Real, Real)> for Point {
    #[inline]
    fn from((x, y): (Real, Real)) -> Self {
        Point::new(x, y)
    }
}

impl From<[Real; 2]> for Point {
    #[inline]
    fn from([x, y]: [Real; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (Real, Real) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Twice the signed area of triangle (a, b, c), reduced to a 2x2 determinant
/// by translating c to the origin:
///
/// ```text
/// | a.x a.y 1 |   | a.x - c.x  a.y - c.y |
/// | b.x b.y 1 | = | b.x - c.x  b.y - c.y |
/// | c.x c.y 1 |
/// ```
///
/// Positive for a counter-clockwise turn, zero for collinear points.
#[inline]
pub fn orient2d_det(a: Point, b: Point, c: Point) -> Real {
    (a.x - c.x) * (b.y - c.y) - (a.y - c.y) * (b.x - c.x)
}

/// The in-circle determinant, reduced from 4x4 to 3x3 by translating d to the
/// origin:
///
/// ```text
/// | a1 a2 a3 |   with  *1 = *.x - d.x
/// | b1 b2 b3 |         *2 = *.y - d.y
/// | c1 c2 c3 |         *3 = *1² + *2²
/// ```
///
/// Positive if d is inside the circle through the counter-clockwise triple
/// (a, b, c), zero if the four points are cocircular.
pub fn in_circle_det(a: Point, b: Point, c: Point, d: Point) -> Real {
    let a1 = a.x - d.x;
    let a2 = a.y - d.y;
    let b1 = b.x - d.x;
    let b2 = b.y - d.y;
    let c1 = c.x - d.x;
    let c2 = c.y - d.y;

    let a3 = a1 * a1 + a2 * a2;
    let b3 = b1 * b1 + b2 * b2;
    let c3 = c1 * c1 + c2 * c2;

    a1 * b2 * c3 + a2 * b3 * c1 + a3 * b1 * c2 - (a3 * b2 * c1 + a1 * b3 * c2 + a2 * b1 * c3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn counter_clockwise() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 1.0);
        let c = Point::new(-1.0, 0.0);
        assert!(Point::counter_clock_wise(a, b, c));
    }

    #[test]
    fn not_counter_clockwise() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 1.0);
        let c = Point::new(1.0, 0.0);
        assert!(!Point::counter_clock_wise(a, b, c));
    }

    #[test]
    fn counter_clockwise_big_numbers() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, f32::MAX as Real);
        let c = Point::new(f32::MIN as Real, 0.0);
        assert!(Point::counter_clock_wise(a, b, c));
    }

    #[test]
    fn counter_clockwise_small_numbers() {
        let a = Point::new(0.0, -0.000001);
        let b = Point::new(0.0, 0.000001);
        let c = Point::new(-0.00001, 0.0);
        assert!(Point::counter_clock_wise(a, b, c));

        let c = Point::new(0.00001, 0.0);
        assert!(!Point::counter_clock_wise(a, b, c));
    }

    #[test]
    fn collinear_is_not_counter_clockwise() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 1.0);
        let c = Point::new(2.0, 2.0);
        assert_eq!(orient2d_det(a, b, c), 0.0);
        assert!(!Point::counter_clock_wise(a, b, c));
        assert!(!Point::counter_clock_wise(c, b, a));
    }

    #[test]
    fn in_circle_inside_and_outside() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        assert!(Point::in_circle(a, b, c, Point::new(0.4, 0.4)));
        assert!(!Point::in_circle(a, b, c, Point::new(2.0, 2.0)));
    }

    #[test]
    fn in_circle_cocircular_is_false() {
        // Unit square corners are cocircular.
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(1.0, 1.0);
        let d = Point::new(0.0, 1.0);
        assert_eq!(in_circle_det(a, b, c, d), 0.0);
        assert!(!Point::in_circle(a, b, c, d));
    }

    #[test]
    fn in_circle_cyclic_permutation_invariant() {
        let a = Point::new(-2.0, 0.5);
        let b = Point::new(3.0, -1.0);
        let c = Point::new(1.0, 4.0);
        let d = Point::new(0.5, 1.0);
        let expected = Point::in_circle(a, b, c, d);
        assert!(expected);
        assert_eq!(Point::in_circle(b, c, a, d), expected);
        assert_eq!(Point::in_circle(c, a, b, d), expected);
    }

    #[test]
    fn in_circle_flips_under_swap() {
        let a = Point::new(-2.0, 0.5);
        let b = Point::new(3.0, -1.0);
        let c = Point::new(1.0, 4.0);
        let d = Point::new(0.5, 1.0);
        assert!(Point::in_circle(a, b, c, d));
        assert!(!Point::in_circle(b, a, c, d));
        assert!(!Point::in_circle(a, c, b, d));
        assert_relative_eq!(in_circle_det(a, b, c, d), -in_circle_det(b, a, c, d));
    }

    #[test]
    fn circumcenter_right_triangle() {
        // Hypotenuse midpoint.
        let center = Point::circumcenter(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 2.0),
        );
        assert_relative_eq!(center.x, 2.0);
        assert_relative_eq!(center.y, 1.0);
    }

    #[test]
    fn circumcenter_is_equidistant() {
        let a = Point::new(-3.5, 1.25);
        let b = Point::new(2.0, -0.75);
        let c = Point::new(0.5, 6.0);
        let center = Point::circumcenter(a, b, c);
        let ra = center.distance_squared(a);
        assert_relative_eq!(center.distance_squared(b), ra, max_relative = 1e-12);
        assert_relative_eq!(center.distance_squared(c), ra, max_relative = 1e-12);
    }

    #[test]
    fn circumcenter_of_collinear_is_infinite() {
        let center = Point::circumcenter(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        );
        assert_eq!(center, Point::INFINITE);
        assert!(!center.is_finite());
    }

    #[test]
    fn signed_zero_points_are_equal() {
        assert_eq!(Point::new(-0.0, 1.0), Point::new(0.0, 1.0));
    }

    #[test]
    fn conversions() {
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
        assert_eq!(Point::from([3.0, 4.0]), Point::new(3.0, 4.0));
        let (x, y): (Real, Real) = Point::new(5.0, 6.0).into();
        assert_eq!((x, y), (5.0, 6.0));
    }
}
