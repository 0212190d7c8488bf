use crate::point::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis aligned rectangle.
///
/// Uses a Y-down convention: `top <= bottom` and `left <= right` hold for every rectangle
/// created through this API, except for [Rect::EMPTY], which contains nothing and acts as
/// the neutral element of [Rect::union].
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const EMPTY: Rect = Rect {
        left: f32::INFINITY,
        top: f32::INFINITY,
        right: f32::NEG_INFINITY,
        bottom: f32::NEG_INFINITY,
    };

    /// Creates a rectangle spanning two arbitrary corners.
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        Rect {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    /// Returns the smallest rectangle containing all given points.
    ///
    /// Returns [Rect::EMPTY] if the iterator is empty.
    pub fn from_points<I: IntoIterator<Item = Point2>>(points: I) -> Self {
        points
            .into_iter()
            .fold(Rect::EMPTY, |rect, point| rect.extended(point))
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Points on the border are contained.
    pub fn contains_point(&self, point: Point2) -> bool {
        self.left <= point.x && point.x <= self.right && self.top <= point.y && point.y <= self.bottom
    }

    /// Returns `true` if both rectangles share at least one point. Touching borders count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let result = Rect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        if result.is_empty() {
            None
        } else {
            Some(result)
        }
    }

    pub fn extended(&self, point: Point2) -> Rect {
        self.union(&Rect::from_corners(point, point))
    }

    /// Grows the rectangle by `amount` in every direction.
    pub fn inflate(&self, amount: f32) -> Rect {
        Rect {
            left: self.left - amount,
            top: self.top - amount,
            right: self.right + amount,
            bottom: self.bottom + amount,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Rect;
    use crate::Point2;

    #[test]
    fn test_from_points() {
        let rect = Rect::from_points([
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(0.0, 7.0),
        ]);
        assert_eq!(rect.left, -2.0);
        assert_eq!(rect.right, 1.0);
        assert_eq!(rect.top, 3.0);
        assert_eq!(rect.bottom, 7.0);
        assert!(Rect::from_points(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_intersection_and_union() {
        let a = Rect::from_corners(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let b = Rect::from_corners(Point2::new(1.0, 1.0), Point2::new(3.0, 3.0));
        let c = Rect::from_corners(Point2::new(5.0, 5.0), Point2::new(6.0, 6.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        let i = a.intersection(&b).unwrap();
        assert_eq!(i, Rect::from_corners(Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)));
        assert!(a.intersection(&c).is_none());
        assert_eq!(a.union(&c).width(), 6.0);
        assert_eq!(Rect::EMPTY.union(&a), a);
    }

    #[test]
    fn test_touching_rects_intersect() {
        let a = Rect::from_corners(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let b = Rect::from_corners(Point2::new(1.0, 0.0), Point2::new(2.0, 1.0));
        assert!(a.intersects(&b));
        assert!(a.contains_point(Point2::new(1.0, 0.5)));
    }
}
