/// Describes on which side of a directed line a point lies.
///
/// "Left" refers to a counterclockwise turn in a Y-up system. With the Y-down screen
/// convention used for polygons, left and right swap visually but all orientation tests in
/// this crate stay consistent with each other.
#[derive(Debug, Clone, Copy)]
pub struct LineSideInfo {
    signed_side: f64,
}

impl PartialEq for LineSideInfo {
    fn eq(&self, other: &LineSideInfo) -> bool {
        if self.is_on_line() || other.is_on_line() {
            self.is_on_line() && other.is_on_line()
        } else {
            self.is_on_right_side() == other.is_on_right_side()
        }
    }
}

impl LineSideInfo {
    #[inline]
    pub(crate) fn from_determinant(s: f64) -> LineSideInfo {
        LineSideInfo { signed_side: s }
    }

    /// Snaps determinants with an absolute value below `tolerance` onto the line.
    #[inline]
    pub(crate) fn from_determinant_with_tolerance(s: f64, tolerance: f64) -> LineSideInfo {
        if s.abs() < tolerance {
            LineSideInfo { signed_side: 0.0 }
        } else {
            LineSideInfo { signed_side: s }
        }
    }

    /// Twice the signed area of the triangle formed by the line and the query point.
    pub fn signed_side(&self) -> f64 {
        self.signed_side
    }

    /// Returns `true` if the point lies strictly on the left side of the line.
    pub fn is_on_left_side(&self) -> bool {
        self.signed_side > 0.0
    }

    /// Returns `true` if the point lies strictly on the right side of the line.
    pub fn is_on_right_side(&self) -> bool {
        self.signed_side < 0.0
    }

    #[inline]
    pub fn is_on_line(self) -> bool {
        self.signed_side == 0.0
    }

    pub fn reversed(self) -> LineSideInfo {
        LineSideInfo {
            signed_side: -self.signed_side,
        }
    }
}

#[cfg(test)]
mod test {
    use super::LineSideInfo;

    #[test]
    fn test_tolerance_snaps_to_line() {
        assert!(LineSideInfo::from_determinant_with_tolerance(1.0e-9, 1.0e-6).is_on_line());
        assert!(LineSideInfo::from_determinant_with_tolerance(-0.5, 1.0e-6).is_on_right_side());
        assert_eq!(
            LineSideInfo::from_determinant(2.0),
            LineSideInfo::from_determinant(-2.0).reversed()
        );
    }
}
