use crate::point::{Point2, EPSILON};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An angle stored as its cosine and sine.
///
/// Composing angles multiplies the unit pairs instead of adding radians, so repeated
/// rotations do not accumulate `atan2`/`sin_cos` round trip errors. The radian value is
/// derived on demand.
///
/// [Angle::NULL] has both components set to zero. It marks an absent angle and is *not*
/// a unit vector; do not rotate by it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Angle {
    cos: f32,
    sin: f32,
}

impl Default for Angle {
    fn default() -> Self {
        Angle::ZERO
    }
}

impl Angle {
    /// The zero component angle. Violates the unit invariant on purpose.
    pub const NULL: Angle = Angle { cos: 0.0, sin: 0.0 };
    pub const ZERO: Angle = Angle { cos: 1.0, sin: 0.0 };
    pub const RIGHT: Angle = Angle { cos: 0.0, sin: 1.0 };
    pub const STRAIGHT: Angle = Angle { cos: -1.0, sin: 0.0 };

    pub fn from_radians(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Angle { cos, sin }
    }

    /// Returns the direction of a vector, or [Angle::NULL] for the zero vector.
    pub fn from_vector(vector: Point2) -> Self {
        match vector.normalize() {
            Some(unit) => Angle {
                cos: unit.x,
                sin: unit.y,
            },
            None => Angle::NULL,
        }
    }

    pub fn is_null(&self) -> bool {
        self.cos == 0.0 && self.sin == 0.0
    }

    #[inline]
    pub fn cos(&self) -> f32 {
        self.debug_check_unit();
        self.cos
    }

    #[inline]
    pub fn sin(&self) -> f32 {
        self.debug_check_unit();
        self.sin
    }

    /// The angle in radians, within `(-PI, PI]`.
    pub fn to_radians(&self) -> f32 {
        self.sin.atan2(self.cos)
    }

    /// The angle in radians, normalized to `[0, 2 * PI)`.
    pub fn to_positive_radians(&self) -> f32 {
        let radians = self.to_radians();
        if radians < 0.0 {
            radians + std::f32::consts::TAU
        } else {
            radians
        }
    }

    pub fn as_unit_vector(&self) -> Point2 {
        Point2::new(self.cos(), self.sin())
    }

    pub fn rotate(&self, vector: Point2) -> Point2 {
        let (c, s) = (self.cos(), self.sin());
        Point2::new(vector.x * c - vector.y * s, vector.x * s + vector.y * c)
    }

    pub fn add(&self, other: Angle) -> Angle {
        Angle {
            cos: self.cos() * other.cos() - self.sin() * other.sin(),
            sin: self.sin() * other.cos() + self.cos() * other.sin(),
        }
        .renormalized()
    }

    pub fn sub(&self, other: Angle) -> Angle {
        self.add(other.neg())
    }

    pub fn neg(&self) -> Angle {
        Angle {
            cos: self.cos,
            sin: -self.sin,
        }
    }

    // Removes the drift that builds up after many compositions.
    fn renormalized(self) -> Angle {
        let length = (self.cos * self.cos + self.sin * self.sin).sqrt();
        if length < EPSILON {
            Angle::NULL
        } else {
            Angle {
                cos: self.cos / length,
                sin: self.sin / length,
            }
        }
    }

    #[inline]
    fn debug_check_unit(&self) {
        debug_assert!(
            (self.cos * self.cos + self.sin * self.sin - 1.0).abs() < 1.0e-3,
            "Angle is not a unit pair: {:?}",
            self
        );
    }
}
