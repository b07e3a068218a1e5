// argus_core/src/geometry.rs

use nalgebra::{Isometry2, Vector2};
use num_traits::{Float, FloatConst};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

// =========================================================================
// == Angle Wrapping ==
// =========================================================================

/// Wraps `value` into the half-open interval `(-half_turn, half_turn]`.
///
/// The result is idempotent: wrapping an already wrapped value returns it
/// unchanged, bit for bit. NaN stays NaN.
pub fn wrap_half_turn<T: Float>(value: T, half_turn: T) -> T {
    let full_turn = half_turn + half_turn;
    // `%` keeps the sign of the dividend, so this lands in (-full, full).
    let wrapped = value % full_turn;
    if wrapped <= -half_turn {
        wrapped + full_turn
    } else if wrapped > half_turn {
        wrapped - full_turn
    } else {
        wrapped
    }
}

/// Wraps an angle in radians into `(-π, π]`.
pub fn normalize_angle<T: Float + FloatConst>(radians: T) -> T {
    wrap_half_turn(radians, T::PI())
}

/// Wraps an angle in degrees into `(-180°, 180°]`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    wrap_half_turn(degrees, 180.0)
}

// =========================================================================
// == Rotation ==
// =========================================================================

/// A planar angle. Stored in radians; not normalized until asked to be.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    radians: f64,
}

impl Rotation {
    pub const ZERO: Rotation = Rotation { radians: 0.0 };
    pub const HALF_TURN: Rotation = Rotation {
        radians: std::f64::consts::PI,
    };

    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    pub fn tan(&self) -> f64 {
        self.radians.tan()
    }

    /// The same direction expressed in `(-π, π]`.
    pub fn normalized(self) -> Self {
        Self::from_radians(normalize_angle(self.radians))
    }

    /// Sum of two rotations, wrapped back into range.
    pub fn plus(self, other: Rotation) -> Self {
        (self + other).normalized()
    }

    /// Difference of two rotations, wrapped back into range.
    pub fn minus(self, other: Rotation) -> Self {
        (self - other).normalized()
    }
}

impl Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Rotation {
        Rotation::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Rotation {
    type Output = Rotation;

    fn sub(self, rhs: Rotation) -> Rotation {
        Rotation::from_radians(self.radians - rhs.radians)
    }
}

impl Neg for Rotation {
    type Output = Rotation;

    fn neg(self) -> Rotation {
        Rotation::from_radians(-self.radians)
    }
}

// =========================================================================
// == Translation ==
// =========================================================================

/// A ground-plane offset in metres. In the robot frame `x` is forward and `y`
/// is to the left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotates the vector counter-clockwise about the origin.
    pub fn rotate_by(&self, rotation: Rotation) -> Self {
        let (sin, cos) = rotation.radians().sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2<f64>> for Translation {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Add for Translation {
    type Output = Translation;

    fn add(self, rhs: Translation) -> Translation {
        Translation::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Translation {
    type Output = Translation;

    fn sub(self, rhs: Translation) -> Translation {
        Translation::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Translation {
    type Output = Translation;

    fn neg(self) -> Translation {
        Translation::new(-self.x, -self.y)
    }
}

// =========================================================================
// == Pose2D ==
// =========================================================================

/// A position and heading on the field plane.
///
/// The heading is always kept in `(-180°, 180°]`; every constructor
/// normalizes it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose2D {
    translation: Translation,
    rotation: Rotation,
}

impl Pose2D {
    pub fn new(translation: Translation, rotation: Rotation) -> Self {
        Self {
            translation,
            rotation: rotation.normalized(),
        }
    }

    /// Convenience constructor with the heading given in degrees.
    pub fn from_xyh_degrees(x: f64, y: f64, heading_deg: f64) -> Self {
        Self::new(Translation::new(x, y), Rotation::from_degrees(heading_deg))
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn x(&self) -> f64 {
        self.translation.x
    }

    pub fn y(&self) -> f64 {
        self.translation.y
    }

    /// Heading in degrees, within `(-180°, 180°]`.
    pub fn heading(&self) -> f64 {
        self.rotation.degrees()
    }

    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::new(self.translation.to_vector(), self.rotation.radians())
    }

    pub fn from_isometry(iso: &Isometry2<f64>) -> Self {
        Self::new(
            Translation::from(iso.translation.vector),
            Rotation::from_radians(iso.rotation.angle()),
        )
    }

    /// Expresses this pose in the frame anchored at `origin`: `origin`
    /// becomes the new zero and its heading the new forward axis.
    pub fn relative_to(&self, origin: &Pose2D) -> Pose2D {
        // T_origin_self = (T_world_origin)^-1 * T_world_self
        Pose2D::from_isometry(&(origin.to_isometry().inverse() * self.to_isometry()))
    }

    /// Applies an offset expressed in this pose's own frame.
    pub fn transform_by(&self, offset: Translation, rotation: Rotation) -> Pose2D {
        let local = Isometry2::new(offset.to_vector(), rotation.radians());
        Pose2D::from_isometry(&(self.to_isometry() * local))
    }

    /// The same position with the heading turned by `delta`.
    pub fn rotate_heading(&self, delta: Rotation) -> Pose2D {
        Pose2D::new(self.translation, self.rotation + delta)
    }
}

impl fmt::Display for Pose2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}, {:.1}°)",
            self.x(),
            self.y(),
            self.heading()
        )
    }
}
