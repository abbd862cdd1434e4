use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{MathError, Result};
use crate::matrix::Mat3;
use crate::scalar::{DOT_ONE_THRESHOLD, EPSILON};
use crate::vector::Vec3;

/// Rotation quaternion.
///
/// Represents a rotation when unit length; non-normalized instances are legal
/// intermediate values, e.g. during interpolation. Angles on the public API
/// are degrees, Euler angles are `(pitch, heading, bank)` applied bank first,
/// then pitch, then heading.
#[must_use]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` degrees around `axis` (unit length).
    pub fn from_axis_angle(axis: &Vec3, angle: f32) -> Self {
        let half = (angle * 0.5).to_radians();
        let sin = half.sin();

        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, half.cos())
    }

    /// Rotation from Euler angles in degrees, composed bank, then pitch, then
    /// heading, matching [`Mat3::from_euler`].
    pub fn from_euler(pitch: f32, heading: f32, bank: f32) -> Self {
        let (half_pitch, half_heading, half_bank) = (
            (pitch * 0.5).to_radians(),
            (heading * 0.5).to_radians(),
            (bank * 0.5).to_radians(),
        );
        let (ch, sh) = (half_heading.cos(), half_heading.sin());
        let (cp, sp) = (half_pitch.cos(), half_pitch.sin());
        let (cb, sb) = (half_bank.cos(), half_bank.sin());

        Self::new(
            ch * sp * cb + sh * cp * sb,
            sh * cp * cb - ch * sp * sb,
            ch * cp * sb - sh * sp * cb,
            ch * cp * cb + sh * sp * sb,
        )
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.squared_length().sqrt()
    }

    #[must_use]
    pub fn squared_length(&self) -> f32 {
        self.dot(self)
    }

    /// Fails with [`MathError::DegenerateLength`] when the length is below
    /// [`EPSILON`], uniformly with vector normalization.
    pub fn normalized(&self) -> Result<Self> {
        let length = self.length();
        if length < EPSILON {
            return Err(MathError::DegenerateLength);
        }
        Ok(*self / length)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, `conjugate / length²`; equal to the conjugate
    /// for unit quaternions.
    pub fn inverse(&self) -> Result<Self> {
        let squared_length = self.squared_length();
        if squared_length < EPSILON {
            return Err(MathError::DegenerateLength);
        }
        Ok(self.conjugate() / squared_length)
    }

    /// Angle in degrees, in `[0, 180]`, between the two rotations; 0 when the
    /// rotations are the same within the dot threshold.
    #[must_use]
    pub fn angle_between(q1: &Self, q2: &Self) -> f32 {
        let dot = q1.dot(q2);

        if dot > DOT_ONE_THRESHOLD {
            return 0.0;
        }

        2.0 * dot.clamp(-1.0, 1.0).abs().acos().to_degrees()
    }

    /// Rotation equality: dot above [`DOT_ONE_THRESHOLD`]. Exact component
    /// equality is `==`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.dot(other) > DOT_ONE_THRESHOLD
    }

    /// Fractional power of a unit quaternion via the exponential map.
    ///
    /// The sine ratio degenerates as the quaternion approaches identity; the
    /// weight tends to `t` there and is short-circuited to it.
    pub fn exp(&self, t: f32) -> Self {
        let alpha = self.w.clamp(-1.0, 1.0).acos();
        let new_alpha = t * alpha;
        let sin_alpha = alpha.sin();

        let mult = if sin_alpha.abs() < EPSILON {
            t
        } else {
            new_alpha.sin() / sin_alpha
        };

        Self::new(
            self.x * mult,
            self.y * mult,
            self.z * mult,
            new_alpha.cos(),
        )
    }

    /// Interpolation through the exponential map,
    /// `exp(q2 * q1.conjugate(), t) * q1`. Follows the same limiting curve as
    /// [`Quat::slerp`] but is computed differently.
    pub fn lerp(q1: &Self, q2: &Self, t: f32) -> Self {
        (*q2 * q1.conjugate()).exp(t) * *q1
    }

    /// Shortest-path spherical interpolation between unit quaternions.
    ///
    /// `q2` is negated when the dot is negative so interpolation never takes
    /// the long way around the 4-sphere; near-identical inputs short-circuit
    /// to `q1` before the sine term degenerates.
    pub fn slerp(q1: &Self, q2: &Self, t: f32) -> Self {
        let mut q2 = *q2;
        let mut dot = q1.dot(&q2);

        if dot < 0.0 {
            q2 = -q2;
            dot = -dot;
        }

        if dot > DOT_ONE_THRESHOLD {
            return *q1;
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();

        *q1 * (((1.0 - t) * theta).sin() / sin_theta) + q2 * ((t * theta).sin() / sin_theta)
    }

    /// Equivalent rotation matrix; exact inverse of [`Mat3::to_quat`] for
    /// unit quaternions.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_quat(self)
    }

    /// Euler angles `(pitch, heading, bank)` in degrees.
    ///
    /// In gimbal lock (pitch sine above the dot threshold) one degree of
    /// freedom is lost: bank collapses to zero and heading absorbs the whole
    /// twist through a degenerate two-argument arctangent.
    pub fn to_euler(&self) -> Vec3 {
        let sin_pitch = -2.0 * (self.y * self.z - self.w * self.x);

        let (pitch, heading, bank);
        if sin_pitch.abs() > DOT_ONE_THRESHOLD {
            pitch = std::f32::consts::FRAC_PI_2 * sin_pitch;
            heading = (-self.x * self.z + self.w * self.y)
                .atan2(0.5 - self.y * self.y - self.z * self.z);
            bank = 0.0;
        } else {
            pitch = sin_pitch.clamp(-1.0, 1.0).asin();
            heading = (self.x * self.z + self.w * self.y)
                .atan2(0.5 - self.x * self.x - self.y * self.y);
            bank = (self.x * self.y + self.w * self.z)
                .atan2(0.5 - self.x * self.x - self.z * self.z);
        }

        Vec3::new(
            pitch.to_degrees(),
            heading.to_degrees(),
            bank.to_degrees(),
        )
    }
}

impl Display for Quat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} + {} i + {} j + {} k)",
            self.w, self.x, self.y, self.z
        )
    }
}

/// Hamilton product; composition is right-to-left, `q1 * q2` applies `q2`
/// first when rotating with `v * q`.
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w * rhs.x + rhs.w * self.x + self.y * rhs.z - rhs.y * self.z,
            self.w * rhs.y + rhs.w * self.y + self.z * rhs.x - rhs.z * self.x,
            self.w * rhs.z + rhs.w * self.z + self.x * rhs.y - self.y * rhs.x,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

/// Reference rotation path: embeds `v` as the pure quaternion `(v, 0)` and
/// takes the vector part of `q * (v, 0) * conjugate(q)`. The matrix path
/// through [`Quat::to_mat3`] must agree within epsilon.
impl Mul<Quat> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Quat) -> Self::Output {
        let pure = Quat::new(self.x, self.y, self.z, 0.0);
        let rotated = rhs * pure * rhs.conjugate();

        Vec3::new(rotated.x, rotated.y, rotated.z)
    }
}

impl Add for Quat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Quat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f32> for Quat {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl From<[f32; 4]> for Quat {
    fn from(array: [f32; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl From<Quat> for [f32; 4] {
    fn from(q: Quat) -> Self {
        [q.x, q.y, q.z, q.w]
    }
}

impl From<(f32, f32, f32, f32)> for Quat {
    fn from(tuple: (f32, f32, f32, f32)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

impl From<Quat> for (f32, f32, f32, f32) {
    fn from(q: Quat) -> Self {
        (q.x, q.y, q.z, q.w)
    }
}
