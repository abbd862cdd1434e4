use std::fmt::{Debug, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MathError, Result};
use crate::quaternion::Quat;
use crate::scalar::{self, snap_to_zero, EPSILON};
use crate::vector::{Vec2, Vec3, Vec4};

/// Generates a square row-major matrix type backed by a flat array.
///
/// Rows are addressed as `m[row][col]`. Transforms follow the
/// row-vector-on-left convention, `v * m`, so composition reads left to
/// right: `v * a * b` applies `a` first.
macro_rules! struct_mat {
    ($name:ident, $dim:expr, $size:expr, $identity:expr) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            values: [f32; $size],
        }

        impl $name {
            const COLS: usize = $dim;
            const ROWS: usize = $dim;

            pub const IDENTITY: Self = Self::with_values($identity);
            pub const ZERO: Self = Self::with_values([0.0; $size]);

            pub const fn with_values(values: [f32; $size]) -> Self {
                Self { values }
            }

            pub fn transpose(&self) -> Self {
                let mut values = [0.0; $size];
                for row in 0..Self::ROWS {
                    for col in 0..Self::COLS {
                        values[col * Self::COLS + row] = self.values[row * Self::COLS + col];
                    }
                }
                Self { values }
            }

            #[must_use]
            pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.values
                    .iter()
                    .zip(other.values.iter())
                    .all(|(a, b)| scalar::approx_eq(*a, *b, epsilon))
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                writeln!(f, "[")?;
                for row in 0..Self::ROWS {
                    write!(f, "\t")?;
                    for col in 0..Self::COLS {
                        write!(f, "{}, ", self.values[row * Self::COLS + col])?;
                    }
                    writeln!(f)?;
                }
                writeln!(f, "]")
            }
        }

        impl Index<usize> for $name {
            type Output = [f32];

            fn index(&self, index: usize) -> &Self::Output {
                &self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                let mut values = self.values;
                for (value, rhs) in values.iter_mut().zip(rhs.values.iter()) {
                    *value += rhs;
                }
                Self { values }
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                let mut values = self.values;
                for (value, rhs) in values.iter_mut().zip(rhs.values.iter()) {
                    *value -= rhs;
                }
                Self { values }
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    values: self.values.map(|value| -value),
                }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self::Output {
                Self {
                    values: self.values.map(|value| value * rhs),
                }
            }
        }

        impl MulAssign<f32> for $name {
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl Mul for $name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                let mut values = [0.0; $size];
                for row in 0..Self::ROWS {
                    for col in 0..Self::COLS {
                        let mut acc = 0.0;
                        for k in 0..Self::COLS {
                            acc += self.values[row * Self::COLS + k]
                                * rhs.values[k * Self::COLS + col];
                        }
                        values[row * Self::COLS + col] = acc;
                    }
                }
                Self { values }
            }
        }

        impl MulAssign for $name {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl From<[[f32; $dim]; $dim]> for $name {
            fn from(rows: [[f32; $dim]; $dim]) -> Self {
                let mut values = [0.0; $size];
                for (row, row_values) in rows.iter().enumerate() {
                    values[row * $dim..(row + 1) * $dim].copy_from_slice(row_values);
                }
                Self { values }
            }
        }

        impl From<$name> for [[f32; $dim]; $dim] {
            fn from(matrix: $name) -> Self {
                let mut rows = [[0.0; $dim]; $dim];
                for (row, row_values) in rows.iter_mut().enumerate() {
                    row_values.copy_from_slice(&matrix[row]);
                }
                rows
            }
        }
    };
}

struct_mat!(Mat2, 2, 4, [1.0, 0.0, 0.0, 1.0]);
struct_mat!(Mat3, 3, 9, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
#[rustfmt::skip]
struct_mat!(Mat4, 4, 16, [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
]);

impl Mat2 {
    pub fn row(&self, index: usize) -> Vec2 {
        Vec2::new(self[index][0], self[index][1])
    }

    #[must_use]
    pub fn determinant(&self) -> f32 {
        self[0][0] * self[1][1] - self[0][1] * self[1][0]
    }

    /// Fails with [`MathError::SingularMatrix`] when `|det| < EPSILON`.
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() < EPSILON {
            return Err(MathError::SingularMatrix);
        }
        let inv_det = 1.0 / det;

        Ok(Self::with_values([
            self[1][1] * inv_det,
            -self[0][1] * inv_det,
            -self[1][0] * inv_det,
            self[0][0] * inv_det,
        ]))
    }

    #[must_use]
    pub fn is_orthogonal(&self) -> bool {
        let r0 = self.row(0);
        let r1 = self.row(1);

        (r0.squared_magnitude() - 1.0).abs() < EPSILON
            && (r1.squared_magnitude() - 1.0).abs() < EPSILON
            && r0.dot(&r1).abs() < EPSILON
    }

    /// Counter-clockwise rotation of `angle` degrees for row vectors.
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();

        Self::with_values([cos, sin, -sin, cos])
    }

    pub fn from_scale(scale: f32) -> Self {
        Self::with_values([scale, 0.0, 0.0, scale])
    }

    /// Reflection across the line through the origin perpendicular to `axis`
    /// (unit length), the Householder matrix `I - 2 * axis * axisᵀ`.
    pub fn from_reflection(axis: &Vec2) -> Self {
        Self::with_values([
            1.0 - 2.0 * axis.x * axis.x,
            -2.0 * axis.x * axis.y,
            -2.0 * axis.x * axis.y,
            1.0 - 2.0 * axis.y * axis.y,
        ])
    }
}

impl Mat3 {
    pub fn row(&self, index: usize) -> Vec3 {
        Vec3::new(self[index][0], self[index][1], self[index][2])
    }

    /// Rule of Sarrus.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        self[0][0] * (self[1][1] * self[2][2] - self[1][2] * self[2][1])
            - self[0][1] * (self[1][0] * self[2][2] - self[1][2] * self[2][0])
            + self[0][2] * (self[1][0] * self[2][1] - self[1][1] * self[2][0])
    }

    /// Signed adjugate over the determinant. Fails with
    /// [`MathError::SingularMatrix`] when `|det| < EPSILON`.
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() < EPSILON {
            return Err(MathError::SingularMatrix);
        }
        let inv_det = 1.0 / det;

        Ok(Self::with_values([
            (self[1][1] * self[2][2] - self[1][2] * self[2][1]) * inv_det,
            (self[0][2] * self[2][1] - self[0][1] * self[2][2]) * inv_det,
            (self[0][1] * self[1][2] - self[0][2] * self[1][1]) * inv_det,
            (self[1][2] * self[2][0] - self[1][0] * self[2][2]) * inv_det,
            (self[0][0] * self[2][2] - self[0][2] * self[2][0]) * inv_det,
            (self[0][2] * self[1][0] - self[0][0] * self[1][2]) * inv_det,
            (self[1][0] * self[2][1] - self[1][1] * self[2][0]) * inv_det,
            (self[0][1] * self[2][0] - self[0][0] * self[2][1]) * inv_det,
            (self[0][0] * self[1][1] - self[0][1] * self[1][0]) * inv_det,
        ]))
    }

    /// All three rows unit length and pairwise orthogonal within epsilon.
    /// Holds for every pure rotation; the inverse of an orthogonal matrix is
    /// its transpose.
    #[must_use]
    pub fn is_orthogonal(&self) -> bool {
        let rows = [self.row(0), self.row(1), self.row(2)];

        rows.iter()
            .all(|row| (row.squared_magnitude() - 1.0).abs() < EPSILON)
            && rows[0].dot(&rows[1]).abs() < EPSILON
            && rows[1].dot(&rows[2]).abs() < EPSILON
            && rows[0].dot(&rows[2]).abs() < EPSILON
    }

    /// Rodrigues' rotation of `angle` degrees around `axis` (unit length).
    pub fn from_axis_angle(axis: &Vec3, angle: f32) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        let t = 1.0 - cos;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        Self::with_values([
            x * x * t + cos,
            x * y * t + z * sin,
            x * z * t - y * sin,
            x * y * t - z * sin,
            y * y * t + cos,
            y * z * t + x * sin,
            x * z * t + y * sin,
            y * z * t - x * sin,
            z * z * t + cos,
        ])
    }

    pub fn from_scale(scale: f32) -> Self {
        Self::with_values([scale, 0.0, 0.0, 0.0, scale, 0.0, 0.0, 0.0, scale])
    }

    /// Reflection across the plane through the origin perpendicular to `axis`
    /// (unit length), the Householder matrix `I - 2 * axis * axisᵀ`.
    pub fn from_reflection(axis: &Vec3) -> Self {
        let (x, y, z) = (axis.x, axis.y, axis.z);

        Self::with_values([
            1.0 - 2.0 * x * x,
            -2.0 * x * y,
            -2.0 * x * z,
            -2.0 * x * y,
            1.0 - 2.0 * y * y,
            -2.0 * y * z,
            -2.0 * x * z,
            -2.0 * y * z,
            1.0 - 2.0 * z * z,
        ])
    }

    /// Rotation from Euler angles in degrees, composed bank, then pitch, then
    /// heading when applied to a row vector. Matches [`Quat::from_euler`].
    pub fn from_euler(pitch: f32, heading: f32, bank: f32) -> Self {
        let (sp, cp) = pitch.to_radians().sin_cos();
        let (sh, ch) = heading.to_radians().sin_cos();
        let (sb, cb) = bank.to_radians().sin_cos();

        Self::with_values([
            ch * cb + sh * sp * sb,
            sb * cp,
            -sh * cb + ch * sp * sb,
            -ch * sb + sh * sp * cb,
            cb * cp,
            sb * sh + ch * sp * cb,
            sh * cp,
            -sp,
            ch * cp,
        ])
    }

    /// Rotation matrix of a unit quaternion; exact inverse of
    /// [`Mat3::to_quat`].
    pub fn from_quat(q: &Quat) -> Self {
        let xx = 2.0 * q.x * q.x;
        let yy = 2.0 * q.y * q.y;
        let zz = 2.0 * q.z * q.z;
        let xy = 2.0 * q.x * q.y;
        let xz = 2.0 * q.x * q.z;
        let yz = 2.0 * q.y * q.z;
        let wx = 2.0 * q.w * q.x;
        let wy = 2.0 * q.w * q.y;
        let wz = 2.0 * q.w * q.z;

        Self::with_values([
            1.0 - yy - zz,
            xy + wz,
            xz - wy,
            xy - wz,
            1.0 - xx - zz,
            yz + wx,
            xz + wy,
            yz - wx,
            1.0 - xx - yy,
        ])
    }

    /// Unit quaternion of a pure rotation matrix.
    ///
    /// Branches on the largest of the four squared components so the square
    /// root is always taken of the largest magnitude, which keeps the
    /// division stable for every rotation including 180° turns where the
    /// trace alone degenerates.
    pub fn to_quat(&self) -> Quat {
        let four_w_squared_minus_1 = self[0][0] + self[1][1] + self[2][2];
        let four_x_squared_minus_1 = self[0][0] - self[1][1] - self[2][2];
        let four_y_squared_minus_1 = self[1][1] - self[0][0] - self[2][2];
        let four_z_squared_minus_1 = self[2][2] - self[0][0] - self[1][1];

        let mut biggest_index = 0;
        let mut biggest = four_w_squared_minus_1;
        if four_x_squared_minus_1 > biggest {
            biggest = four_x_squared_minus_1;
            biggest_index = 1;
        }
        if four_y_squared_minus_1 > biggest {
            biggest = four_y_squared_minus_1;
            biggest_index = 2;
        }
        if four_z_squared_minus_1 > biggest {
            biggest = four_z_squared_minus_1;
            biggest_index = 3;
        }

        let biggest_value = (biggest + 1.0).sqrt() * 0.5;
        let mult = 0.25 / biggest_value;

        match biggest_index {
            0 => Quat::new(
                (self[1][2] - self[2][1]) * mult,
                (self[2][0] - self[0][2]) * mult,
                (self[0][1] - self[1][0]) * mult,
                biggest_value,
            ),
            1 => Quat::new(
                biggest_value,
                (self[0][1] + self[1][0]) * mult,
                (self[0][2] + self[2][0]) * mult,
                (self[1][2] - self[2][1]) * mult,
            ),
            2 => Quat::new(
                (self[0][1] + self[1][0]) * mult,
                biggest_value,
                (self[1][2] + self[2][1]) * mult,
                (self[2][0] - self[0][2]) * mult,
            ),
            _ => Quat::new(
                (self[0][2] + self[2][0]) * mult,
                (self[1][2] + self[2][1]) * mult,
                biggest_value,
                (self[0][1] - self[1][0]) * mult,
            ),
        }
    }

    /// Euler angles `(pitch, heading, bank)` in degrees of a pure rotation
    /// matrix. In gimbal lock bank collapses to zero and heading absorbs the
    /// whole twist, as in [`Quat::to_euler`].
    pub fn to_euler(&self) -> Vec3 {
        let sin_pitch = -self[2][1];

        let (pitch, heading, bank);
        if sin_pitch.abs() > 0.999_99 {
            pitch = std::f32::consts::FRAC_PI_2 * sin_pitch;
            heading = (-self[0][2]).atan2(self[0][0]);
            bank = 0.0;
        } else {
            pitch = sin_pitch.clamp(-1.0, 1.0).asin();
            heading = self[2][0].atan2(self[2][2]);
            bank = self[0][1].atan2(self[1][1]);
        }

        Vec3::new(
            pitch.to_degrees(),
            heading.to_degrees(),
            bank.to_degrees(),
        )
    }
}

impl Mat4 {
    pub fn row(&self, index: usize) -> Vec4 {
        Vec4::new(
            self[index][0],
            self[index][1],
            self[index][2],
            self[index][3],
        )
    }

    /// Cofactor expansion along the first row.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let a2323 = self[2][2] * self[3][3] - self[2][3] * self[3][2];
        let a1323 = self[2][1] * self[3][3] - self[2][3] * self[3][1];
        let a1223 = self[2][1] * self[3][2] - self[2][2] * self[3][1];
        let a0323 = self[2][0] * self[3][3] - self[2][3] * self[3][0];
        let a0223 = self[2][0] * self[3][2] - self[2][2] * self[3][0];
        let a0123 = self[2][0] * self[3][1] - self[2][1] * self[3][0];

        self[0][0] * (self[1][1] * a2323 - self[1][2] * a1323 + self[1][3] * a1223)
            - self[0][1] * (self[1][0] * a2323 - self[1][2] * a0323 + self[1][3] * a0223)
            + self[0][2] * (self[1][0] * a1323 - self[1][1] * a0323 + self[1][3] * a0123)
            - self[0][3] * (self[1][0] * a1223 - self[1][1] * a0223 + self[1][2] * a0123)
    }

    /// Adjugate over the determinant. Fails with
    /// [`MathError::SingularMatrix`] when `|det| < EPSILON`.
    #[rustfmt::skip]
    pub fn try_inverse(&self) -> Result<Self> {
        let a2323 = self[2][2] * self[3][3] - self[2][3] * self[3][2];
        let a1323 = self[2][1] * self[3][3] - self[2][3] * self[3][1];
        let a1223 = self[2][1] * self[3][2] - self[2][2] * self[3][1];
        let a0323 = self[2][0] * self[3][3] - self[2][3] * self[3][0];
        let a0223 = self[2][0] * self[3][2] - self[2][2] * self[3][0];
        let a0123 = self[2][0] * self[3][1] - self[2][1] * self[3][0];
        let a2313 = self[1][2] * self[3][3] - self[1][3] * self[3][2];
        let a1313 = self[1][1] * self[3][3] - self[1][3] * self[3][1];
        let a1213 = self[1][1] * self[3][2] - self[1][2] * self[3][1];
        let a2312 = self[1][2] * self[2][3] - self[1][3] * self[2][2];
        let a1312 = self[1][1] * self[2][3] - self[1][3] * self[2][1];
        let a1212 = self[1][1] * self[2][2] - self[1][2] * self[2][1];
        let a0313 = self[1][0] * self[3][3] - self[1][3] * self[3][0];
        let a0213 = self[1][0] * self[3][2] - self[1][2] * self[3][0];
        let a0312 = self[1][0] * self[2][3] - self[1][3] * self[2][0];
        let a0212 = self[1][0] * self[2][2] - self[1][2] * self[2][0];
        let a0113 = self[1][0] * self[3][1] - self[1][1] * self[3][0];
        let a0112 = self[1][0] * self[2][1] - self[1][1] * self[2][0];

        let det = self[0][0] * (self[1][1] * a2323 - self[1][2] * a1323 + self[1][3] * a1223)
            - self[0][1] * (self[1][0] * a2323 - self[1][2] * a0323 + self[1][3] * a0223)
            + self[0][2] * (self[1][0] * a1323 - self[1][1] * a0323 + self[1][3] * a0123)
            - self[0][3] * (self[1][0] * a1223 - self[1][1] * a0223 + self[1][2] * a0123);

        if det.abs() < EPSILON {
            return Err(MathError::SingularMatrix);
        }

        let inv_det = 1.0 / det;

        Ok(Self::with_values([
            inv_det * (self[1][1] * a2323 - self[1][2] * a1323 + self[1][3] * a1223),
            inv_det * -(self[0][1] * a2323 - self[0][2] * a1323 + self[0][3] * a1223),
            inv_det * (self[0][1] * a2313 - self[0][2] * a1313 + self[0][3] * a1213),
            inv_det * -(self[0][1] * a2312 - self[0][2] * a1312 + self[0][3] * a1212),
            inv_det * -(self[1][0] * a2323 - self[1][2] * a0323 + self[1][3] * a0223),
            inv_det * (self[0][0] * a2323 - self[0][2] * a0323 + self[0][3] * a0223),
            inv_det * -(self[0][0] * a2313 - self[0][2] * a0313 + self[0][3] * a0213),
            inv_det * (self[0][0] * a2312 - self[0][2] * a0312 + self[0][3] * a0212),
            inv_det * (self[1][0] * a1323 - self[1][1] * a0323 + self[1][3] * a0123),
            inv_det * -(self[0][0] * a1323 - self[0][1] * a0323 + self[0][3] * a0123),
            inv_det * (self[0][0] * a1313 - self[0][1] * a0313 + self[0][3] * a0113),
            inv_det * -(self[0][0] * a1312 - self[0][1] * a0312 + self[0][3] * a0112),
            inv_det * -(self[1][0] * a1223 - self[1][1] * a0223 + self[1][2] * a0123),
            inv_det * (self[0][0] * a1223 - self[0][1] * a0223 + self[0][2] * a0123),
            inv_det * -(self[0][0] * a1213 - self[0][1] * a0213 + self[0][2] * a0113),
            inv_det * (self[0][0] * a1212 - self[0][1] * a0212 + self[0][2] * a0112),
        ]))
    }

    /// Translation in the fourth row, per the row-vector convention.
    #[rustfmt::skip]
    pub fn from_translation(translation: &Vec3) -> Self {
        Self::with_values([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            translation.x, translation.y, translation.z, 1.0,
        ])
    }

    #[rustfmt::skip]
    pub fn from_rotation(rotation: &Mat3) -> Self {
        Self::with_values([
            rotation[0][0], rotation[0][1], rotation[0][2], 0.0,
            rotation[1][0], rotation[1][1], rotation[1][2], 0.0,
            rotation[2][0], rotation[2][1], rotation[2][2], 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation in the upper-left block, translation in the fourth row;
    /// `v * m` rotates first, then translates.
    #[rustfmt::skip]
    pub fn from_affine(rotation: &Mat3, translation: &Vec3) -> Self {
        Self::with_values([
            rotation[0][0], rotation[0][1], rotation[0][2], 0.0,
            rotation[1][0], rotation[1][1], rotation[1][2], 0.0,
            rotation[2][0], rotation[2][1], rotation[2][2], 0.0,
            translation.x, translation.y, translation.z, 1.0,
        ])
    }

    #[rustfmt::skip]
    pub fn from_scale(scale: &Vec3) -> Self {
        Self::with_values([
            scale.x, 0.0, 0.0, 0.0,
            0.0, scale.y, 0.0, 0.0,
            0.0, 0.0, scale.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Transforms a position: the point is widened with `w = 1` so the
    /// translation row applies.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        (point.extend(1.0) * *self).truncate()
    }

    /// Transforms a direction: widened with `w = 0`, so the translation row
    /// has no effect.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        (direction.extend(0.0) * *self).truncate()
    }
}

/// Row-vector transform. Components within [`EPSILON`] of zero snap to exact
/// zero so axis rotations by multiples of 90 degrees land on exact axes.
impl Mul<Mat2> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Mat2) -> Self::Output {
        Vec2::new(
            snap_to_zero(self.x * rhs[0][0] + self.y * rhs[1][0]),
            snap_to_zero(self.x * rhs[0][1] + self.y * rhs[1][1]),
        )
    }
}

/// Row-vector transform, with the same sub-epsilon snapping as `Vec2 * Mat2`.
impl Mul<Mat3> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        Vec3::new(
            snap_to_zero(self.x * rhs[0][0] + self.y * rhs[1][0] + self.z * rhs[2][0]),
            snap_to_zero(self.x * rhs[0][1] + self.y * rhs[1][1] + self.z * rhs[2][1]),
            snap_to_zero(self.x * rhs[0][2] + self.y * rhs[1][2] + self.z * rhs[2][2]),
        )
    }
}

/// Row-vector transform including the w row; no snapping on the 4D path.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        Vec4::new(
            self.x * rhs[0][0] + self.y * rhs[1][0] + self.z * rhs[2][0] + self.w * rhs[3][0],
            self.x * rhs[0][1] + self.y * rhs[1][1] + self.z * rhs[2][1] + self.w * rhs[3][1],
            self.x * rhs[0][2] + self.y * rhs[1][2] + self.z * rhs[2][2] + self.w * rhs[3][2],
            self.x * rhs[0][3] + self.y * rhs[1][3] + self.z * rhs[2][3] + self.w * rhs[3][3],
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;
    use crate::scalar::APPROX_EPSILON;

    #[test]
    fn identity() {
        let m = Mat4::IDENTITY;

        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    assert_float_absolute_eq!(m[i][j], 1.0, 0.0);
                } else {
                    assert_float_absolute_eq!(m[i][j], 0.0, 0.0);
                }
            }
        }
    }

    #[test]
    fn index_mut() {
        let mut m = Mat4::IDENTITY;
        m[3][2] = 5.0;

        assert_float_absolute_eq!(m[3][2], 5.0, 0.0);
    }

    #[test]
    fn determinant_of_identity_is_one() {
        assert_float_absolute_eq!(Mat2::IDENTITY.determinant(), 1.0, 0.0);
        assert_float_absolute_eq!(Mat3::IDENTITY.determinant(), 1.0, 0.0);
        assert_float_absolute_eq!(Mat4::IDENTITY.determinant(), 1.0, 0.0);
    }

    #[rustfmt::skip]
    #[test]
    fn mat4_mul() {
        let a = Mat4::with_values([
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 39.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        ]);
        let b = Mat4::with_values([
            17.0, 18.0, 19.0, 20.0,
            21.0, 22.0, 23.0, 24.0,
            25.0, 26.0, 27.0, 28.0,
            29.0, 30.0, 31.0, 32.0,
        ]);

        let result = a * b;

        let expected = Mat4::with_values([
            250.0, 260.0, 270.0, 280.0,
            618.0, 644.0, 670.0, 696.0,
            1595.0, 1666.0, 1737.0, 1808.0,
            1354.0, 1412.0, 1470.0, 1528.0,
        ]);
        assert!(result.approx_eq(&expected, 1e-4));
    }

    #[rustfmt::skip]
    #[test]
    fn mat4_try_inverse() {
        let a = Mat4::with_values([
            1.0, 0.0, 0.0, 1.0,
            0.0, 2.0, 1.0, 2.0,
            2.0, 1.0, 0.0, 1.0,
            2.0, 0.0, 1.0, 4.0,
        ]);

        let inverse = a.try_inverse().unwrap();

        let expected = Mat4::with_values([
            -2.0, -0.5, 1.0, 0.5,
            1.0, 0.5, 0.0, -0.5,
            -8.0, -1.0, 2.0, 2.0,
            3.0, 0.5, -1.0, -0.5,
        ]);
        assert!(inverse.approx_eq(&expected, 1e-4));
        assert!((a * inverse).approx_eq(&Mat4::IDENTITY, APPROX_EPSILON));
    }

    #[test]
    fn singular_inverse_fails() {
        assert_eq!(Mat2::ZERO.try_inverse(), Err(MathError::SingularMatrix));
        assert_eq!(Mat3::ZERO.try_inverse(), Err(MathError::SingularMatrix));
        assert_eq!(Mat4::ZERO.try_inverse(), Err(MathError::SingularMatrix));
    }

    #[rustfmt::skip]
    #[test]
    fn mat3_try_inverse() {
        let m = Mat3::with_values([
            2.0, 0.0, 0.0,
            0.0, 4.0, 0.0,
            1.0, 0.0, 8.0,
        ]);

        let inverse = m.try_inverse().unwrap();

        assert!((m * inverse).approx_eq(&Mat3::IDENTITY, APPROX_EPSILON));
        assert!((inverse * m).approx_eq(&Mat3::IDENTITY, APPROX_EPSILON));
    }

    #[test]
    fn rotation_inverse_is_transpose() {
        let m = Mat3::from_axis_angle(&Vec3::new(1.0, 2.0, 3.0).normalized().unwrap(), 37.0);

        assert!(m
            .try_inverse()
            .unwrap()
            .approx_eq(&m.transpose(), APPROX_EPSILON));
    }

    #[test]
    fn axis_angle_rotation_is_orthogonal() {
        let m = Mat3::from_axis_angle(&Vec3::new(1.0, 2.0, 3.0).normalized().unwrap(), 73.0);

        assert!(m.is_orthogonal());
        assert!(!(m * 2.0).is_orthogonal());
    }

    #[test]
    fn rotate_right_around_up_lands_on_back() {
        let m = Mat3::from_axis_angle(&Vec3::UP, 90.0);

        let rotated = Vec3::RIGHT * m;

        assert_float_absolute_eq!(rotated.x, 0.0, 0.0);
        assert_float_absolute_eq!(rotated.y, 0.0, 0.0);
        assert_float_absolute_eq!(rotated.z, -1.0, 1e-6);
    }

    #[test]
    fn mat2_rotation_is_counter_clockwise() {
        let rotated = Vec2::RIGHT * Mat2::from_angle(90.0);

        assert_float_absolute_eq!(rotated.x, 0.0, 0.0);
        assert_float_absolute_eq!(rotated.y, 1.0, 1e-6);
        assert!(Mat2::from_angle(42.0).is_orthogonal());
    }

    #[test]
    fn mat2_try_inverse_undoes_rotation() {
        let m = Mat2::from_angle(30.0);

        assert!((m * m.try_inverse().unwrap()).approx_eq(&Mat2::IDENTITY, APPROX_EPSILON));
    }

    #[test]
    fn reflection_across_ground_plane() {
        let m = Mat3::from_reflection(&Vec3::UP);

        let reflected = Vec3::new(1.0, 2.0, 3.0) * m;

        assert!(reflected.approx_eq(&Vec3::new(1.0, -2.0, 3.0), APPROX_EPSILON));
        assert!(m.is_orthogonal());
        assert_float_absolute_eq!(m.determinant(), -1.0, 1e-6);
    }

    #[test]
    fn mat2_reflection() {
        let m = Mat2::from_reflection(&Vec2::UP);

        let reflected = Vec2::new(3.0, 4.0) * m;

        assert!(reflected.approx_eq(&Vec2::new(3.0, -4.0), APPROX_EPSILON));
    }

    #[test]
    fn from_euler_matches_axis_angle_on_single_axes() {
        let heading = Mat3::from_euler(0.0, 90.0, 0.0);
        assert!(heading.approx_eq(&Mat3::from_axis_angle(&Vec3::UP, 90.0), APPROX_EPSILON));

        let pitch = Mat3::from_euler(90.0, 0.0, 0.0);
        assert!(pitch.approx_eq(&Mat3::from_axis_angle(&Vec3::RIGHT, 90.0), APPROX_EPSILON));

        let bank = Mat3::from_euler(0.0, 0.0, 90.0);
        assert!(bank.approx_eq(&Mat3::from_axis_angle(&Vec3::FORWARD, 90.0), APPROX_EPSILON));
    }

    #[test]
    fn euler_round_trip() {
        let euler = Mat3::from_euler(30.0, 45.0, 60.0).to_euler();

        assert_float_absolute_eq!(euler.x, 30.0, 1e-3);
        assert_float_absolute_eq!(euler.y, 45.0, 1e-3);
        assert_float_absolute_eq!(euler.z, 60.0, 1e-3);
    }

    #[test]
    fn euler_gimbal_lock_collapses_bank() {
        let euler = Mat3::from_euler(90.0, 30.0, 0.0).to_euler();

        assert_float_absolute_eq!(euler.x, 90.0, 1e-2);
        assert_float_absolute_eq!(euler.y, 30.0, 1e-2);
        assert_float_absolute_eq!(euler.z, 0.0, 0.0);
    }

    #[test]
    fn quat_round_trip() {
        let q = Quat::from_axis_angle(&Vec3::new(1.0, 2.0, 3.0).normalized().unwrap(), 42.0);

        let round_tripped = Mat3::from_quat(&q).to_quat();

        assert!(round_tripped.approx_eq(&q));
    }

    #[test]
    fn to_quat_of_half_turn_picks_a_diagonal_branch() {
        // Rotation by 180 degrees around x; the trace degenerates to -1.
        let m = Mat3::with_values([1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0]);

        let q = m.to_quat();

        assert_float_absolute_eq!(q.x, 1.0, 1e-6);
        assert_float_absolute_eq!(q.y, 0.0, 1e-6);
        assert_float_absolute_eq!(q.z, 0.0, 1e-6);
        assert_float_absolute_eq!(q.w, 0.0, 1e-6);
    }

    #[test]
    fn transform_point_applies_translation() {
        let m = Mat4::from_translation(&Vec3::new(10.0, 20.0, 30.0));

        let point = m.transform_point(&Vec3::new(1.0, 2.0, 3.0));
        let direction = m.transform_direction(&Vec3::new(1.0, 2.0, 3.0));

        assert!(point.approx_eq(&Vec3::new(11.0, 22.0, 33.0), APPROX_EPSILON));
        assert!(direction.approx_eq(&Vec3::new(1.0, 2.0, 3.0), APPROX_EPSILON));
    }

    #[test]
    fn affine_rotates_before_translating() {
        let m = Mat4::from_affine(
            &Mat3::from_axis_angle(&Vec3::UP, 90.0),
            &Vec3::new(10.0, 0.0, 0.0),
        );

        let point = m.transform_point(&Vec3::RIGHT);

        assert!(point.approx_eq(&Vec3::new(10.0, 0.0, -1.0), APPROX_EPSILON));
    }

    #[test]
    fn mat4_from_scale() {
        let m = Mat4::from_scale(&Vec3::new(2.0, 3.0, 4.0));

        let point = m.transform_point(&Vec3::ONE);

        assert!(point.approx_eq(&Vec3::new(2.0, 3.0, 4.0), APPROX_EPSILON));
        assert_float_absolute_eq!(m.determinant(), 24.0, 1e-4);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = Mat3::with_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);

        let t = m.transpose();

        assert_float_absolute_eq!(t[0][1], 4.0, 0.0);
        assert_float_absolute_eq!(t[1][0], 2.0, 0.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn matrix_addition_and_negation() {
        let m = Mat3::from_scale(2.0);

        assert_eq!(m + m, Mat3::from_scale(4.0));
        assert_eq!(m - m, Mat3::ZERO);
        assert_eq!(-m, Mat3::from_scale(-2.0));
        assert_eq!(m * 3.0, Mat3::from_scale(6.0));
    }

    #[test]
    fn nested_array_round_trip() {
        let rows = [[1.0, 2.0], [3.0, 4.0]];

        let m = Mat2::from(rows);

        assert_float_absolute_eq!(m[1][0], 3.0, 0.0);
        assert_eq!(<[[f32; 2]; 2]>::from(m), rows);
    }
}
