use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MathError, Result};
use crate::quaternion::Quat;
use crate::scalar::{self, EPSILON};

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, $array:ty, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $(pub $dim: f32,)*
        }

        impl $name {
            pub const ZERO: Self = Self { $($dim: 0.0,)* };
            pub const ONE: Self = Self { $($dim: 1.0,)* };

            pub const fn new($($dim: f32),*) -> Self {
                Self {
                    $($dim),*
                }
            }

            #[must_use]
            pub fn dot(&self, other: &Self) -> f32 {
                let mut dot = 0.0;
                $(dot += self.$dim * other.$dim;)*
                dot
            }

            #[must_use]
            pub fn magnitude(&self) -> f32 {
                self.squared_magnitude().sqrt()
            }

            #[must_use]
            pub fn squared_magnitude(&self) -> f32 {
                self.dot(self)
            }

            /// Fails with [`MathError::DegenerateLength`] when the magnitude
            /// is below [`EPSILON`]; a near-zero vector has no direction.
            pub fn normalized(&self) -> Result<Self> {
                let magnitude = self.magnitude();
                if magnitude < EPSILON {
                    return Err(MathError::DegenerateLength);
                }
                Ok(*self / magnitude)
            }

            #[must_use]
            pub fn distance(&self, other: &Self) -> f32 {
                (*self - *other).magnitude()
            }

            /// Linear interpolation with `t` clamped to `[0, 1]`.
            pub fn lerp(&self, other: &Self, t: f32) -> Self {
                let t = t.clamp(0.0, 1.0);
                *self + (*other - *self) * t
            }

            pub fn clamp_magnitude(&self, max_length: f32) -> Self {
                let squared = self.squared_magnitude();
                if squared > max_length * max_length {
                    *self * (max_length / squared.sqrt())
                } else {
                    *self
                }
            }

            #[must_use]
            pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(scalar::approx_eq(self.$dim, other.$dim, epsilon) &&)* true
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
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
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;

            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }

        impl MulAssign<f32> for $name {
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl Div<f32> for $name {
            type Output = Self;

            fn div(self, rhs: f32) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl DivAssign<f32> for $name {
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl From<($($TY),*)> for $name {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl From<$name> for ($($TY),*) {
            fn from(vector: $name) -> Self {
                ($(vector.$dim),*)
            }
        }

        impl From<$array> for $name {
            fn from(array: $array) -> Self {
                Self {
                    $($dim: array[$idx],)*
                }
            }
        }

        impl From<$name> for $array {
            fn from(vector: $name) -> Self {
                [$(vector.$dim),*]
            }
        }
    };
}

struct_vec!(Vec2: "({}, {})", [f32; 2], (x: f32 => 0, y: f32 => 1,));
struct_vec!(Vec3: "({}, {}, {})", [f32; 3], (x: f32 => 0, y: f32 => 1, z: f32 => 2,));
struct_vec!(Vec4: "({}, {}, {}, {})", [f32; 4], (x: f32 => 0, y: f32 => 1, z: f32 => 2, w: f32 => 3,));

impl Vec2 {
    pub const UP: Self = Self::new(0.0, 1.0);
    pub const DOWN: Self = Self::new(0.0, -1.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// 2D cross product; the z component of the 3D cross of the embedded
    /// vectors.
    #[must_use]
    pub fn perp_dot(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Unsigned angle between the directions of the two vectors, in degrees.
    #[must_use]
    pub fn angle_between(&self, other: &Self) -> f32 {
        let dot = match (self.normalized(), other.normalized()) {
            (Ok(a), Ok(b)) => a.dot(&b),
            _ => 1.0,
        };
        dot.clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Mirrors the vector off a surface with the given unit normal.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// Point on the unit circle at `angle` degrees from the +x axis.
    pub fn from_polar_angle(angle: f32) -> Self {
        let rad = angle.to_radians();
        Self::new(rad.cos(), rad.sin())
    }

    /// Angle of the vector from the +x axis, in degrees.
    #[must_use]
    pub fn polar_angle(&self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Explicit widening; the z component must be provided.
    pub fn extend(&self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl Vec3 {
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        )
    }

    /// Unsigned angle between the directions of the two vectors, in degrees.
    #[must_use]
    pub fn angle_between(&self, other: &Self) -> f32 {
        let dot = match (self.normalized(), other.normalized()) {
            (Ok(a), Ok(b)) => a.dot(&b),
            _ => 1.0,
        };
        dot.clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Mirrors the vector off a surface with the given unit normal.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// Component of the vector along the given unit normal.
    pub fn project_onto(&self, normal: &Self) -> Self {
        *normal * self.dot(normal)
    }

    /// Component of the vector perpendicular to the given unit normal.
    pub fn reject_from(&self, normal: &Self) -> Self {
        *self - self.project_onto(normal)
    }

    /// Point on the unit sphere at the given latitude/longitude, in degrees.
    pub fn from_spherical(latitude: f32, longitude: f32) -> Self {
        let (lat, long) = (latitude.to_radians(), longitude.to_radians());
        Self::new(lat.sin() * long.cos(), long.sin(), lat.cos() * long.cos())
    }

    /// Latitude/longitude of the direction of the vector, in degrees.
    #[must_use]
    pub fn to_spherical(&self) -> (f32, f32) {
        let v = self.normalized().unwrap_or(Self::FORWARD);
        (
            v.x.atan2(v.z).to_degrees(),
            v.y.clamp(-1.0, 1.0).asin().to_degrees(),
        )
    }

    /// Rotates the vector around `axis` (unit length) by `angle` degrees.
    pub fn rotate_around(&self, axis: &Self, angle: f32) -> Self {
        *self * Quat::from_axis_angle(axis, angle)
    }

    /// Explicit narrowing; the z component is dropped.
    pub fn truncate(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Explicit widening; the w component must be provided.
    pub fn extend(&self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl Vec4 {
    /// Explicit narrowing; the w component is dropped.
    pub fn truncate(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}
