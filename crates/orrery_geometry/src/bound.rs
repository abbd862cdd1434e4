use orrery_math::vector::{Vec2, Vec3};

use crate::error::{GeometryError, Result};

/// Axis-aligned 2D bounding rectangle.
///
/// `encapsulate_*` and `clear` mutate the receiver in place; growing one
/// instance from several threads requires external serialization, or
/// per-thread accumulation merged with [`Bound2::encapsulate_bound`].
#[must_use]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bound2 {
    /// Inverted sentinel range: encapsulating any point makes the bound that
    /// point.
    pub const EMPTY: Self = Self {
        min: Vec2::new(f32::MAX, f32::MAX),
        max: Vec2::new(f32::MIN, f32::MIN),
    };

    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Corner by bit pattern: bit 0 selects max x, bit 1 max y. Fails for
    /// indices outside `0..=3`.
    pub fn corner(&self, index: usize) -> Result<Vec2> {
        if index > 3 {
            return Err(GeometryError::CornerIndexOutOfRange { index });
        }

        Ok(Vec2::new(
            if index & 1 == 0 { self.min.x } else { self.max.x },
            if index & 2 == 0 { self.min.y } else { self.max.y },
        ))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.max + self.min) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn contains(&self, point: &Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Component-wise clamp of `point` into the bound.
    pub fn closest_point(&self, point: &Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Grows the bound to contain `point`; never shrinks.
    pub fn encapsulate_point(&mut self, point: &Vec2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Grows the bound to contain `other`; never shrinks.
    pub fn encapsulate_bound(&mut self, other: &Self) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }
}

/// Axis-aligned 3D bounding box; same in-place growth contract as [`Bound2`].
#[must_use]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bound3 {
    /// Inverted sentinel range: encapsulating any point makes the bound that
    /// point.
    pub const EMPTY: Self = Self {
        min: Vec3::new(f32::MAX, f32::MAX, f32::MAX),
        max: Vec3::new(f32::MIN, f32::MIN, f32::MIN),
    };

    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Corner by bit pattern: bit 0 selects max x, bit 1 max y, bit 2 max z.
    /// Fails for indices outside `0..=7`.
    pub fn corner(&self, index: usize) -> Result<Vec3> {
        if index > 7 {
            return Err(GeometryError::CornerIndexOutOfRange { index });
        }

        Ok(Vec3::new(
            if index & 1 == 0 { self.min.x } else { self.max.x },
            if index & 2 == 0 { self.min.y } else { self.max.y },
            if index & 4 == 0 { self.min.z } else { self.max.z },
        ))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn center(&self) -> Vec3 {
        (self.max + self.min) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn depth(&self) -> f32 {
        self.max.z - self.min.z
    }

    #[must_use]
    pub fn contains(&self, point: &Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Component-wise clamp of `point` into the bound.
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }

    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Grows the bound to contain `point`; never shrinks.
    pub fn encapsulate_point(&mut self, point: &Vec3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Grows the bound to contain `other`; never shrinks.
    pub fn encapsulate_bound(&mut self, other: &Self) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.min.z = self.min.z.min(other.min.z);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
        self.max.z = self.max.z.max(other.max.z);
    }
}
