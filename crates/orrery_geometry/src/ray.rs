use orrery_math::vector::{Vec2, Vec3};

/// 2D ray. The direction is a unit vector by contract; distances along the
/// ray are meaningless otherwise.
#[must_use]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray2 {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray2 {
    pub const fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    pub fn point_at(&self, distance: f32) -> Vec2 {
        self.origin + self.direction * distance
    }

    /// Projection of `point` onto the carrier line of the ray; the parameter
    /// is not clamped at the origin.
    pub fn closest_point(&self, point: &Vec2) -> Vec2 {
        self.point_at(self.direction.dot(&(*point - self.origin)))
    }
}

/// 3D ray; same unit-direction contract as [`Ray2`].
#[must_use]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray3 {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray3 {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Projection of `point` onto the carrier line of the ray; the parameter
    /// is not clamped at the origin.
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        self.point_at(self.direction.dot(&(*point - self.origin)))
    }
}
