use orrery_math::matrix::Mat2;
use orrery_math::scalar::EPSILON;
use orrery_math::vector::Vec2;

use crate::error::Result;

/// 2D line in unit-normal + signed-distance form, the planar analogue of
/// [`Plane`](crate::plane::Plane).
#[must_use]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub normal: Vec2,
    pub distance: f32,
}

impl Line {
    pub const fn new(normal: Vec2, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Line through two points; the normal is the segment direction rotated a
    /// quarter turn counter-clockwise. Fails when the points coincide.
    pub fn from_points(p1: &Vec2, p2: &Vec2) -> Result<Self> {
        let normal = ((*p2 - *p1) * Mat2::from_angle(90.0)).normalized()?;

        Ok(Self::new(normal, p1.dot(&normal)))
    }

    /// Signed distance; positive on the side the normal points toward.
    #[must_use]
    pub fn distance_to_point(&self, point: &Vec2) -> f32 {
        point.dot(&self.normal) - self.distance
    }

    /// Orthogonal projection of `point` onto the line.
    pub fn closest_point(&self, point: &Vec2) -> Vec2 {
        *point - self.normal * self.distance_to_point(point)
    }

    /// Intersection of two lines by Cramer's rule; `None` when they are
    /// parallel or nearly so (normal determinant within [`EPSILON`] of zero).
    #[must_use]
    pub fn intersection(l1: &Self, l2: &Self) -> Option<Vec2> {
        let det = l1.normal.x * l2.normal.y - l1.normal.y * l2.normal.x;

        if det.abs() < EPSILON {
            return None;
        }

        Some(Vec2::new(
            (l1.distance * l2.normal.y - l1.normal.y * l2.distance) / det,
            (l1.normal.x * l2.distance - l1.distance * l2.normal.x) / det,
        ))
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;

    #[test]
    fn from_points_rotates_the_direction_into_the_normal() {
        let line = Line::from_points(&Vec2::new(0.0, 1.0), &Vec2::new(5.0, 1.0)).unwrap();

        assert!(line.normal.approx_eq(&Vec2::UP, 1e-6));
        assert_float_absolute_eq!(line.distance, 1.0, 1e-6);
    }

    #[test]
    fn from_coincident_points_fails() {
        assert!(Line::from_points(&Vec2::new(2.0, 3.0), &Vec2::new(2.0, 3.0)).is_err());
    }

    #[test]
    fn signed_distance_and_closest_point() {
        let line = Line::new(Vec2::UP, 1.0);
        let point = Vec2::new(4.0, 3.0);

        assert_float_absolute_eq!(line.distance_to_point(&point), 2.0, 1e-6);
        assert!(line
            .closest_point(&point)
            .approx_eq(&Vec2::new(4.0, 1.0), 1e-6));
    }

    #[test]
    fn intersection_of_the_axes() {
        let horizontal = Line::new(Vec2::UP, 2.0);
        let vertical = Line::new(Vec2::RIGHT, 3.0);

        let intersection = Line::intersection(&horizontal, &vertical).unwrap();

        assert!(intersection.approx_eq(&Vec2::new(3.0, 2.0), 1e-6));
    }

    #[test]
    fn intersection_is_symmetric_in_argument_order() {
        let l1 = Line::from_points(&Vec2::new(0.0, 0.0), &Vec2::new(1.0, 1.0)).unwrap();
        let l2 = Line::from_points(&Vec2::new(1.0, 0.0), &Vec2::new(1.0, 5.0)).unwrap();

        let a = Line::intersection(&l1, &l2).unwrap();
        let b = Line::intersection(&l2, &l1).unwrap();

        assert!(a.approx_eq(&Vec2::new(1.0, 1.0), 1e-5));
        assert!(b.approx_eq(&a, 1e-5));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let l1 = Line::new(Vec2::UP, 0.0);
        let l2 = Line::new(Vec2::UP, 3.0);
        let opposed = Line::new(-Vec2::UP, 3.0);

        assert_eq!(Line::intersection(&l1, &l2), None);
        assert_eq!(Line::intersection(&l1, &opposed), None);
    }
}
