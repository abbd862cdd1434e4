use orrery_math::vector::Vec3;

use crate::error::{GeometryError, Result};

/// Plane in unit-normal + signed-distance form: the set of points `p` with
/// `dot(p, normal) == distance`.
///
/// The normal is a unit vector by contract; behavior is undefined until it is
/// normalized, the type does not enforce it.
#[must_use]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through three points, facing the side from which the points
    /// wind counter-clockwise. Fails when the points are collinear or
    /// coincident.
    pub fn from_three_points(p1: &Vec3, p2: &Vec3, p3: &Vec3) -> Result<Self> {
        let normal = (*p2 - *p1).cross(&(*p3 - *p2)).normalized()?;

        Ok(Self::new(normal, p1.dot(&normal)))
    }

    /// Best-fit plane of a polygon via Newell's method, weighting each edge
    /// so nearly collinear vertices do not dominate the normal. Orientation
    /// matches [`Plane::from_three_points`] for counter-clockwise winding.
    pub fn best_fit(points: &[Vec3]) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::DegeneratePolygon);
        }

        let mut accumulated = Vec3::ZERO;
        let mut previous = points[points.len() - 1];
        for point in points {
            accumulated.x += (previous.y - point.y) * (previous.z + point.z);
            accumulated.y += (previous.z - point.z) * (previous.x + point.x);
            accumulated.z += (previous.x - point.x) * (previous.y + point.y);
            previous = *point;
        }

        let normal = accumulated.normalized()?;
        Ok(Self::new(normal, points[0].dot(&normal)))
    }

    /// Same plane facing the other way.
    pub fn flipped(&self) -> Self {
        Self::new(-self.normal, -self.distance)
    }

    /// Signed distance; positive on the side the normal points toward.
    #[must_use]
    pub fn distance_to_point(&self, point: &Vec3) -> f32 {
        point.dot(&self.normal) - self.distance
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        *point - self.normal * self.distance_to_point(point)
    }

    /// True when `point` lies strictly on the side the normal points toward.
    #[must_use]
    pub fn side(&self, point: &Vec3) -> bool {
        self.distance_to_point(point) > 0.0
    }

    /// True when both points lie in the same closed half-space.
    #[must_use]
    pub fn same_side(&self, p1: &Vec3, p2: &Vec3) -> bool {
        let d1 = self.distance_to_point(p1);
        let d2 = self.distance_to_point(p2);

        (d1 >= 0.0 && d2 >= 0.0) || (d1 < 0.0 && d2 < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use orrery_math::error::MathError;

    use super::*;

    fn ground_plane() -> Plane {
        Plane::new(Vec3::UP, 2.0)
    }

    #[test]
    fn from_three_points_faces_the_winding_side() {
        let plane = Plane::from_three_points(
            &Vec3::new(0.0, 2.0, 0.0),
            &Vec3::new(1.0, 2.0, 0.0),
            &Vec3::new(0.0, 2.0, -1.0),
        )
        .unwrap();

        assert!(plane.normal.approx_eq(&Vec3::UP, 1e-6));
        assert_float_absolute_eq!(plane.distance, 2.0, 1e-6);
    }

    #[test]
    fn from_collinear_points_fails() {
        let result = Plane::from_three_points(
            &Vec3::new(0.0, 0.0, 0.0),
            &Vec3::new(1.0, 0.0, 0.0),
            &Vec3::new(2.0, 0.0, 0.0),
        );

        assert_eq!(result, Err(GeometryError::Math(MathError::DegenerateLength)));
    }

    #[test]
    fn best_fit_matches_the_triangle_plane() {
        let points = [
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, -1.0),
        ];

        let plane = Plane::best_fit(&points).unwrap();
        let triangle = Plane::from_three_points(&points[0], &points[1], &points[2]).unwrap();

        assert!(plane.normal.approx_eq(&triangle.normal, 1e-6));
        assert_float_absolute_eq!(plane.distance, triangle.distance, 1e-6);
    }

    #[test]
    fn best_fit_of_a_noisy_quad_stays_near_the_plane() {
        let points = [
            Vec3::new(0.0, 0.01, 0.0),
            Vec3::new(1.0, -0.01, 0.0),
            Vec3::new(1.0, 0.01, -1.0),
            Vec3::new(0.0, -0.01, -1.0),
        ];

        let plane = Plane::best_fit(&points).unwrap();

        assert_float_absolute_eq!(plane.normal.dot(&Vec3::UP).abs(), 1.0, 1e-3);
    }

    #[test]
    fn best_fit_needs_three_points() {
        let points = [Vec3::ZERO, Vec3::UP];

        assert_eq!(
            Plane::best_fit(&points),
            Err(GeometryError::DegeneratePolygon)
        );
    }

    #[test]
    fn signed_distance_and_closest_point() {
        let plane = ground_plane();
        let point = Vec3::new(3.0, 5.0, -1.0);

        assert_float_absolute_eq!(plane.distance_to_point(&point), 3.0, 1e-6);
        assert!(plane
            .closest_point(&point)
            .approx_eq(&Vec3::new(3.0, 2.0, -1.0), 1e-6));
    }

    #[test]
    fn side_tests() {
        let plane = ground_plane();
        let above = Vec3::new(0.0, 5.0, 0.0);
        let below = Vec3::new(0.0, -5.0, 0.0);

        assert!(plane.side(&above));
        assert!(!plane.side(&below));
        assert!(!plane.same_side(&above, &below));
        assert!(plane.same_side(&above, &Vec3::new(9.0, 3.0, 1.0)));

        let flipped = plane.flipped();
        assert!(flipped.side(&below));
        assert_float_absolute_eq!(
            flipped.distance_to_point(&above),
            -plane.distance_to_point(&above),
            1e-6
        );
    }
}
