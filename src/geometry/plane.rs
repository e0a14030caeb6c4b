use approx::{AbsDiffEq, RelativeEq};

use crate::error::{GeometryError, Result};
use crate::math::{scalar, Vector3};

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Negative side (opposite the normal).
    Behind,
    /// On the plane (within tolerance).
    On,
    /// Positive side (in the direction of the normal).
    Front,
}

/// An oriented plane (half-space boundary) in 3D, stored in Hessian form:
/// a point `P` lies on the plane iff `normal · P == distance`.
///
/// A unit-length `normal` is a construction convention, not a type-enforced
/// invariant: [`Plane::from_points`] normalizes, while [`Plane::new`] and
/// [`Plane::from_normal_point`] trust the caller. A non-unit normal still
/// defines a valid half-space, but [`Plane::distance_to`] then returns
/// scaled values rather than true Euclidean distances.
///
/// Like the vector types, exact equality (derived `PartialEq`) and
/// [`Plane::is_equal_approx`] are distinct operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    distance: f64,
}

impl Plane {
    /// Creates a plane from a normal and a signed distance from the origin.
    ///
    /// The normal is taken as-is; see the unit-length convention on
    /// [`Plane`].
    #[must_use]
    pub const fn new(normal: Vector3, distance: f64) -> Self {
        Self { normal, distance }
    }

    /// Creates a plane from a normal and a point on the plane.
    ///
    /// The distance is `normal · point`. The normal is taken as-is; see the
    /// unit-length convention on [`Plane`].
    #[must_use]
    pub fn from_normal_point(normal: Vector3, point: Vector3) -> Self {
        Self {
            normal,
            distance: normal.dot(point),
        }
    }

    /// Creates a plane through three points.
    ///
    /// The normal is `(p2 - p1) × (p3 - p1)`, normalized, so its orientation
    /// follows the right-hand rule over the ordered triple.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points are collinear or
    /// coincident (the cross product has zero length).
    #[allow(clippy::float_cmp)]
    pub fn from_points(p1: Vector3, p2: Vector3, p3: Vector3) -> Result<Self> {
        let cross = (p2 - p1).cross(p3 - p1);
        let len = cross.length();
        if len == 0.0 {
            return Err(GeometryError::Degenerate(
                "plane points are collinear".into(),
            ));
        }

        let normal = cross / len;
        Ok(Self {
            normal,
            distance: normal.dot(p1),
        })
    }

    /// Returns the plane normal.
    #[must_use]
    pub const fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Returns the signed distance of the plane from the origin.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Tests whether the plane is approximately equal to `other`:
    /// normals and distances both within tolerance.
    #[must_use]
    pub fn is_equal_approx(&self, other: &Self) -> bool {
        self.normal.is_equal_approx(other.normal)
            && scalar::is_equal_approx(self.distance, other.distance)
    }

    /// Returns the signed distance from the plane to `point`.
    ///
    /// Positive in front of the plane (the side the normal points toward),
    /// negative behind, zero on the plane. Euclidean only for a unit normal.
    #[must_use]
    pub fn distance_to(&self, point: Vector3) -> f64 {
        self.normal.dot(point) - self.distance
    }

    /// Classifies which side of the plane `point` lies on.
    ///
    /// Points within the [`scalar::sign`] epsilon band of the plane
    /// classify as [`Side::On`].
    #[must_use]
    pub fn side(&self, point: Vector3) -> Side {
        match scalar::sign(self.distance_to(point)) {
            -1 => Side::Behind,
            0 => Side::On,
            _ => Side::Front,
        }
    }

    /// Orthogonally projects `point` onto the plane.
    #[must_use]
    pub fn project(&self, point: Vector3) -> Vector3 {
        point - self.normal * self.distance_to(point)
    }

    /// Intersects the ray `origin + t * direction` with the plane.
    ///
    /// Returns `None` when the ray is parallel to the plane, or when the
    /// intersection lies at or behind the ray origin. The threshold on the
    /// ray parameter is epsilon rather than zero, so a ray starting exactly
    /// on the plane and pointing away does not self-intersect.
    #[must_use]
    pub fn intersect_ray(&self, origin: Vector3, direction: Vector3) -> Option<Vector3> {
        let den = self.normal.dot(direction);
        if scalar::is_zero_approx(den) {
            return None;
        }

        let t = (self.distance - self.normal.dot(origin)) / den;
        if t < f64::EPSILON {
            return None;
        }

        Some(origin + direction * t)
    }

    /// Intersects the segment from `p1` to `p2` with the plane.
    ///
    /// Returns `None` when both endpoints classify to the same side
    /// ([`scalar::sign`] of their signed distances). An endpoint inside the
    /// on-plane band paired with a strictly off-plane endpoint counts as a
    /// crossing.
    #[must_use]
    pub fn intersect_segment(&self, p1: Vector3, p2: Vector3) -> Option<Vector3> {
        let d1 = self.distance_to(p1);
        let d2 = self.distance_to(p2);

        if scalar::sign(d1) == scalar::sign(d2) {
            return None;
        }

        let t = d1 / (d1 - d2);
        Some(p1.lerp(p2, t))
    }
}

impl AbsDiffEq for Plane {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.distance.abs_diff_eq(&other.distance, epsilon)
    }
}

impl RelativeEq for Plane {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.distance.relative_eq(&other.distance, epsilon, max_relative)
    }
}
