//! Planes and axis-aligned boxes.  Everything here is plain `Copy` data and
//! pure functions; no allocation beyond the corner arrays.

use cgmath::{InnerSpace, Matrix4, Point3, Transform, Vector3, Zero};

/// Plane `dot(n, p) + d = 0`.  Points with a positive signed distance lie on
/// the side the normal points to (the "inside" for frustum planes).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub n: Vector3<f32>, // normal, unit length once normalized
    pub d: f32,          // distance term
}

impl Plane {
    pub fn new(n: Vector3<f32>, d: f32) -> Self {
        Self { n, d }
    }

    /// Builds a plane from packed `[a, b, c, d]` coefficients.
    pub fn from_coefficients(c: [f32; 4]) -> Self {
        Self { n: Vector3::new(c[0], c[1], c[2]), d: c[3] }
    }

    #[inline]
    pub fn signed_distance(&self, p: Vector3<f32>) -> f32 {
        self.n.dot(p) + self.d
    }

    /// Scales the plane so that `|n| == 1`.  A zero-length normal has no
    /// direction to scale to, so the plane comes back untouched.
    pub fn normalized(mut self) -> Self {
        let len = self.n.magnitude();
        if len == 0.0 {
            return self;
        }
        self.n /= len;
        self.d /= len;
        self
    }
}

#[inline]
pub fn min_vec(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

#[inline]
pub fn max_vec(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

/// Axis-aligned bounding box, `min <= max` on every axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Zero-sized box sitting on the origin.
    pub fn point() -> Self {
        Self { min: Vector3::zero(), max: Vector3::zero() }
    }

    /// Tightest box enclosing `vertices`.  No vertices gives [`Aabb::point`].
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Vector3<f32>>,
    {
        let mut iter = vertices.into_iter();
        let first = match iter.next() {
            Some(v) => v,
            None => return Self::point(),
        };

        iter.fold(Self { min: first, max: first }, |acc, v| Self {
            min: min_vec(acc.min, v),
            max: max_vec(acc.max, v),
        })
    }

    /// The eight corners, bit `i` of the index selecting `max` on axis `i`.
    pub fn corners(&self) -> [Vector3<f32>; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vector3::new(lo.x, lo.y, lo.z),
            Vector3::new(hi.x, lo.y, lo.z),
            Vector3::new(lo.x, hi.y, lo.z),
            Vector3::new(hi.x, hi.y, lo.z),
            Vector3::new(lo.x, lo.y, hi.z),
            Vector3::new(hi.x, lo.y, hi.z),
            Vector3::new(lo.x, hi.y, hi.z),
            Vector3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Transforms all eight corners and re-encloses them.
    ///
    /// Exact for translation and axis-aligned scale.  Under rotation the
    /// result is a conservative box around the rotated one, never an
    /// oriented box.
    pub fn transformed(&self, transform: &Matrix4<f32>) -> Self {
        let moved = self
            .corners()
            .map(|c| transform.transform_point(Point3::new(c.x, c.y, c.z)))
            .map(|p| Vector3::new(p.x, p.y, p.z));
        Self::from_vertices(moved)
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    pub fn contains_point(&self, p: Vector3<f32>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}
