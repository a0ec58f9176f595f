use crate::consts::INTERSECT_EPSILON;
use crate::vector::Vector;
use crate::ray::Ray;
use crate::light::Material;

/// A renderable analytic surface.
///
/// Only one geometric capability is required of a primitive: producing the
/// ordered parametric distances at which a ray meets its surface. Shading
/// needs the surface normal at a hit point and the primitive's material.
///
/// A trait object is used because a scene mixes primitive kinds (spheres,
/// disks) in one collection.
pub trait Primitive : std::fmt::Debug {
    /// The t-values at which `ray` meets this surface.
    ///
    /// Returns zero, one or two values, where `point = origin + t * dir`.
    /// Values may be negative (surface behind the ray origin); hit selection
    /// downstream decides which, if any, to use.
    fn intersections(&self, ray: &Ray) -> Vec<f64>;

    /// The surface normal at a point assumed to lie on the surface.
    fn normal_at(&self, point: Vector) -> Vector;

    fn material(&self) -> &Material;
}

/// A sphere, defined by an origin and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub origin: Vector,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(origin: Vector, radius: f64, material: Material) -> Sphere {
        Sphere { origin, radius, material }
    }

    /// A unit sphere at the world origin with a default material.
    pub fn unit() -> Sphere {
        Sphere {
            origin: Vector::zero(),
            radius: 1.0,
            material: Default::default(),
        }
    }
}

impl Primitive for Sphere {
    /// Checks whether a ray intersects a sphere.
    ///
    /// Solves the quadratic `a*t^2 + b*t + c = 0` derived from
    /// `|origin + t*dir - center|^2 = r^2`. The `a` coefficient is the
    /// squared direction length, so a non-unit direction still yields
    /// correct t-values.
    ///
    /// A discriminant within `INTERSECT_EPSILON` of zero is treated as
    /// exactly zero, returning the single tangent root; floating error on
    /// tangent rays would otherwise produce two spurious roots. For two
    /// roots, the `+sqrt` root is returned first.
    fn intersections(&self, ray: &Ray) -> Vec<f64> {
        let sphere_to_ray = ray.origin - self.origin;

        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * ray.direction.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - self.radius.powi(2);

        let discriminant = b.powi(2) - (4.0 * a * c);

        if discriminant.abs() < INTERSECT_EPSILON {
            return vec![-b / (2.0 * a)];
        }

        if discriminant < 0.0 {
            return Vec::new();
        }

        vec![
            (-b + discriminant.sqrt()) / (2.0 * a),
            (-b - discriminant.sqrt()) / (2.0 * a),
        ]
    }

    fn normal_at(&self, point: Vector) -> Vector {
        (point - self.origin).normalize()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// A flat disk, defined by an origin, radius and a fixed unit normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Disk {
    pub origin: Vector,
    pub radius: f64,
    pub normal: Vector,
    pub material: Material,
}

impl Disk {
    pub fn new(origin: Vector, radius: f64, normal: Vector,
        material: Material) -> Disk {
        Disk { origin, radius, normal, material }
    }
}

impl Primitive for Disk {
    /// Checks whether a ray intersects a disk.
    ///
    /// The disk's infinite plane is tested first: rays near-parallel to the
    /// plane (denominator below `INTERSECT_EPSILON`) and plane hits behind
    /// the ray origin are rejected. The plane hit then counts only if it
    /// lies within `radius` of the disk origin. Disks never yield two hits.
    fn intersections(&self, ray: &Ray) -> Vec<f64> {
        let denom = self.normal.dot(&ray.direction);
        if denom.abs() < INTERSECT_EPSILON {
            return Vec::new();
        }

        let to_plane = self.origin - ray.origin;
        let t = to_plane.dot(&self.normal) / denom;
        if t < 0.0 {
            return Vec::new();
        }

        let hit = ray.position(t);
        if (hit - self.origin).magnitude() <= self.radius {
            vec![t]
        } else {
            Vec::new()
        }
    }

    fn normal_at(&self, _point: Vector) -> Vector {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/* Tests */

#[cfg(test)]
fn z_axis_ray() -> Ray {
    Ray::new(Vector::new(0.0, 0.0, 5.0), Vector::new(0.0, 0.0, -1.0))
}

#[test]
fn sphere_two_roots() {
    use crate::feq;

    let s = Sphere::unit();
    let ts = s.intersections(&z_axis_ray());

    // The +sqrt root (the far surface) comes first.
    assert_eq!(ts.len(), 2);
    assert!(feq(ts[0], 6.0));
    assert!(feq(ts[1], 4.0));
}

#[test]
fn sphere_tangent_ray() {
    let s = Sphere::unit();
    let r = Ray::new(Vector::new(1.0, 0.0, 5.0), Vector::new(0.0, 0.0, -1.0));
    let ts = s.intersections(&r);

    assert_eq!(ts.len(), 1);
    assert!(crate::feq(ts[0], 5.0));
}

#[test]
fn sphere_miss() {
    let s = Sphere::unit();
    let r = Ray::new(Vector::new(0.0, 2.0, 5.0), Vector::new(0.0, 0.0, -1.0));

    assert!(s.intersections(&r).is_empty());
}

#[test]
fn sphere_ray_origin_inside() {
    let s = Sphere::unit();
    let r = Ray::new(Vector::zero(), Vector::new(0.0, 0.0, -1.0));
    let ts = s.intersections(&r);

    assert_eq!(ts.len(), 2);
    assert!(ts[0] > 0.0);
    assert!(ts[1] < 0.0);
}

#[test]
fn sphere_non_unit_direction() {
    use crate::feq;

    // Doubling the direction length halves the roots.
    let s = Sphere::unit();
    let r = Ray::new(Vector::new(0.0, 0.0, 5.0), Vector::new(0.0, 0.0, -2.0));
    let ts = s.intersections(&r);

    assert_eq!(ts.len(), 2);
    assert!(feq(ts[0], 3.0));
    assert!(feq(ts[1], 2.0));
}

#[test]
fn sphere_normal() {
    let s = Sphere::new(Vector::new(0.0, 1.0, 0.0), 2.0, Default::default());

    assert_eq!(s.normal_at(Vector::new(0.0, 3.0, 0.0)),
        Vector::new(0.0, 1.0, 0.0));
}

#[test]
fn disk_head_on_hit() {
    let d = Disk::new(Vector::zero(), 2.0, Vector::new(0.0, 0.0, 1.0),
        Default::default());
    let ts = d.intersections(&z_axis_ray());

    assert_eq!(ts.len(), 1);
    assert!(crate::feq(ts[0], 5.0));
    assert_eq!(z_axis_ray().position(ts[0]), Vector::zero());
}

#[test]
fn disk_miss_outside_radius() {
    let d = Disk::new(Vector::zero(), 2.0, Vector::new(0.0, 0.0, 1.0),
        Default::default());
    let r = Ray::new(Vector::new(3.0, 0.0, 5.0), Vector::new(0.0, 0.0, -1.0));

    assert!(d.intersections(&r).is_empty());
}

#[test]
fn disk_parallel_ray() {
    let d = Disk::new(Vector::zero(), 2.0, Vector::new(0.0, 0.0, 1.0),
        Default::default());
    let r = Ray::new(Vector::new(0.0, 0.0, 5.0), Vector::new(1.0, 0.0, 0.0));

    assert!(d.intersections(&r).is_empty());
}

#[test]
fn disk_behind_ray() {
    let d = Disk::new(Vector::zero(), 2.0, Vector::new(0.0, 0.0, 1.0),
        Default::default());
    let r = Ray::new(Vector::new(0.0, 0.0, 5.0), Vector::new(0.0, 0.0, 1.0));

    assert!(d.intersections(&r).is_empty());
}
