use crate::ray::Ray;
use crate::vector::Vector;
use crate::sampler::Sample;

/// A camera record for generating eye rays.
///
/// The camera derives an orthonormal basis from its pose once, at
/// construction: `w` points from the look-at point back toward the eye,
/// `u` spans the screen's horizontal axis and `v` its vertical axis. Eye
/// rays are linear combinations of this basis.
///
/// The up hint must not be parallel to the view axis; the basis is
/// degenerate otherwise.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Camera {
    /// The horizontal size of the sample grid, in pixels.
    pub hsize: usize,

    /// The vertical size of the sample grid, in pixels.
    pub vsize: usize,

    /// The vertical viewing angle, in radians.
    pub field_of_view: f64,

    /// The eye position, used as the origin of every eye ray.
    pub eye: Vector,

    pub u: Vector,
    pub v: Vector,
    pub w: Vector,
}

impl Camera {
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64,
        from: Vector, to: Vector, up: Vector) -> Camera {
        let w = (from - to).normalize();
        let u = w.cross(&up).normalize();
        let v = w.cross(&u);

        Camera {
            hsize,
            vsize,
            field_of_view,
            eye: from,
            u,
            v,
            w,
        }
    }

    /// The eye ray through the center of pixel `(px, py)`.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        self.ray_for_offset(px as f64 + 0.5, py as f64 + 0.5)
    }

    /// The eye ray through pixel `(px, py)`, displaced by a sub-pixel
    /// sample.
    ///
    /// Sample components span [-1, 1] and a displacement covers at most
    /// half a pixel each way, so a pixel's distribution tiles exactly the
    /// pixel's own footprint.
    pub fn ray_for_sample(&self, px: usize, py: usize, sample: Sample)
        -> Ray {
        self.ray_for_offset(
            px as f64 + 0.5 + sample.s / 2.0,
            py as f64 + 0.5 + sample.t / 2.0,
        )
    }

    /// Builds the eye ray for fractional screen coordinates.
    ///
    /// Screen coordinates map to normalized device coordinates, scaled
    /// horizontally by the aspect ratio, then into world space along the
    /// camera basis at focal distance `1 / tan(fov / 2)`. Since `w` points
    /// backward, the forward term is `-d * w`.
    fn ray_for_offset(&self, x: f64, y: f64) -> Ray {
        let d = 1.0 / (self.field_of_view / 2.0).tan();
        let aspect = (self.hsize as f64) / (self.vsize as f64);

        let us = (-1.0 + 2.0 * x / (self.hsize as f64)) * aspect;
        let vs = -1.0 + 2.0 * y / (self.vsize as f64);

        let direction
            = ((self.w * -d) + (self.u * us) + (self.v * vs)).normalize();

        Ray::new(self.eye, direction)
    }
}

/* Tests */

#[cfg(test)]
fn canonical_camera(hsize: usize, vsize: usize) -> Camera {
    // Eye at the origin looking down -z, +y up, 90 degree fov.
    Camera::new(hsize, vsize, std::f64::consts::PI / 2.0,
        Vector::zero(),
        Vector::new(0.0, 0.0, -1.0),
        Vector::new(0.0, 1.0, 0.0))
}

#[test]
fn basis_is_orthonormal() {
    let c = Camera::new(100, 100, std::f64::consts::PI / 3.0,
        Vector::new(1.0, 2.0, 3.0),
        Vector::new(4.0, -2.0, 8.0),
        Vector::new(0.0, 1.0, 0.0));

    assert!(crate::feq(c.u.magnitude(), 1.0));
    assert!(crate::feq(c.v.magnitude(), 1.0));
    assert!(crate::feq(c.w.magnitude(), 1.0));
    assert!(crate::feq(c.u.dot(&c.v), 0.0));
    assert!(crate::feq(c.u.dot(&c.w), 0.0));
    assert!(crate::feq(c.v.dot(&c.w), 0.0));
}

#[test]
fn canonical_basis() {
    let c = canonical_camera(100, 100);

    assert_eq!(c.w, Vector::new(0.0, 0.0, 1.0));
    assert_eq!(c.u, Vector::new(-1.0, 0.0, 0.0));
    assert_eq!(c.v, Vector::new(0.0, -1.0, 0.0));
}

#[test]
fn ray_through_center() {
    let c = canonical_camera(201, 201);
    let r = c.ray_for_pixel(100, 100);

    assert_eq!(r.origin, Vector::zero());
    assert_eq!(r.direction, Vector::new(0.0, 0.0, -1.0));
}

#[test]
fn ray_through_screen_edge() {
    // At 90 degrees fov the screen edge sits 45 degrees off axis.
    let c = canonical_camera(200, 200);
    let r = c.ray_for_sample(199, 99, Sample { s: 1.0, t: 1.0 });

    let half_sqrt_2 = 2.0f64.sqrt() / 2.0;
    assert_eq!(r.direction, Vector::new(-half_sqrt_2, 0.0, -half_sqrt_2));
}

#[test]
fn sample_offset_shifts_ray() {
    let c = canonical_camera(100, 100);
    let centered = c.ray_for_sample(50, 50, Sample { s: 0.0, t: 0.0 });
    let shifted = c.ray_for_sample(50, 50, Sample { s: 0.5, t: -0.5 });

    assert_eq!(centered, c.ray_for_pixel(50, 50));
    assert!(centered.direction != shifted.direction);
}
