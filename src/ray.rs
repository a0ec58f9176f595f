use crate::vector::Vector;

/// A ray.
///
/// Direction normalization is the caller's responsibility. The sphere
/// intersection quadratic is direction-length-aware, but every other
/// consumer assumes `direction` has unit length.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray {
    pub origin: Vector,
    pub direction: Vector,
}

impl Ray {
    pub fn new(origin: Vector, direction: Vector) -> Ray {
        Ray { origin, direction }
    }

    /// The point along the ray at parameter `t`.
    pub fn position(&self, t: f64) -> Vector {
        self.origin + (t * self.direction)
    }
}

#[test]
fn ray_position() {
    let r = Ray::new(
                Vector::new(2.0, 3.0, 4.0),
                Vector::new(1.0, 0.0, 0.0)
            );

    assert_eq!(r.position(0.0), Vector::new(2.0, 3.0, 4.0));
    assert_eq!(r.position(1.0), Vector::new(3.0, 3.0, 4.0));
    assert_eq!(r.position(-1.0), Vector::new(1.0, 3.0, 4.0));
    assert_eq!(r.position(2.5), Vector::new(4.5, 3.0, 4.0));
}
