use std::ops::{ Add, Sub, Neg, Mul };

use crate::feq;

/// A 3D vector, doubling as a point in space.
///
/// Operations are pure; each returns a new `Vector` and leaves its operands
/// untouched.
#[derive(Debug, Default, Copy, Clone, PartialOrd)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        feq(self.x, other.x) &&
            feq(self.y, other.y) &&
            feq(self.z, other.z)
    }
}

/// Conversion from a vector of floats to a `Vector`.
///
/// Mirrors the `Color` conversion: the first three elements become `x`, `y`
/// and `z`, with missing elements defaulting to zero. Used when reading
/// scene descriptions.
impl From<&Vec<f64>> for Vector {
    fn from(v: &Vec<f64>) -> Vector {
        match v.len() {
            0 => Default::default(),
            1 => Vector { x: v[0], ..Default::default() },
            2 => Vector { x: v[0], y: v[1], ..Default::default() },
            _ => Vector { x: v[0], y: v[1], z: v[2] }
        }
    }
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Vector {
        Vector { x, y, z }
    }

    pub fn zero() -> Vector {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    pub fn magnitude(&self) -> f64 {
        f64::sqrt(
            self.x.powi(2)
            + self.y.powi(2)
            + self.z.powi(2)
        )
    }

    /// Scales a vector to unit length.
    ///
    /// A zero-length vector has no direction; rather than dividing by zero,
    /// its components are scaled by `f64::INFINITY`. The result has
    /// non-finite components, which downstream intersection tests discard.
    pub fn normalize(&self) -> Vector {
        let mag = self.magnitude();
        let div = if mag == 0.0 { f64::INFINITY } else { 1.0 / mag };

        Vector {
            x: self.x * div,
            y: self.y * div,
            z: self.z * div,
        }
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x
            + self.y * other.y
            + self.z * other.z
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Reflects a vector across a normal.
    pub fn reflect(&self, normal: &Vector) -> Vector {
        *self - (*normal * 2.0 * self.dot(normal))
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

/// Implements scalar right-multiplication for a vector.
///
/// Effectively, this looks like the following:
///
/// ```
/// use ray_caster::vector::Vector;
///
/// let v = Vector::new(1.0, 2.0, 3.0);
/// let s = 5.0;
///
/// // (notice how the scalar is on the right)
/// assert_eq!(v * s, Vector::new(5.0, 10.0, 15.0));
/// ```
impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

/// Implements scalar left-multiplication for a vector.
///
/// Effectively, this looks like the following:
///
/// ```rust
/// use ray_caster::vector::Vector;
///
/// let v = Vector::new(1.0, 2.0, 3.0);
/// let s = 5.0;
///
/// // (notice how the scalar is on the left)
/// assert_eq!(s * v, Vector::new(5.0, 10.0, 15.0));
/// ```
impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, other: Vector) -> Vector {
        Vector {
            x: self * other.x,
            y: self * other.y,
            z: self * other.z,
        }
    }
}

/* Tests */

#[test]
fn add_vectors() {
    let a1 = Vector::new(3.0, -2.0, 5.0);
    let a2 = Vector::new(-2.0, 3.0, 1.0);

    assert_eq!(a1 + a2, Vector::new(1.0, 1.0, 6.0));
}

#[test]
fn sub_vectors() {
    let p1 = Vector::new(3.0, 2.0, 1.0);
    let p2 = Vector::new(5.0, 6.0, 7.0);

    assert_eq!(p1 - p2, Vector::new(-2.0, -4.0, -6.0));
}

#[test]
fn neg_vector() {
    let a = Vector::new(1.0, -2.0, 3.0);

    assert_eq!(-a, Vector::new(-1.0, 2.0, -3.0));
}

#[test]
fn mul_scalar() {
    let a = Vector::new(1.0, -2.0, 3.0);

    assert_eq!(a * 3.5, Vector::new(3.5, -7.0, 10.5));
}

#[test]
fn magnitude_pos() {
    let v = Vector::new(1.0, 2.0, 3.0);

    assert_eq!(v.magnitude(), f64::sqrt(14.0));
}

#[test]
fn magnitude_neg() {
    let v = Vector::new(-1.0, -2.0, -3.0);

    assert_eq!(v.magnitude(), f64::sqrt(14.0));
}

#[test]
fn normalize_clean() {
    let v = Vector::new(4.0, 0.0, 0.0);

    assert_eq!(v.normalize(), Vector::new(1.0, 0.0, 0.0));
}

#[test]
fn normalize_dirty() {
    let v = Vector::new(1.0, 2.0, 3.0);
    let e = Vector::new(
        1.0 / f64::sqrt(14.0),
        2.0 / f64::sqrt(14.0),
        3.0 / f64::sqrt(14.0)
    );

    assert_eq!(v.normalize(), e);
}

#[test]
fn normalize_zero_vector() {
    let v = Vector::zero();
    let n = v.normalize();

    // Zero times infinity is NaN; the point is that nothing panics and the
    // result is recognizably degenerate.
    assert!(!n.x.is_finite());
    assert!(!n.y.is_finite());
    assert!(!n.z.is_finite());
}

#[test]
fn dot_vectors() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(2.0, 3.0, 4.0);

    assert_eq!(a.dot(&b), 20.0);
}

#[test]
fn cross_vectors() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(2.0, 3.0, 4.0);

    let c = Vector::new(-1.0, 2.0, -1.0);
    let d = Vector::new(1.0, -2.0, 1.0);

    assert_eq!(a.cross(&b), c);
    assert_eq!(b.cross(&a), d);
}

#[test]
fn reflect_45() {
    let v = Vector::new(1.0, -1.0, 0.0);
    let n = Vector::new(0.0, 1.0, 0.0);
    let r = v.reflect(&n);

    assert_eq!(r, Vector::new(1.0, 1.0, 0.0));
}
