use std::ops::{ Add, Mul };

use crate::feq;

/// A color.
///
/// Represented conventionally with red-green-blue (RGB) values. Channels are
/// *not* clamped; shading is additive and routinely produces values above
/// 1.0. Clamping happens only when converting for display, via
/// [`Color::to_drawing_color`].
///
/// # Examples
///
/// Construct the color red:
///
/// ```
/// # #![allow(unused)]
/// # use ray_caster::color::Color;
/// let red = Color::red();
/// assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialOrd)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Partial equality on two colors.
///
/// Similar to the `PartialEq` implementation on `Vector`, `Color`s are
/// compared component-wise, accounting for possible floating point error in
/// comparisons.
impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        feq(self.r, other.r) &&
            feq(self.g, other.g) &&
            feq(self.b, other.b)
    }
}

/// Conversion from a vector to a `Color`.
///
/// Takes the first `n` elements of a vector, and assigns them to the `r`, `g`
/// and `b` fields of the `Color`, in that order. If there aren't enough
/// elements in the vector (e.g. `n == 2`), fields are assigned defaults in
/// place.
impl From<&Vec<f64>> for Color {
    fn from(v: &Vec<f64>) -> Color {
        match v.len() {
            0 => Default::default(),
            1 => Color { r: v[0], ..Default::default() },
            2 => Color { r: v[0], g: v[1], ..Default::default() },
            _ => Color { r: v[0], g: v[1], b: v[2] }
        }
    }
}

impl Color {
    /// Creates a color with red, green and blue values.
    pub fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b }
    }

    /// The color black.
    pub fn black() -> Color {
        Color { r: 0.0, g: 0.0, b: 0.0 }
    }

    /// The color white.
    pub fn white() -> Color {
        Color { r: 1.0, g: 1.0, b: 1.0 }
    }

    /// The color red.
    pub fn red() -> Color {
        Color { r: 1.0, g: 0.0, b: 0.0 }
    }

    /// The color grey.
    pub fn grey() -> Color {
        Color { r: 0.5, g: 0.5, b: 0.5 }
    }

    /// Scales all channels by a factor.
    pub fn scale(&self, k: f64) -> Color {
        Color {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
        }
    }

    /// The Euclidean norm of the channels.
    ///
    /// Used to pick the brightest of several specular contributions when
    /// sampling an area light.
    pub fn lightness(&self) -> f64 {
        f64::sqrt(
            self.r.powi(2)
            + self.g.powi(2)
            + self.b.powi(2)
        )
    }

    /// Converts a color to displayable bytes.
    ///
    /// Each channel is clamped to at most 1.0, scaled to 255 and floored.
    /// No lower clamp is applied; shading is additive, so negative channels
    /// only arise if a scene author supplies them.
    pub fn to_drawing_color(&self) -> [u8; 3] {
        let legalize = |d: f64| if d > 1.0 { 1.0 } else { d };

        [
            (legalize(self.r) * 255.0).floor() as u8,
            (legalize(self.g) * 255.0).floor() as u8,
            (legalize(self.b) * 255.0).floor() as u8,
        ]
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

/// Componentwise color multiplication (the Hadamard product).
impl Mul for Color {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        self.scale(other)
    }
}

/* Tests */

#[test]
fn add_colors() {
    let c1 = Color::rgb(0.9, 0.6, 0.75);
    let c2 = Color::rgb(0.7, 0.1, 0.25);

    assert_eq!(c1 + c2, Color::rgb(1.6, 0.7, 1.0));
}

#[test]
fn mul_colors() {
    let c1 = Color::rgb(1.0, 0.2, 0.4);
    let c2 = Color::rgb(0.9, 1.0, 0.1);

    assert_eq!(c1 * c2, Color::rgb(0.9, 0.2, 0.04));
}

#[test]
fn scale_color() {
    let c = Color::rgb(0.2, 0.3, 0.4);

    assert_eq!(c.scale(2.0), Color::rgb(0.4, 0.6, 0.8));
    assert_eq!(c * 2.0, Color::rgb(0.4, 0.6, 0.8));
}

#[test]
fn lightness_of_color() {
    let c = Color::rgb(1.0, 2.0, 2.0);

    assert_eq!(c.lightness(), 3.0);
}

#[test]
fn drawing_color_clamps_high() {
    let c = Color::rgb(1.5, 1.0, 0.5);

    assert_eq!(c.to_drawing_color(), [255, 255, 127]);
}

#[test]
fn drawing_color_floors() {
    let c = Color::rgb(0.5, 0.999, 0.0);

    assert_eq!(c.to_drawing_color(), [127, 254, 0]);
}

#[test]
fn color_from_vec() {
    let v = vec![0.1, 0.2];

    assert_eq!(Color::from(&v), Color::rgb(0.1, 0.2, 0.0));
}
