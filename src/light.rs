use crate::color::Color;
use crate::vector::Vector;

/// A point light.
///
/// A very simple light source. Provides a color and a position where light is
/// produced from.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub position: Vector,
}

impl PointLight {
    /// Creates a point light.
    pub fn new(color: Color, position: Vector) -> PointLight {
        PointLight { color, position }
    }
}

/// The global ambient light term.
///
/// A single view- and position-independent color applied uniformly to every
/// surface. A scene holds exactly one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
}

impl AmbientLight {
    pub fn new(color: Color) -> AmbientLight {
        AmbientLight { color }
    }
}

/// An area light.
///
/// A planar patch of light: `position` is the patch origin and `u`, `v` are
/// its edge vectors. Sample offsets `(s, t)` in [-1, 1] address the point
/// `position + s*u + t*v`, so the patch is sampled stochastically to
/// approximate soft shadows and extended highlights.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AreaLight {
    pub color: Color,
    pub position: Vector,
    pub u: Vector,
    pub v: Vector,
}

impl AreaLight {
    pub fn new(color: Color, position: Vector, u: Vector, v: Vector)
        -> AreaLight {
        AreaLight { color, position, u, v }
    }

    /// The point on the light's patch addressed by a sample offset.
    pub fn sample_position(&self, s: f64, t: f64) -> Vector {
        self.position + (s * self.u) + (t * self.v)
    }
}

/// A material record.
///
/// Materials use attributes from the Phong reflection model; a diffuse
/// color, plus ambient, specular and shininess coefficients. Coefficients
/// are unclamped and unvalidated; physically implausible values simply
/// produce implausible colors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Material {
        Material {
            color: Color::white(),
            ambient: 0.0,
            specular: 0.0,
            shininess: 1.0,
        }
    }
}

impl Material {
    pub fn new(color: Color, ambient: f64, specular: f64, shininess: f64)
        -> Material {
        Material { color, ambient, specular, shininess }
    }
}

/// Calculates the diffuse and specular Phong terms for a single light
/// sample.
///
/// Takes a material, the sampled light's color, the (unit) direction from
/// the shaded point to the light, the (unit) direction from the point back
/// to the eye, and the surface normal. Returns the diffuse and specular
/// contributions separately; point lights sum both, while area lights
/// average diffuse contributions and keep only the brightest specular one.
///
/// The diffuse term is `max(0, N.L)` times the material color times the
/// light color. The specular term reflects the view direction about the
/// normal and raises `max(0, L.R)` to the material's shininess. Neither term
/// accounts for shadowing; callers run the shadow test first.
pub fn phong(m: &Material, light_color: Color, lightv: Vector, eyev: Vector,
    normalv: Vector) -> (Color, Color) {
    let light_dot_normal = f64::max(0.0, lightv.dot(&normalv));
    let diffuse = (m.color * light_color) * light_dot_normal;

    // Reflect the view direction about the normal: R = 2(V.N)N - V.
    let reflectv = (-eyev).reflect(&normalv);
    let reflect_dot_light = f64::max(0.0, lightv.dot(&reflectv));
    let factor = reflect_dot_light.powf(m.shininess);
    let specular = (light_color * m.specular) * factor;

    (diffuse, specular)
}

/* Tests */

#[test]
fn light_behind_surface_has_no_diffuse() {
    let m = Material::new(Color::white(), 0.0, 0.0, 1.0);
    let lightv = Vector::new(0.0, 0.0, 1.0);
    let eyev = Vector::new(0.0, 0.0, -1.0);
    let normalv = Vector::new(0.0, 0.0, -1.0);

    let (diffuse, _) = phong(&m, Color::white(), lightv, eyev, normalv);
    assert_eq!(diffuse, Color::black());
}

#[test]
fn head_on_light_has_full_diffuse() {
    let m = Material::new(Color::rgb(0.5, 0.5, 0.5), 0.0, 0.0, 1.0);
    let lightv = Vector::new(0.0, 0.0, -1.0);
    let eyev = Vector::new(0.0, 0.0, -1.0);
    let normalv = Vector::new(0.0, 0.0, -1.0);

    let (diffuse, _) = phong(&m, Color::white(), lightv, eyev, normalv);
    assert_eq!(diffuse, Color::rgb(0.5, 0.5, 0.5));
}

#[test]
fn mirror_aligned_eye_gets_full_specular() {
    // Light and eye both along the normal; the reflected view direction
    // lines up exactly with the light direction.
    let m = Material::new(Color::white(), 0.0, 0.7, 20.0);
    let lightv = Vector::new(0.0, 0.0, -1.0);
    let eyev = Vector::new(0.0, 0.0, -1.0);
    let normalv = Vector::new(0.0, 0.0, -1.0);

    let (_, specular) = phong(&m, Color::white(), lightv, eyev, normalv);
    assert_eq!(specular, Color::rgb(0.7, 0.7, 0.7));
}

#[test]
fn grazing_reflection_has_no_specular() {
    // The reflected view direction is perpendicular to the light direction.
    let m = Material::new(Color::white(), 0.0, 1.0, 2.0);
    let lightv = Vector::new(0.0, 1.0, 0.0);
    let eyev = Vector::new(0.0, 0.0, -1.0);
    let normalv = Vector::new(0.0, 0.0, -1.0);

    let (_, specular) = phong(&m, Color::white(), lightv, eyev, normalv);
    assert_eq!(specular, Color::black());
}

#[test]
fn area_light_sample_positions() {
    let a = AreaLight::new(
        Color::white(),
        Vector::new(1.0, 2.0, 3.0),
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 2.0, 0.0),
    );

    assert_eq!(a.sample_position(0.0, 0.0), Vector::new(1.0, 2.0, 3.0));
    assert_eq!(a.sample_position(1.0, -0.5), Vector::new(2.0, 1.0, 3.0));
}
