use rand::Rng;

use crate::consts::SHADOW_BIAS;
use crate::ray::Ray;
use crate::vector::Vector;
use crate::color::Color;
use crate::light::{ PointLight, AmbientLight, AreaLight, phong };
use crate::geometry::Primitive;
use crate::sampler::{ Sample, Sampler };

/// A world with primitives and lights.
///
/// Worlds collect everything a ray can interact with: the primitive set,
/// point lights, the single ambient term, area lights, and the background
/// color returned for rays that hit nothing. A world is built up by scene
/// setup and read-only during rendering.
#[derive(Debug)]
pub struct World {
    pub objects: Vec<Box<dyn Primitive>>,
    pub lights: Vec<PointLight>,
    pub area_lights: Vec<AreaLight>,
    pub ambient: AmbientLight,
    pub background: Color,
}

impl Default for World {
    fn default() -> World {
        World {
            objects: Vec::new(),
            lights: Vec::new(),
            area_lights: Vec::new(),
            ambient: AmbientLight::new(Color::black()),
            background: Color::white(),
        }
    }
}

/// Selects the usable hit among a primitive's t-values, if any.
///
/// One root is a candidate only if positive. Of two roots, one positive and
/// one non-positive means the ray starts inside the primitive and the
/// positive root is the exit point; two positives mean the ray hits from
/// outside and the smaller is the entry point; two non-positives mean the
/// primitive is behind the ray.
fn positive_hit(ts: &[f64]) -> Option<f64> {
    match *ts {
        [t] if t > 0.0 => Some(t),
        [t0, t1] => {
            match (t0 > 0.0, t1 > 0.0) {
                (true, false) => Some(t0),
                (false, true) => Some(t1),
                (true, true) => Some(t0.min(t1)),
                (false, false) => None,
            }
        },
        _ => None,
    }
}

impl World {
    /// Creates an empty world with a black ambient term and a white
    /// background.
    pub fn new() -> World {
        Default::default()
    }

    /// Finds the closest primitive hit by a ray, with its t-value.
    ///
    /// Returns `None` when every primitive is missed or lies behind the
    /// ray's origin.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(f64, &dyn Primitive)> {
        let mut nearest: Option<(f64, &dyn Primitive)> = None;

        for obj in self.objects.iter() {
            if let Some(t) = positive_hit(&obj.intersections(ray)) {
                match nearest {
                    Some((tmin, _)) if t >= tmin => {},
                    _ => nearest = Some((t, &**obj)),
                }
            }
        }

        nearest
    }

    /// Determines whether a ray hits anything at all.
    ///
    /// The existence test for shadow rays: same hit-selection rules as
    /// `nearest_hit`, short-circuited at the first positive hit, since a
    /// shadow needs no nearest distance.
    pub fn test_ray(&self, ray: &Ray) -> bool {
        self.objects.iter()
            .any(|obj| positive_hit(&obj.intersections(ray)).is_some())
    }

    /// Shades the hit at `ray.position(t)` on `obj`.
    ///
    /// Applies the full illumination equation: the ambient term, a
    /// diffuse-plus-specular term per unoccluded point light, and per area
    /// light the sample-averaged diffuse term plus the brightest sampled
    /// specular response. Shadow rays start `SHADOW_BIAS` along the normal
    /// to keep a surface from occluding itself.
    pub fn shade_hit(&self, ray: &Ray, t: f64, obj: &dyn Primitive,
        samples: &[Sample]) -> Color {
        let m = obj.material();
        let point = ray.position(t);
        let normalv = obj.normal_at(point);
        let eyev = (ray.origin - point).normalize();
        let shadow_origin = point + (normalv * SHADOW_BIAS);

        let ambient = (self.ambient.color * m.ambient) * m.color;
        let mut total = ambient;

        for light in self.lights.iter() {
            let lightv = (light.position - point).normalize();
            if self.test_ray(&Ray::new(shadow_origin, lightv)) {
                continue;
            }

            let (diffuse, specular)
                = phong(m, light.color, lightv, eyev, normalv);
            total = total + diffuse + specular;
        }

        for area in self.area_lights.iter() {
            let mut avg_diffuse = Color::black();
            let mut max_specular = Color::black();

            for sample in samples.iter() {
                let lightv = (area.sample_position(sample.s, sample.t)
                    - point).normalize();
                if self.test_ray(&Ray::new(shadow_origin, lightv)) {
                    continue;
                }

                let (diffuse, specular)
                    = phong(m, area.color, lightv, eyev, normalv);
                avg_diffuse = avg_diffuse + diffuse;
                if specular.lightness() > max_specular.lightness() {
                    max_specular = specular;
                }
            }

            // Shadowed samples still count toward the average; an area
            // light half in shadow is half as bright.
            avg_diffuse = avg_diffuse.scale(1.0 / (samples.len() as f64));
            total = total + avg_diffuse + max_specular;
        }

        total
    }

    /// Determines the color a ray produces in this world.
    ///
    /// Rays that hit nothing yield the background color unmodified. The
    /// sampler supplies offsets for area-light integration; its random
    /// source is injected so renders can be made deterministic.
    pub fn color_at<R: Rng>(&self, ray: &Ray, sampler: &Sampler,
        rng: &mut R) -> Color {
        match self.nearest_hit(ray) {
            None => self.background,
            Some((t, obj)) => {
                let samples = sampler.distribution(rng);
                self.shade_hit(ray, t, obj, &samples)
            },
        }
    }
}

/* Tests */

#[cfg(test)]
use crate::geometry::{ Sphere, Disk };
#[cfg(test)]
use crate::light::Material;
#[cfg(test)]
use rand::SeedableRng;
#[cfg(test)]
use rand::rngs::StdRng;

#[cfg(test)]
fn red_sphere(origin: Vector) -> Sphere {
    Sphere::new(origin, 1.0,
        Material::new(Color::rgb(0.9, 0.0, 0.0), 0.2, 0.5, 10.0))
}

#[cfg(test)]
fn single_sample() -> (Sampler, StdRng) {
    (Sampler::new(1, false), StdRng::seed_from_u64(0))
}

#[test]
fn miss_returns_background() {
    let mut w = World::new();
    w.background = Color::rgb(0.4, 0.4, 0.9);
    w.objects.push(Box::new(red_sphere(Vector::new(0.0, 0.0, -4.0))));

    let r = Ray::new(Vector::zero(), Vector::new(0.0, 1.0, 0.0));
    let (sampler, mut rng) = single_sample();

    assert_eq!(w.color_at(&r, &sampler, &mut rng), w.background);
}

#[test]
fn nearest_hit_picks_closest_object() {
    let mut w = World::new();
    w.objects.push(Box::new(red_sphere(Vector::new(0.0, 0.0, -8.0))));
    w.objects.push(Box::new(red_sphere(Vector::new(0.0, 0.0, -4.0))));

    let r = Ray::new(Vector::zero(), Vector::new(0.0, 0.0, -1.0));
    let (t, _) = w.nearest_hit(&r).unwrap();

    assert!(crate::feq(t, 3.0));
}

#[test]
fn nearest_hit_from_inside_sphere() {
    let mut w = World::new();
    w.objects.push(Box::new(red_sphere(Vector::zero())));

    let r = Ray::new(Vector::zero(), Vector::new(0.0, 0.0, -1.0));
    let (t, _) = w.nearest_hit(&r).unwrap();

    assert!(crate::feq(t, 1.0));
}

#[test]
fn objects_behind_ray_are_skipped() {
    let mut w = World::new();
    w.objects.push(Box::new(red_sphere(Vector::new(0.0, 0.0, 4.0))));

    let r = Ray::new(Vector::zero(), Vector::new(0.0, 0.0, -1.0));

    assert!(w.nearest_hit(&r).is_none());
    assert!(!w.test_ray(&r));
}

#[test]
fn shading_is_idempotent_without_jitter() {
    let mut w = World::new();
    w.ambient = AmbientLight::new(Color::rgb(0.1, 0.1, 0.1));
    w.objects.push(Box::new(red_sphere(Vector::new(0.0, 0.0, -4.0))));
    w.lights.push(PointLight::new(Color::white(),
        Vector::new(7.0, 4.0, 5.0)));
    w.area_lights.push(AreaLight::new(Color::white(),
        Vector::new(-3.0, 5.0, 0.0),
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 1.0)));

    let r = Ray::new(Vector::zero(), Vector::new(0.0, 0.0, -1.0));
    let sampler = Sampler::new(3, false);

    let first = w.color_at(&r, &sampler, &mut StdRng::seed_from_u64(0));
    let second = w.color_at(&r, &sampler, &mut StdRng::seed_from_u64(1));

    assert_eq!(first, second);
}

#[test]
fn occluded_light_leaves_only_ambient() {
    let mut w = World::new();
    w.ambient = AmbientLight::new(Color::rgb(0.3, 0.3, 0.3));
    w.objects.push(Box::new(red_sphere(Vector::zero())));
    w.lights.push(PointLight::new(Color::white(),
        Vector::new(0.0, 0.0, 10.0)));

    // An occluder directly between the light and the surface point.
    let occluder = Sphere::new(Vector::new(0.0, 0.0, 5.0), 1.0,
        Default::default());
    w.objects.push(Box::new(occluder));

    let r = Ray::new(Vector::new(0.0, 0.0, 3.0),
        Vector::new(0.0, 0.0, -1.0));
    let (sampler, mut rng) = single_sample();

    let m = red_sphere(Vector::zero()).material;
    let expected = (w.ambient.color * m.ambient) * m.color;
    assert_eq!(w.color_at(&r, &sampler, &mut rng), expected);
}

#[test]
fn unshadowed_surface_gets_diffuse_and_specular() {
    let mut w = World::new();
    w.ambient = AmbientLight::new(Color::rgb(0.3, 0.3, 0.3));
    w.objects.push(Box::new(red_sphere(Vector::zero())));
    w.lights.push(PointLight::new(Color::white(),
        Vector::new(0.0, 0.0, 10.0)));

    let r = Ray::new(Vector::new(0.0, 0.0, 3.0),
        Vector::new(0.0, 0.0, -1.0));
    let (sampler, mut rng) = single_sample();

    let m = red_sphere(Vector::zero()).material;
    let ambient_only = (w.ambient.color * m.ambient) * m.color;
    let shaded = w.color_at(&r, &sampler, &mut rng);

    assert!(shaded.r > ambient_only.r);
    assert!(shaded.lightness() > ambient_only.lightness());
}

#[test]
fn specular_highlight_uses_view_direction() {
    // Light, eye and normal are collinear, so the reflected view
    // direction coincides with the light direction. A black diffuse
    // color and zero ambient isolate the specular term.
    let mut w = World::new();
    let m = Material::new(Color::black(), 0.0, 0.6, 8.0);
    w.objects.push(Box::new(
        Sphere::new(Vector::new(0.0, 0.0, -4.0), 1.0, m)));
    w.lights.push(PointLight::new(Color::white(),
        Vector::new(0.0, 0.0, 2.0)));

    let r = Ray::new(Vector::zero(), Vector::new(0.0, 0.0, -1.0));
    let (sampler, mut rng) = single_sample();

    assert_eq!(w.color_at(&r, &sampler, &mut rng),
        Color::rgb(0.6, 0.6, 0.6));
}

#[test]
fn single_sample_area_light_matches_point_light() {
    let position = Vector::new(7.0, 7.0, -5.0);
    let m = Material::new(Color::rgb(0.6, 0.0, 0.0), 1.0, 0.7, 20.0);

    let mut with_area = World::new();
    with_area.ambient = AmbientLight::new(Color::rgb(0.4, 0.4, 0.4));
    with_area.objects.push(Box::new(Sphere::new(Vector::zero(), 1.0, m)));
    with_area.area_lights.push(AreaLight::new(Color::white(), position,
        Vector::new(0.0, 0.0, -3.0), Vector::new(0.0, 3.0, 0.0)));

    let mut with_point = World::new();
    with_point.ambient = AmbientLight::new(Color::rgb(0.4, 0.4, 0.4));
    with_point.objects.push(Box::new(Sphere::new(Vector::zero(), 1.0, m)));
    with_point.lights.push(PointLight::new(Color::white(), position));

    let r = Ray::new(Vector::new(4.0, 0.0, 0.0),
        Vector::new(-1.0, 0.0, 0.0));
    let (sampler, _) = single_sample();

    let area_color = with_area.color_at(&r, &sampler,
        &mut StdRng::seed_from_u64(0));
    let point_color = with_point.color_at(&r, &sampler,
        &mut StdRng::seed_from_u64(0));

    assert_eq!(area_color, point_color);
}

#[test]
fn disk_shading_uses_fixed_normal() {
    let mut w = World::new();
    let m = Material::new(Color::rgb(0.0, 0.0, 1.0), 0.0, 0.0, 1.0);
    w.objects.push(Box::new(Disk::new(Vector::new(0.0, 0.0, -4.0), 1.0,
        Vector::new(0.0, 0.0, 1.0), m)));
    w.lights.push(PointLight::new(Color::white(),
        Vector::new(0.0, 4.0, 5.0)));

    let r = Ray::new(Vector::zero(), Vector::new(0.0, 0.0, -1.0));
    let (sampler, mut rng) = single_sample();
    let c = w.color_at(&r, &sampler, &mut rng);

    // Diffuse only: N.L for a head-on disk and a light up and behind.
    let lightv = (Vector::new(0.0, 4.0, 5.0)
        - Vector::new(0.0, 0.0, -4.0)).normalize();
    let n_dot_l = lightv.dot(&Vector::new(0.0, 0.0, 1.0));
    assert_eq!(c, Color::rgb(0.0, 0.0, n_dot_l));
}

