use std::io;
use std::fs;
use std::path::Path;

use serde::{ Serialize, Deserialize };

use crate::vector::Vector;
use crate::color::Color;
use crate::light::{ PointLight, AmbientLight, AreaLight, Material };
use crate::geometry::{ Sphere, Disk };
use crate::world::World;
use crate::camera::Camera;

/// A complete, renderable scene: a world plus the camera viewing it.
///
/// Lifecycle is construct, populate, render, discard. A fresh scene (and a
/// `reset`) carries the default state: the eye at the origin looking down
/// the negative z axis with +y up, a 90 degree field of view, a white
/// background, a black ambient term and empty collections. Because those
/// defaults are always present, a scene can be rendered at any point
/// without tripping over unset state.
pub struct Scene {
    pub world: World,
    pub camera: Camera,
}

impl Scene {
    /// Creates a default scene rendered at `width` by `height` pixels.
    pub fn new(width: usize, height: usize) -> Scene {
        let mut scene = Scene {
            world: World::new(),
            camera: Camera::new(width, height, 0.0,
                Vector::zero(), Vector::new(0.0, 0.0, -1.0),
                Vector::new(0.0, 1.0, 0.0)),
        };

        scene.reset();
        scene
    }

    /// Clears all scene contents and restores the defaults.
    ///
    /// The canvas dimensions are kept.
    pub fn reset(&mut self) {
        self.world = World::new();
        self.set_eye(Vector::zero(), Vector::new(0.0, 0.0, -1.0),
            Vector::new(0.0, 1.0, 0.0));
        self.set_fov(90.0);
        self.set_ambient(Color::black());
        self.set_background(Color::white());
    }

    /// Sets the camera pose. The up hint is normalized here; it must not be
    /// parallel to the viewing direction.
    pub fn set_eye(&mut self, from: Vector, to: Vector, up: Vector) {
        self.camera = Camera::new(self.camera.hsize, self.camera.vsize,
            self.camera.field_of_view, from, to, up.normalize());
    }

    /// Sets the vertical field of view, in degrees.
    pub fn set_fov(&mut self, degrees: f64) {
        self.camera.field_of_view = degrees.to_radians();
    }

    pub fn set_background(&mut self, color: Color) {
        self.world.background = color;
    }

    pub fn set_ambient(&mut self, color: Color) {
        self.world.ambient = AmbientLight::new(color);
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.world.lights.push(light);
    }

    pub fn add_area_light(&mut self, light: AreaLight) {
        self.world.area_lights.push(light);
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.world.objects.push(Box::new(sphere));
    }

    pub fn add_disk(&mut self, disk: Disk) {
        self.world.objects.push(Box::new(disk));
    }

    /// Loads a scene from a JSON description file.
    pub fn load(path: &Path) -> io::Result<Scene> {
        let contents = fs::read_to_string(path)?;
        let scene_json: SceneJson = serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(scene_json.into())
    }
}

impl From<SceneJson> for Scene {
    fn from(scene_json: SceneJson) -> Scene {
        let mut scene = Scene::new(scene_json.width, scene_json.height);

        scene.set_eye(
            (&scene_json.eye_from).into(),
            (&scene_json.eye_to).into(),
            (&scene_json.eye_up).into(),
        );
        scene.set_fov(scene_json.field_of_view);
        scene.set_background((&scene_json.background).into());
        scene.set_ambient((&scene_json.ambient).into());

        for light in scene_json.lights.iter() {
            scene.add_light(PointLight::new(
                (&light.color).into(),
                (&light.position).into(),
            ));
        }

        for light in scene_json.area_lights.iter() {
            scene.add_area_light(AreaLight::new(
                (&light.color).into(),
                (&light.position).into(),
                (&light.u).into(),
                (&light.v).into(),
            ));
        }

        for sphere in scene_json.spheres.iter() {
            scene.add_sphere(Sphere::new(
                (&sphere.origin).into(),
                sphere.radius,
                sphere.material(),
            ));
        }

        for disk in scene_json.disks.iter() {
            scene.add_disk(Disk::new(
                (&disk.origin).into(),
                disk.radius,
                Vector::from(&disk.normal).normalize(),
                disk.material(),
            ));
        }

        scene
    }
}

/// The JSON shape of a scene description.
///
/// Colors and vectors are written as plain arrays of numbers. The field of
/// view is given in degrees, like the authoring API takes it.
#[derive(Serialize, Deserialize)]
pub struct SceneJson {
    width: usize,
    height: usize,
    field_of_view: f64,

    eye_from: Vec<f64>,
    eye_to: Vec<f64>,
    eye_up: Vec<f64>,

    #[serde(default = "white")]
    background: Vec<f64>,
    #[serde(default)]
    ambient: Vec<f64>,

    #[serde(default)]
    lights: Vec<LightJson>,
    #[serde(default)]
    area_lights: Vec<AreaLightJson>,
    #[serde(default)]
    spheres: Vec<SphereJson>,
    #[serde(default)]
    disks: Vec<DiskJson>,
}

fn white() -> Vec<f64> {
    vec![1.0, 1.0, 1.0]
}

#[derive(Clone, Serialize, Deserialize)]
struct LightJson {
    color: Vec<f64>,
    position: Vec<f64>,
}

#[derive(Clone, Serialize, Deserialize)]
struct AreaLightJson {
    color: Vec<f64>,
    position: Vec<f64>,
    u: Vec<f64>,
    v: Vec<f64>,
}

#[derive(Clone, Serialize, Deserialize)]
struct SphereJson {
    origin: Vec<f64>,
    radius: f64,
    color: Vec<f64>,
    #[serde(default)]
    ambient: f64,
    #[serde(default)]
    specular: f64,
    #[serde(default = "one")]
    shininess: f64,
}

impl SphereJson {
    fn material(&self) -> Material {
        Material::new((&self.color).into(), self.ambient, self.specular,
            self.shininess)
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct DiskJson {
    origin: Vec<f64>,
    radius: f64,
    normal: Vec<f64>,
    color: Vec<f64>,
    #[serde(default)]
    ambient: f64,
    #[serde(default)]
    specular: f64,
    #[serde(default = "one")]
    shininess: f64,
}

impl DiskJson {
    fn material(&self) -> Material {
        Material::new((&self.color).into(), self.ambient, self.specular,
            self.shininess)
    }
}

fn one() -> f64 {
    1.0
}

/* Tests */

#[test]
fn fresh_scene_has_defaults() {
    let scene = Scene::new(10, 10);

    assert_eq!(scene.world.background, Color::white());
    assert_eq!(scene.world.ambient.color, Color::black());
    assert!(crate::feq(scene.camera.field_of_view,
        std::f64::consts::PI / 2.0));
    assert_eq!(scene.camera.eye, Vector::zero());
    assert!(scene.world.objects.is_empty());
}

#[test]
fn reset_clears_contents() {
    let mut scene = Scene::new(10, 10);
    scene.add_sphere(Sphere::unit());
    scene.add_light(PointLight::new(Color::white(),
        Vector::new(1.0, 1.0, 1.0)));
    scene.set_background(Color::rgb(0.2, 0.2, 0.2));

    scene.reset();

    assert!(scene.world.objects.is_empty());
    assert!(scene.world.lights.is_empty());
    assert_eq!(scene.world.background, Color::white());
    assert_eq!(scene.camera.hsize, 10);
}

#[test]
fn fov_is_given_in_degrees() {
    let mut scene = Scene::new(10, 10);
    scene.set_fov(60.0);

    assert!(crate::feq(scene.camera.field_of_view,
        std::f64::consts::PI / 3.0));
}

#[test]
fn scene_from_json() {
    let text = r#"{
        "width": 120,
        "height": 80,
        "field_of_view": 60.0,
        "eye_from": [0, 0, 0],
        "eye_to": [0, 0, -1],
        "eye_up": [0, 1, 0],
        "background": [0.4, 0.4, 0.9],
        "ambient": [0.1, 0.1, 0.4],
        "lights": [
            { "color": [1, 1, 1], "position": [7, 7, -5] }
        ],
        "area_lights": [
            { "color": [1, 1, 1], "position": [3, 5, 1],
              "u": [1, 0, -0.5], "v": [0, 2, -0.25] }
        ],
        "spheres": [
            { "origin": [0, 0, -4], "radius": 1,
              "color": [0.9, 0, 0], "ambient": 0.2,
              "specular": 0.5, "shininess": 10 }
        ],
        "disks": [
            { "origin": [0, -1, 0], "radius": 70,
              "normal": [0, 1, 0], "color": [0.2, 0.2, 0.2] }
        ]
    }"#;

    let scene_json: SceneJson = serde_json::from_str(text).unwrap();
    let scene: Scene = scene_json.into();

    assert_eq!(scene.camera.hsize, 120);
    assert_eq!(scene.camera.vsize, 80);
    assert!(crate::feq(scene.camera.field_of_view,
        std::f64::consts::PI / 3.0));
    assert_eq!(scene.world.background, Color::rgb(0.4, 0.4, 0.9));
    assert_eq!(scene.world.ambient.color, Color::rgb(0.1, 0.1, 0.4));
    assert_eq!(scene.world.lights.len(), 1);
    assert_eq!(scene.world.area_lights.len(), 1);
    assert_eq!(scene.world.objects.len(), 2);
}

#[test]
fn sphere_material_from_json() {
    let text = r#"{ "origin": [1, 2, 3], "radius": 0.5,
        "color": [0.6, 0, 0] }"#;

    let sphere_json: SphereJson = serde_json::from_str(text).unwrap();
    let m = sphere_json.material();

    assert_eq!(m.color, Color::rgb(0.6, 0.0, 0.0));
    assert_eq!(m.ambient, 0.0);
    assert_eq!(m.specular, 0.0);
    assert_eq!(m.shininess, 1.0);
}
