//! Canned demonstration scenes.
//!
//! Each scene exercises a different corner of the renderer: plain
//! backgrounds, diffuse and ambient shading, disks at various orientations,
//! point-light shadows, and area lights with soft shadows.

use crate::vector::Vector;
use crate::color::Color;
use crate::light::{ PointLight, AreaLight, Material };
use crate::geometry::{ Sphere, Disk };
use crate::scene::Scene;

/// Builds demo scene `number` at the given canvas size.
///
/// Returns `None` for numbers with no scene attached.
pub fn scene(number: usize, width: usize, height: usize) -> Option<Scene> {
    let mut scene = Scene::new(width, height);

    match number {
        0 => background_only(&mut scene),
        1 => one_red_sphere(&mut scene),
        2 => two_spheres(&mut scene),
        3 => colored_point_lights(&mut scene),
        4 => snowman(&mut scene),
        5 => two_spheres_ambient(&mut scene),
        6 => one_disk(&mut scene),
        7 => five_disks(&mut scene),
        8 => three_intersecting_disks(&mut scene),
        9 => two_spheres_point_light(&mut scene),
        10 => two_spheres_area_light(&mut scene),
        11 => colored_area_lights(&mut scene),
        12 => three_spheres_disk_area_light(&mut scene),
        _ => return None,
    }

    Some(scene)
}

/// The number of available demo scenes.
pub const SCENE_COUNT: usize = 13;

fn sphere(x: f64, y: f64, z: f64, radius: f64, color: Color,
    ambient: f64, specular: f64, shininess: f64) -> Sphere {
    Sphere::new(Vector::new(x, y, z), radius,
        Material::new(color, ambient, specular, shininess))
}

fn disk(x: f64, y: f64, z: f64, radius: f64, normal: Vector, color: Color,
    ambient: f64, specular: f64, shininess: f64) -> Disk {
    Disk::new(Vector::new(x, y, z), radius, normal.normalize(),
        Material::new(color, ambient, specular, shininess))
}

fn background_only(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.9, 0.4, 0.5));
}

// One diffuse red sphere.
fn one_red_sphere(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.4, 0.4, 0.9));
    scene.set_fov(60.0);

    scene.add_light(PointLight::new(Color::white(),
        Vector::new(7.0, 4.0, 5.0)));

    scene.add_sphere(sphere(0.0, 0.0, -4.0, 1.0,
        Color::rgb(0.9, 0.0, 0.0), 0.0, 0.0, 1.0));
}

// Two spheres, viewed from the side.
fn two_spheres(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.12, 0.1, 0.2));
    scene.set_fov(60.0);
    scene.set_eye(Vector::new(4.0, 0.0, 0.0), Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 1.0, 0.0));

    scene.add_light(PointLight::new(Color::white(),
        Vector::new(7.0, 7.0, -5.0)));
    scene.set_ambient(Color::rgb(0.1, 0.1, 0.4));

    scene.add_sphere(sphere(0.0, 0.0, 0.0, 1.0,
        Color::rgb(0.0, 0.5, 0.0), 0.6, 1.0, 200.0));
    scene.add_sphere(sphere(1.0, 0.6, -1.0, 0.3,
        Color::rgb(0.6, 0.0, 0.0), 0.5, 0.0, 1.0));
}

// One sphere lit by multiple colored lights.
fn colored_point_lights(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.2, 0.4, 0.9));
    scene.set_fov(60.0);

    scene.add_light(PointLight::new(Color::rgb(0.8, 0.2, 0.2),
        Vector::new(3.0, 4.0, 0.0)));
    scene.add_light(PointLight::new(Color::rgb(0.2, 0.8, 0.2),
        Vector::new(-3.0, 4.0, 0.0)));
    scene.add_light(PointLight::new(Color::rgb(0.2, 0.2, 0.8),
        Vector::new(0.0, 4.0, -5.0)));

    scene.set_ambient(Color::rgb(0.2, 0.2, 0.2));

    scene.add_sphere(sphere(0.0, 0.5, -3.0, 1.0,
        Color::rgb(0.8, 0.8, 0.8), 0.2, 0.0, 1.0));
}

// Several spheres that intersect each other.
fn snowman(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.9, 0.4, 0.2));
    scene.set_fov(60.0);

    scene.add_light(PointLight::new(Color::white(),
        Vector::new(2.5, 1.0, 0.0)));
    scene.set_ambient(Color::rgb(0.2, 0.2, 0.2));

    // body
    scene.add_sphere(sphere(0.6, 0.0, -3.0, 0.5,
        Color::rgb(0.8, 0.8, 0.8), 0.2, 0.0, 1.0));
    scene.add_sphere(sphere(0.0, 0.0, -3.0, 0.45,
        Color::rgb(0.8, 0.8, 0.8), 0.2, 0.0, 1.0));
    scene.add_sphere(sphere(-0.6, 0.0, -3.0, 0.4,
        Color::rgb(0.8, 0.8, 0.8), 0.2, 0.0, 1.0));
    scene.add_sphere(sphere(-1.1, 0.0, -3.0, 0.35,
        Color::rgb(0.8, 0.8, 0.8), 0.2, 0.0, 1.0));

    // eyes
    scene.add_sphere(sphere(0.8, 0.3, -2.65, 0.1,
        Color::rgb(0.2, 0.2, 0.7), 0.2, 1.0, 125.0));
    scene.add_sphere(sphere(0.5, 0.3, -2.6, 0.095,
        Color::rgb(0.2, 0.2, 0.7), 0.2, 1.0, 125.0));

    // nose
    scene.add_sphere(sphere(0.62, 0.1, -2.5, 0.09,
        Color::rgb(0.2, 0.7, 0.2), 0.2, 0.0, 1.0));
}

// Two red spheres, one with a high ambient shading component.
fn two_spheres_ambient(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.2, 0.2, 0.2));
    scene.set_fov(60.0);

    scene.add_light(PointLight::new(Color::white(),
        Vector::new(7.0, 7.0, 5.0)));
    scene.set_ambient(Color::rgb(0.4, 0.4, 0.4));

    scene.add_sphere(sphere(-1.1, 0.0, -4.0, 1.0,
        Color::rgb(0.9, 0.0, 0.0), 0.0, 0.5, 10.0));
    scene.add_sphere(sphere(1.1, 0.0, -4.0, 1.0,
        Color::rgb(0.9, 0.0, 0.0), 0.7, 0.5, 10.0));
}

// One red disk.
fn one_disk(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.4, 0.4, 0.9));
    scene.set_fov(60.0);

    scene.add_light(PointLight::new(Color::white(),
        Vector::new(0.0, 4.0, 5.0)));

    scene.add_disk(disk(0.0, 0.0, -4.0, 1.0, Vector::new(0.0, 0.0, 1.0),
        Color::rgb(0.9, 0.0, 0.0), 0.0, 0.0, 1.0));
}

// Five disks of different orientations.
fn five_disks(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.4, 0.4, 0.9));
    scene.set_fov(60.0);
    scene.set_eye(Vector::new(0.0, 0.0, 10.0), Vector::new(0.0, 0.0, -1.0),
        Vector::new(0.0, 1.0, 0.0));

    scene.add_light(PointLight::new(Color::white(),
        Vector::new(0.0, 5.0, 10.0)));

    scene.add_disk(disk(-4.4, 0.0, 0.0, 1.0, Vector::new(0.0, 1.0, 0.1),
        Color::rgb(1.0, 0.0, 0.0), 0.0, 0.0, 1.0));
    scene.add_disk(disk(-2.2, 0.0, 0.0, 1.0, Vector::new(0.0, 1.0, 0.4),
        Color::rgb(1.0, 0.6, 0.2), 0.0, 0.0, 1.0));
    scene.add_disk(disk(0.0, 0.0, 0.0, 1.0, Vector::new(0.0, 1.0, 0.7),
        Color::rgb(0.9, 0.9, 0.0), 0.0, 0.0, 1.0));
    scene.add_disk(disk(2.2, 0.0, 0.0, 1.0, Vector::new(0.0, 1.0, 1.4),
        Color::rgb(0.0, 1.0, 0.0), 0.0, 0.0, 1.0));
    scene.add_disk(disk(4.4, 0.0, 0.0, 1.0, Vector::new(0.0, 0.0, 1.0),
        Color::rgb(0.0, 1.0, 1.0), 0.0, 0.0, 1.0));
}

// Three intersecting disks, viewed from off axis.
fn three_intersecting_disks(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.4, 0.4, 0.9));
    scene.set_fov(60.0);
    scene.set_eye(Vector::new(1.2, 1.3, 3.0),
        Vector::new(-0.344548, -0.373261, -0.861372),
        Vector::new(-0.13862, 0.92772, -0.34656));

    scene.add_light(PointLight::new(Color::rgb(1.2, 1.2, 1.2),
        Vector::new(2.0, 4.0, 6.0)));
    scene.set_ambient(Color::white());

    scene.add_disk(disk(0.0, 0.0, 0.0, 1.0, Vector::new(1.0, 0.0, 0.0),
        Color::rgb(0.9, 0.0, 0.0), 0.2, 0.0, 1.0));
    scene.add_disk(disk(0.0, 0.0, 0.0, 1.0, Vector::new(0.0, 1.0, 0.0),
        Color::rgb(0.0, 0.9, 0.0), 0.2, 0.0, 1.0));
    scene.add_disk(disk(0.0, 0.0, 0.0, 1.0, Vector::new(0.0, 0.0, 1.0),
        Color::rgb(0.0, 0.0, 0.9), 0.2, 0.0, 1.0));
}

// Two spheres with point-light shadows.
fn two_spheres_point_light(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.2, 0.1, 0.1));
    scene.set_fov(60.0);
    scene.set_eye(Vector::new(4.0, 0.0, 0.0), Vector::zero(),
        Vector::new(0.0, 1.0, 0.0));

    scene.add_light(PointLight::new(Color::white(),
        Vector::new(7.0, 7.0, -5.0)));
    scene.set_ambient(Color::rgb(0.4, 0.4, 0.4));

    scene.add_sphere(sphere(0.0, 0.0, 0.0, 1.0,
        Color::rgb(0.0, 0.5, 0.0), 1.0, 0.7, 200.0));
    scene.add_sphere(sphere(1.0, 0.6, -1.0, 0.3,
        Color::rgb(0.6, 0.0, 0.0), 0.5, 0.1, 100.0));
}

// Two spheres under an area light; soft shadows.
fn two_spheres_area_light(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.1, 0.2, 0.05));
    scene.set_fov(60.0);
    scene.set_eye(Vector::new(4.0, 0.0, 0.0), Vector::zero(),
        Vector::new(0.0, 1.0, 0.0));

    scene.add_area_light(AreaLight::new(Color::white(),
        Vector::new(7.0, 7.0, -5.0),
        Vector::new(0.0, 0.0, -3.0),
        Vector::new(0.0, 3.0, 0.0)));
    scene.set_ambient(Color::rgb(0.4, 0.4, 0.4));

    scene.add_sphere(sphere(0.0, 0.0, 0.0, 1.0,
        Color::rgb(0.6, 0.0, 0.0), 1.0, 0.7, 20.0));
    scene.add_sphere(sphere(1.0, 0.6, -1.0, 0.3,
        Color::rgb(0.0, 0.6, 0.0), 0.5, 0.0, 1.0));
}

// One sphere lit by multiple colored area lights, floating above a disk.
fn colored_area_lights(scene: &mut Scene) {
    scene.set_background(Color::black());
    scene.set_fov(60.0);

    scene.add_area_light(AreaLight::new(Color::rgb(0.8, 0.2, 0.2),
        Vector::new(3.0, 4.0, 0.0),
        Vector::new(2.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 2.0)));
    scene.add_area_light(AreaLight::new(Color::rgb(0.2, 0.8, 0.2),
        Vector::new(-3.0, 4.0, 0.0),
        Vector::new(2.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 2.0)));
    scene.add_area_light(AreaLight::new(Color::rgb(0.2, 0.2, 0.8),
        Vector::new(0.0, 4.0, -5.0),
        Vector::new(2.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 2.0)));

    scene.set_ambient(Color::rgb(0.2, 0.2, 0.2));

    scene.add_sphere(sphere(0.0, 0.5, -3.5, 1.0,
        Color::rgb(0.8, 0.8, 0.8), 0.2, 0.0, 1.0));
    scene.add_disk(disk(0.0, -0.8, 0.0, 7.0, Vector::new(0.0, 1.0, 0.0),
        Color::rgb(0.8, 0.8, 0.8), 0.0, 1.0, 1000.0));
}

// Three spheres over a huge floor disk, with both a point and an area
// light.
fn three_spheres_disk_area_light(scene: &mut Scene) {
    scene.set_background(Color::rgb(0.05, 0.05, 0.05));
    scene.set_fov(60.0);

    scene.add_light(PointLight::new(Color::rgb(1.0, 1.0, 1.2),
        Vector::new(-2.0, 4.0, -1.0)));
    scene.add_area_light(AreaLight::new(Color::white(),
        Vector::new(3.0, 5.0, 1.0),
        Vector::new(1.0, 0.0, -0.5),
        Vector::new(0.0, 2.0, -0.25)));
    scene.set_ambient(Color::rgb(0.1, 0.1, 0.1));

    scene.add_sphere(sphere(0.0, 0.0, -4.0, 1.0,
        Color::rgb(0.5, 0.3, 0.3), 0.2, 0.7, 100.0));
    scene.add_sphere(sphere(1.1, -0.5, -3.0, 0.5,
        Color::rgb(0.3, 0.6, 0.1), 0.2, 0.7, 100.0));
    scene.add_sphere(sphere(-0.5, -0.6, -2.0, 0.4,
        Color::rgb(0.4, 0.1, 0.8), 0.2, 0.0, 100.0));

    scene.add_disk(disk(0.0, -1.0, 0.0, 70.0, Vector::new(0.0, 1.0, 0.0),
        Color::rgb(0.2, 0.2, 0.2), 0.0, 0.1, 100.0));
}

/* Tests */

#[test]
fn every_demo_scene_builds() {
    for number in 0..SCENE_COUNT {
        assert!(scene(number, 10, 10).is_some());
    }

    assert!(scene(SCENE_COUNT, 10, 10).is_none());
}

#[test]
fn area_light_scene_has_no_point_lights() {
    let s = scene(10, 10, 10).unwrap();

    assert!(s.world.lights.is_empty());
    assert_eq!(s.world.area_lights.len(), 1);
    assert_eq!(s.world.objects.len(), 2);
}
