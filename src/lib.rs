pub mod consts;

pub mod vector;
pub mod color;
pub mod ray;

pub mod geometry;
pub mod light;
pub mod camera;
pub mod sampler;

pub mod world;
pub mod scene;
pub mod demo;

pub mod canvas;
pub mod renderer;

use consts::FEQ_EPSILON;

pub fn feq(left: f64, right: f64) -> bool {
    (left - right).abs() < FEQ_EPSILON
}
