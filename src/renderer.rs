use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::Color;
use crate::sampler::Sampler;
use crate::scene::Scene;

/// The drawing surface a render is delivered to.
///
/// The frame driver computes one scanline at a time and hands each finished
/// row over through `end_row` before starting the next; this row-at-a-time
/// handoff lets an interactive presenter display partial results, and it is
/// the only place a caller regains control mid-render.
///
/// Pixels arrive as clamped byte triplets; color-to-byte conversion happens
/// at this boundary and nowhere else.
pub trait Presenter {
    fn begin_frame(&mut self, width: usize, height: usize);
    fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]);
    fn end_row(&mut self, y: usize);
    fn end_frame(&mut self);
}

/// The frame driver.
///
/// Walks the pixel grid scanline by scanline, shading each pixel as the
/// average of the sampler's sub-pixel offsets, and delivers rows to a
/// `Presenter`. Rendering is single-threaded; within a row there are no
/// yield points.
pub struct Renderer {
    sampler: Sampler,
    rng: StdRng,

    /// Hooks for reflections, motion blur and depth of field. Accepted in
    /// configuration but currently ignored by the driver.
    pub enable_reflections: bool,
    pub enable_blur: bool,
    pub enable_depth: bool,
}

impl Renderer {
    /// Creates a renderer with a sample level and jitter flag.
    pub fn new(samples: usize, jitter: bool) -> Renderer {
        Renderer {
            sampler: Sampler::new(samples, jitter),
            rng: StdRng::from_entropy(),
            enable_reflections: false,
            enable_blur: false,
            enable_depth: false,
        }
    }

    /// Creates a renderer whose random source is seeded, making jittered
    /// renders reproducible.
    pub fn with_seed(samples: usize, jitter: bool, seed: u64) -> Renderer {
        Renderer {
            sampler: Sampler::new(samples, jitter),
            rng: StdRng::seed_from_u64(seed),
            enable_reflections: false,
            enable_blur: false,
            enable_depth: false,
        }
    }

    /// Renders a scene to completion.
    ///
    /// Each pixel's color is the average of one shaded eye ray per sampler
    /// offset; with a sample level of one this degenerates to a single
    /// centered ray. Rows are delivered in order, top to bottom.
    pub fn render<P: Presenter>(&mut self, scene: &Scene, presenter: &mut P) {
        let camera = &scene.camera;
        let sampler = self.sampler;
        presenter.begin_frame(camera.hsize, camera.vsize);

        for y in 0..camera.vsize {
            for x in 0..camera.hsize {
                let offsets = sampler.distribution(&mut self.rng);

                let mut color = Color::black();
                for offset in offsets.iter() {
                    let ray = camera.ray_for_sample(x, y, *offset);
                    color = color
                        + scene.world.color_at(&ray, &sampler,
                            &mut self.rng);
                }
                color = color.scale(1.0 / (offsets.len() as f64));

                presenter.set_pixel(x, y, color.to_drawing_color());
            }

            presenter.end_row(y);
        }

        presenter.end_frame();
    }
}

/* Tests */

#[cfg(test)]
#[derive(Default)]
struct RecordingPresenter {
    began: Vec<(usize, usize)>,
    pixels: Vec<(usize, usize, [u8; 3])>,
    rows: Vec<usize>,
    ended: bool,
}

#[cfg(test)]
impl Presenter for RecordingPresenter {
    fn begin_frame(&mut self, width: usize, height: usize) {
        self.began.push((width, height));
    }

    fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        self.pixels.push((x, y, rgb));
    }

    fn end_row(&mut self, y: usize) {
        self.rows.push(y);
    }

    fn end_frame(&mut self) {
        self.ended = true;
    }
}

#[test]
fn rows_are_delivered_in_order() {
    let scene = Scene::new(4, 3);
    let mut presenter: RecordingPresenter = Default::default();

    Renderer::new(1, false).render(&scene, &mut presenter);

    assert_eq!(presenter.began, vec![(4, 3)]);
    assert_eq!(presenter.rows, vec![0, 1, 2]);
    assert_eq!(presenter.pixels.len(), 12);
    assert!(presenter.ended);
}

#[test]
fn empty_scene_renders_background() {
    let mut scene = Scene::new(2, 2);
    scene.set_background(Color::rgb(0.9, 0.4, 0.5));

    let mut presenter: RecordingPresenter = Default::default();
    Renderer::new(1, false).render(&scene, &mut presenter);

    let expected = Color::rgb(0.9, 0.4, 0.5).to_drawing_color();
    for (_, _, rgb) in presenter.pixels.iter() {
        assert_eq!(*rgb, expected);
    }
}

#[test]
fn seeded_jittered_renders_are_reproducible() {
    use crate::demo;

    let scene = demo::scene(9, 20, 20).unwrap();

    let mut first: RecordingPresenter = Default::default();
    Renderer::with_seed(2, true, 11).render(&scene, &mut first);

    let mut second: RecordingPresenter = Default::default();
    Renderer::with_seed(2, true, 11).render(&scene, &mut second);

    assert_eq!(first.pixels, second.pixels);
}
