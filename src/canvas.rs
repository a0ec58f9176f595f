use std::io;
use std::io::Write;
use std::fs::File;
use std::path::Path;

use crate::renderer::Presenter;

/// A canvas for collecting rendered pixels.
///
/// This structure stores the results of a render as byte triplets, already
/// converted for display. It implements `Presenter`, so the frame driver can
/// deliver rows directly into it, and it can save the finished image.
///
/// For now, only PPM images are supported.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Canvas {
    /// The width of the canvas, in pixels.
    pub width: usize,

    /// The height of the canvas, in pixels.
    pub height: usize,

    /// The pixels of the canvas, stored as a flattened vector.
    pixels: Vec<[u8; 3]>,
}

impl Canvas {
    /// Creates a new canvas with specified width and height.
    ///
    /// This function allocates a `Vec` of size `width * height`, which may
    /// take up a decent amount of memory, depending on image size.
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![[0, 0, 0]; width * height]
        }
    }

    /// Saves a canvas to a PPM file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut out = File::create(path)?;

        // Write the PPM header: magic number, dimensions, maximum channel.
        writeln!(&mut out, "P3")?;
        writeln!(&mut out, "{} {}", self.width, self.height)?;
        writeln!(&mut out, "255")?;

        // One pixel per line keeps every line comfortably under the PPM
        // 70-column limit.
        for [r, g, b] in self.pixels.iter() {
            writeln!(&mut out, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }

    /// Reads a pixel from a location on the `Canvas`.
    ///
    /// Pixels are specified in row-column order, where `y` is the row of the
    /// pixel, and `x` is the column. Rows and columns are zero-indexed. If
    /// the specified pixel location is out-of-bounds, `None` is returned by
    /// this function.
    pub fn read_pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None
        }

        Some(self.pixels[(y * self.width) + x])
    }
}

impl Presenter for Canvas {
    fn begin_frame(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![[0, 0, 0]; width * height];
    }

    /// Writes a pixel to a location on the `Canvas`.
    ///
    /// Out-of-bounds pixels are silently ignored.
    fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }

        self.pixels[(y * self.width) + x] = rgb;
    }

    fn end_row(&mut self, _y: usize) { }

    fn end_frame(&mut self) { }
}

/* Tests */

#[test]
fn write_and_read_pixel() {
    let mut canvas = Canvas::new(8, 8);
    canvas.set_pixel(4, 2, [255, 0, 255]);

    assert_eq!(canvas.read_pixel(4, 2), Some([255, 0, 255]));
    assert_eq!(canvas.read_pixel(0, 0), Some([0, 0, 0]));
}

#[test]
fn out_of_bounds_pixels_are_ignored() {
    let mut canvas = Canvas::new(2, 2);
    canvas.set_pixel(5, 5, [1, 2, 3]);

    assert_eq!(canvas.read_pixel(5, 5), None);
}

#[test]
fn begin_frame_resizes() {
    let mut canvas = Canvas::default();
    canvas.begin_frame(3, 2);

    assert_eq!(canvas.width, 3);
    assert_eq!(canvas.height, 2);
    assert_eq!(canvas.read_pixel(2, 1), Some([0, 0, 0]));
}

#[test]
fn save_writes_ppm() {
    use std::fs;

    let mut canvas = Canvas::new(2, 1);
    canvas.set_pixel(0, 0, [255, 0, 0]);
    canvas.set_pixel(1, 0, [0, 127, 0]);

    let path = std::env::temp_dir().join("ray_caster_canvas_test.ppm");
    canvas.save(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "P3\n2 1\n255\n255 0 0\n0 127 0\n");

    fs::remove_file(&path).unwrap();
}
