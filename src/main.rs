use std::io;
use std::path::PathBuf;

use clap::Parser;

use ray_caster::consts::{ CANVAS_WIDTH, CANVAS_HEIGHT, OUT_FILE };
use ray_caster::scene::Scene;
use ray_caster::canvas::Canvas;
use ray_caster::renderer::Renderer;
use ray_caster::demo;

/// Renders a demo scene or a JSON scene description to a PPM image.
#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    /// The demo scene number to render.
    #[clap(short, long, default_value_t = 12)]
    scene: usize,

    /// A JSON scene description file; overrides --scene.
    #[clap(long)]
    scene_file: Option<PathBuf>,

    /// The per-pixel and per-light sample level; the full distribution has
    /// the square of this many samples.
    #[clap(short = 'n', long, default_value_t = 1)]
    samples: usize,

    /// Jitter the sample distribution.
    #[clap(short, long)]
    jitter: bool,

    /// Seed for the jitter's random source, for reproducible renders.
    #[clap(long)]
    seed: Option<u64>,

    /// Canvas width in pixels (demo scenes only).
    #[clap(long, default_value_t = CANVAS_WIDTH)]
    width: usize,

    /// Canvas height in pixels (demo scenes only).
    #[clap(long, default_value_t = CANVAS_HEIGHT)]
    height: usize,

    /// The output PPM file.
    #[clap(short, long, default_value = OUT_FILE)]
    output: PathBuf,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let scene = match args.scene_file {
        Some(ref path) => Scene::load(path)?,
        None => demo::scene(args.scene, args.width, args.height)
            .unwrap_or_else(|| {
                eprintln!("No demo scene numbered {}; available scenes \
                    are 0 through {}.", args.scene, demo::SCENE_COUNT - 1);
                std::process::exit(1);
            }),
    };

    let mut renderer = match args.seed {
        Some(seed) => Renderer::with_seed(args.samples, args.jitter, seed),
        None => Renderer::new(args.samples, args.jitter),
    };

    println!("Rendering {} by {} at sample level {}...",
        scene.camera.hsize, scene.camera.vsize, args.samples);

    let mut canvas = Canvas::new(scene.camera.hsize, scene.camera.vsize);
    renderer.render(&scene, &mut canvas);

    canvas.save(&args.output)?;
    println!("Saved render to {}.", args.output.display());

    Ok(())
}
