use rand::Rng;

/// A 2D sample offset.
///
/// Both components lie in [-1, 1]. A sample serves two consumers: as a
/// sub-pixel offset around an eye ray for anti-aliasing, and as a parametric
/// offset across an area light's patch for soft shadows.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sample {
    pub s: f64,
    pub t: f64,
}

/// The sample-distribution generator.
///
/// Produces `samples * samples` offsets covering [-1, 1] x [-1, 1] as a
/// regular grid of cells. With jitter off each offset is the cell center,
/// which makes rendering deterministic; with jitter on each offset is
/// displaced pseudo-randomly within its cell.
///
/// The random source is injected so callers (and tests) can seed it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sampler {
    pub samples: usize,
    pub jitter: bool,
}

impl Sampler {
    /// Creates a sampler.
    ///
    /// A sample level of zero is meaningless and bumped up to one; one
    /// sample means a single centered offset, i.e. no distribution.
    pub fn new(samples: usize, jitter: bool) -> Sampler {
        Sampler { samples: samples.max(1), jitter }
    }

    /// Generates the full sample set.
    pub fn distribution<R: Rng>(&self, rng: &mut R) -> Vec<Sample> {
        let mut samples = Vec::with_capacity(self.samples * self.samples);
        let increment = 2.0 / (self.samples as f64);

        for i in 0..self.samples {
            for j in 0..self.samples {
                let (x, y) = if self.jitter {
                    (rng.gen::<f64>() * 0.5, rng.gen::<f64>() * 0.5)
                } else {
                    (increment / 2.0, increment / 2.0)
                };

                samples.push(Sample {
                    s: (i as f64) * increment + x - 1.0,
                    t: (j as f64) * increment + y - 1.0,
                });
            }
        }

        samples
    }
}

/* Tests */

#[cfg(test)]
use rand::SeedableRng;
#[cfg(test)]
use rand::rngs::StdRng;

#[test]
fn single_sample_is_centered() {
    let mut rng = StdRng::seed_from_u64(0);
    let samples = Sampler::new(1, false).distribution(&mut rng);

    assert_eq!(samples, vec![Sample { s: 0.0, t: 0.0 }]);
}

#[test]
fn grid_size_is_squared() {
    let mut rng = StdRng::seed_from_u64(0);
    let samples = Sampler::new(4, false).distribution(&mut rng);

    assert_eq!(samples.len(), 16);
}

#[test]
fn regular_grid_uses_cell_centers() {
    let mut rng = StdRng::seed_from_u64(0);
    let samples = Sampler::new(2, false).distribution(&mut rng);

    let expected = vec![
        Sample { s: -0.5, t: -0.5 },
        Sample { s: -0.5, t:  0.5 },
        Sample { s:  0.5, t: -0.5 },
        Sample { s:  0.5, t:  0.5 },
    ];
    assert_eq!(samples, expected);
}

#[test]
fn samples_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let samples = Sampler::new(3, true).distribution(&mut rng);

    assert_eq!(samples.len(), 9);
    for sample in samples {
        assert!(sample.s >= -1.0 && sample.s <= 1.0);
        assert!(sample.t >= -1.0 && sample.t <= 1.0);
    }
}

#[test]
fn seeded_jitter_is_reproducible() {
    let first = Sampler::new(3, true)
        .distribution(&mut StdRng::seed_from_u64(7));
    let second = Sampler::new(3, true)
        .distribution(&mut StdRng::seed_from_u64(7));

    assert_eq!(first, second);
}

#[test]
fn zero_sample_level_is_bumped_to_one() {
    let mut rng = StdRng::seed_from_u64(0);
    let samples = Sampler::new(0, false).distribution(&mut rng);

    assert_eq!(samples.len(), 1);
}
