//! RNG module - injectable randomness for piece and color selection
//!
//! The engine never touches global randomness. It draws shapes and colors
//! through [`RandomSource`], which is implemented for the seedable
//! [`StdRng`] used in play and for [`SequenceSource`], a scripted source
//! that makes engine scenarios fully deterministic in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Rgb, ShapeKind, COLOR_CHANNEL_MAX, COLOR_CHANNEL_MIN};

/// Source of random shape kinds and piece colors
pub trait RandomSource {
    /// Pick a shape kind, uniform over the catalog
    fn next_shape(&mut self) -> ShapeKind;

    /// Pick a color with each channel uniform in `[50, 255]`
    fn next_color(&mut self) -> Rgb;
}

impl RandomSource for StdRng {
    fn next_shape(&mut self) -> ShapeKind {
        uniform_shape(self)
    }

    fn next_color(&mut self) -> Rgb {
        uniform_color(self)
    }
}

fn uniform_shape(rng: &mut impl Rng) -> ShapeKind {
    ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]
}

fn uniform_color(rng: &mut impl Rng) -> Rgb {
    let mut channel = || rng.gen_range(COLOR_CHANNEL_MIN..=COLOR_CHANNEL_MAX);
    Rgb::new(channel(), channel(), channel())
}

/// Create a seeded RNG; the same seed replays the same piece sequence
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Create an RNG seeded from OS entropy
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Scripted source that cycles through fixed shapes and colors
///
/// An empty shape list yields I pieces; an empty color list yields gray.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    shapes: Vec<ShapeKind>,
    colors: Vec<Rgb>,
    shape_idx: usize,
    color_idx: usize,
}

impl SequenceSource {
    /// Cycle through `shapes` with a single fixed color
    pub fn new(shapes: impl Into<Vec<ShapeKind>>) -> Self {
        Self {
            shapes: shapes.into(),
            colors: vec![Rgb::new(128, 128, 128)],
            shape_idx: 0,
            color_idx: 0,
        }
    }

    /// Always produce the same shape
    pub fn repeat(kind: ShapeKind) -> Self {
        Self::new(vec![kind])
    }

    /// Replace the color cycle
    pub fn with_colors(mut self, colors: impl Into<Vec<Rgb>>) -> Self {
        self.colors = colors.into();
        self.color_idx = 0;
        self
    }
}

impl RandomSource for SequenceSource {
    fn next_shape(&mut self) -> ShapeKind {
        if self.shapes.is_empty() {
            return ShapeKind::I;
        }
        let kind = self.shapes[self.shape_idx % self.shapes.len()];
        self.shape_idx += 1;
        kind
    }

    fn next_color(&mut self) -> Rgb {
        if self.colors.is_empty() {
            return Rgb::new(128, 128, 128);
        }
        let color = self.colors[self.color_idx % self.colors.len()];
        self.color_idx += 1;
        color
    }
}
