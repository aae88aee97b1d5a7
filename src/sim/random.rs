//! Pluggable random source for spawn randomization
//!
//! Every `rand` generator is a [`RandomSource`]; the default world uses a
//! seeded `Pcg32` so whole sessions replay from a seed. [`ScriptedSource`]
//! replays a fixed list of draws for exact spawn placement in tests.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Uniform reals in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Cycles through a fixed list of draws
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Draws handed out so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Uniform integer in `[0, span)` from a single draw.
///
/// Panics if the source hands out a value outside `[0, 1)`.
pub(crate) fn draw_below<R: RandomSource + ?Sized>(rng: &mut R, span: i32) -> i32 {
    let u = rng.next_unit();
    assert!(
        (0.0..1.0).contains(&u),
        "random source produced {u}, expected a value in [0, 1)"
    );
    (u * f64::from(span)).floor() as i32
}

/// Fair coin flip from a single draw
pub(crate) fn coin<R: RandomSource + ?Sized>(rng: &mut R) -> bool {
    let u = rng.next_unit();
    assert!(
        (0.0..1.0).contains(&u),
        "random source produced {u}, expected a value in [0, 1)"
    );
    u < 0.5
}
