//! Decorative floating code-symbol particles.
//!
//! Placement and timing are random per page load; nothing depends on the
//! exact values.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use std::ops::Range;

use rand::Rng;
use rand::seq::IndexedRandom;

pub const DEFAULT_PARTICLE_COUNT: usize = 20;
/// Upper bound accepted from page configuration.
pub const MAX_PARTICLE_COUNT: usize = 200;

pub const CODE_SYMBOLS: [char; 21] = [
    '{', '}', '[', ']', '(', ')', '<', '>', '/', '*', '=', '+', '-', ';', ':', '&', '|', '%', '$', '#', '@',
];

/// Style of one particle element.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub symbol: char,
    /// Horizontal position, percent of container width.
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ParticleSpec {
    #[must_use]
    pub fn left_css(&self) -> String {
        format!("{}%", self.left_pct)
    }

    #[must_use]
    pub fn delay_css(&self) -> String {
        format!("{}s", self.delay_s)
    }

    #[must_use]
    pub fn duration_css(&self) -> String {
        format!("{}s", self.duration_s)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleRanges {
    pub left_pct: Range<f64>,
    pub delay_s: Range<f64>,
    pub duration_s: Range<f64>,
}

impl Default for ParticleRanges {
    fn default() -> Self {
        Self { left_pct: 0.0..100.0, delay_s: 0.0..15.0, duration_s: 10.0..20.0 }
    }
}

/// Draw `count` particles. Empty ranges collapse to their start value.
pub fn generate(rng: &mut impl Rng, count: usize, ranges: &ParticleRanges) -> Vec<ParticleSpec> {
    (0..count)
        .map(|_| ParticleSpec {
            symbol: CODE_SYMBOLS.choose(rng).copied().unwrap_or('*'),
            left_pct: sample(rng, &ranges.left_pct),
            delay_s: sample(rng, &ranges.delay_s),
            duration_s: sample(rng, &ranges.duration_s),
        })
        .collect()
}

fn sample(rng: &mut impl Rng, range: &Range<f64>) -> f64 {
    if range.is_empty() { range.start } else { rng.random_range(range.clone()) }
}
