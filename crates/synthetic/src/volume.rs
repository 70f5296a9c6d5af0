use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Trait for modeling trade volume per chart point.
pub trait VolumeModel {
    /// Returns the volume for the next point, fiat-denominated.
    fn next_volume(&mut self) -> Decimal;

    /// Convenience: draws a whole series.
    fn series(&mut self, points: usize) -> Vec<Decimal> {
        (0..points).map(|_| self.next_volume()).collect()
    }
}

/// Baseline volume with uniform noise and occasional large spikes.
pub struct SpikyVolume {
    /// Floor volume present at every point.
    pub base: f64,
    /// Maximum uniform noise added on top of the base.
    pub noise_max: f64,
    /// Probability that a point carries a spike.
    pub spike_probability: f64,
    /// Maximum spike magnitude.
    pub spike_max: f64,
    rng: StdRng,
}

impl SpikyVolume {
    /// The dashboard's default profile: $150M base, up to $50M noise, and a
    /// 20% chance of a spike worth up to $200M more.
    pub fn new(seed: u64) -> Self {
        Self::with_profile(150_000_000.0, 50_000_000.0, 0.2, 200_000_000.0, seed)
    }

    pub fn with_profile(
        base: f64,
        noise_max: f64,
        spike_probability: f64,
        spike_max: f64,
        seed: u64,
    ) -> Self {
        Self {
            base,
            noise_max,
            spike_probability,
            spike_max,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl VolumeModel for SpikyVolume {
    fn next_volume(&mut self) -> Decimal {
        let spike = if self.rng.random::<f64>() < self.spike_probability {
            self.rng.random::<f64>() * self.spike_max
        } else {
            0.0
        };
        let noise = self.rng.random::<f64>() * self.noise_max;

        Decimal::from_f64(self.base + noise + spike).unwrap_or(Decimal::ZERO)
    }
}

/// Constant volume model, mainly for tests.
#[derive(Debug, Clone)]
pub struct ConstantVolume {
    pub volume: Decimal,
}

impl ConstantVolume {
    pub fn new(volume: Decimal) -> Self {
        Self { volume }
    }
}

impl VolumeModel for ConstantVolume {
    fn next_volume(&mut self) -> Decimal {
        self.volume
    }
}
