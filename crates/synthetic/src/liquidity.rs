use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// One bar of the liquidity-distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidityPoint {
    pub price: Decimal,
    pub density: Decimal,
}

/// Bell-curve liquidity density centered on the current price.
///
/// Density falls off as `exp(-d^2 / (2 * sigma^2))` with `sigma = 0.3 *
/// spread`, scaled to a peak of 1000, with additive uniform noise so bars
/// don't look machine-perfect.
pub struct GaussianDensity {
    pub center: Decimal,
    pub spread: Decimal,
    /// Maximum additive noise per point.
    pub noise_max: f64,
    rng: StdRng,
}

/// Number of steps on each side of the center; the full distribution has
/// `2 * HALF_STEPS + 1` points.
const HALF_STEPS: i32 = 20;
const PEAK_DENSITY: f64 = 1000.0;
const SIGMA_FRACTION: f64 = 0.3;

impl GaussianDensity {
    pub fn new(center: Decimal, spread: Decimal, seed: u64) -> Self {
        Self {
            center,
            spread,
            noise_max: 200.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Noise-free density at an absolute distance from the center.
    fn density_at(&self, distance: f64) -> f64 {
        let spread = self.spread.to_f64().unwrap_or(0.0);
        if spread == 0.0 {
            return 0.0;
        }
        let sigma = SIGMA_FRACTION * spread;
        (-(distance * distance) / (2.0 * sigma * sigma)).exp() * PEAK_DENSITY
    }

    /// Samples the full distribution from `center - spread` to
    /// `center + spread` in `spread / 20` steps.
    pub fn distribution(&mut self) -> Vec<LiquidityPoint> {
        let center = self.center.to_f64().unwrap_or(0.0);
        let spread = self.spread.to_f64().unwrap_or(0.0);
        let step = spread / f64::from(HALF_STEPS);

        let mut points = Vec::with_capacity((2 * HALF_STEPS + 1) as usize);
        for i in -HALF_STEPS..=HALF_STEPS {
            let price = center + f64::from(i) * step;
            let density = self.density_at((price - center).abs())
                + self.rng.random::<f64>() * self.noise_max;
            points.push(LiquidityPoint {
                price: Decimal::from_f64(price).unwrap_or(Decimal::ZERO),
                density: Decimal::from_f64(density).unwrap_or(Decimal::ZERO),
            });
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_distribution_shape() {
        let mut model = GaussianDensity::new(dec!(3026.58), dec!(1000), 9);
        let points = model.distribution();

        assert_eq!(points.len(), 41);
        assert!((points[0].price - dec!(2026.58)).abs() < dec!(0.01));
        assert!((points[40].price - dec!(4026.58)).abs() < dec!(0.01));
    }

    #[test]
    fn test_density_peaks_near_center() {
        let mut model = GaussianDensity::new(dec!(3000), dec!(1000), 9);
        let points = model.distribution();

        let peak = points
            .iter()
            .max_by(|a, b| a.density.cmp(&b.density))
            .unwrap();
        // Noise can shift the winner a few bars, never past one sigma.
        assert!((peak.price - dec!(3000)).abs() <= dec!(300));

        // Tails carry noise only, far below the peak.
        assert!(points[0].density < peak.density / Decimal::TWO);
        assert!(points[40].density < peak.density / Decimal::TWO);
    }

    #[test]
    fn test_same_seed_reproduces_distribution() {
        let mut a = GaussianDensity::new(dec!(3000), dec!(1000), 4);
        let mut b = GaussianDensity::new(dec!(3000), dec!(1000), 4);
        assert_eq!(a.distribution(), b.distribution());
    }
}
