use lp_sim_domain::value_objects::price::Price;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Produces a price history, one point per step.
pub trait PricePathGenerator {
    /// Generates `steps` steps; the result includes the starting price, so
    /// its length is `steps + 1`.
    fn generate(&mut self, steps: usize) -> Vec<Price>;
}

/// Multiplicative uniform random walk.
///
/// Each step scales the price by `1 + (u - 0.5) * volatility` with
/// `u ~ Uniform[0, 1)`, so per-step drift is zero and the relative move is
/// bounded by half the volatility parameter.
pub struct RandomWalk {
    pub initial_price: Decimal,
    /// Full width of the per-step relative move, e.g. `0.02` for ±1%.
    pub volatility: f64,
    rng: StdRng,
}

impl RandomWalk {
    pub fn new(initial_price: Decimal, volatility: f64) -> Self {
        Self {
            initial_price,
            volatility,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible walk for tests and replayable dashboards.
    pub fn seeded(initial_price: Decimal, volatility: f64, seed: u64) -> Self {
        Self {
            initial_price,
            volatility,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PricePathGenerator for RandomWalk {
    fn generate(&mut self, steps: usize) -> Vec<Price> {
        let mut prices = Vec::with_capacity(steps + 1);
        prices.push(Price::new(self.initial_price));

        // Stepping runs in f64; Decimal only at the domain boundary.
        let mut current = self.initial_price.to_f64().unwrap_or(0.0);

        for _ in 0..steps {
            let u: f64 = self.rng.random();
            current *= 1.0 + (u - 0.5) * self.volatility;
            prices.push(Price::new(
                Decimal::from_f64(current).unwrap_or(Decimal::ZERO),
            ));
        }

        prices
    }
}

/// Fixed, caller-supplied path. Ignores the requested step count.
pub struct DeterministicPricePath {
    pub prices: Vec<Price>,
}

impl DeterministicPricePath {
    pub fn new(prices: Vec<Price>) -> Self {
        Self { prices }
    }
}

impl PricePathGenerator for DeterministicPricePath {
    fn generate(&mut self, _steps: usize) -> Vec<Price> {
        self.prices.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_walk_length_and_start() {
        let mut walk = RandomWalk::seeded(dec!(3026.58), 0.02, 7);
        let path = walk.generate(30);

        assert_eq!(path.len(), 31);
        assert_eq!(path[0].value, dec!(3026.58));
    }

    #[test]
    fn test_walk_moves_unless_volatility_is_zero() {
        let mut walk = RandomWalk::seeded(dec!(100), 0.02, 1);
        let path = walk.generate(20);
        assert!(path.iter().any(|p| p.value != dec!(100)));

        let mut flat = RandomWalk::seeded(dec!(100), 0.0, 1);
        let path = flat.generate(20);
        assert!(path.iter().all(|p| p.value == dec!(100)));
    }

    #[test]
    fn test_step_size_is_bounded() {
        let vol = 0.05;
        let mut walk = RandomWalk::seeded(dec!(100), vol, 42);
        let path = walk.generate(200);

        for pair in path.windows(2) {
            let prev = pair[0].value.to_f64().unwrap();
            let next = pair[1].value.to_f64().unwrap();
            let rel = (next - prev).abs() / prev;
            assert!(rel <= vol / 2.0 + 1e-9);
        }
    }

    #[test]
    fn test_same_seed_reproduces_path() {
        let mut a = RandomWalk::seeded(dec!(100), 0.02, 99);
        let mut b = RandomWalk::seeded(dec!(100), 0.02, 99);
        assert_eq!(a.generate(50), b.generate(50));
    }

    #[test]
    fn test_deterministic_path_returns_fixed_prices() {
        let prices = vec![Price::new(dec!(1)), Price::new(dec!(2))];
        let mut path = DeterministicPricePath::new(prices.clone());
        assert_eq!(path.generate(100), prices);
    }
}
