//! Windowed dataset assembly.
//!
//! The dashboard pregenerates every chart series once per session so that
//! switching time windows never re-rolls the data. Each window has its own
//! resolution and volatility profile; all series are oldest-first and the
//! price series is anchored so its newest point equals the session's current
//! price.

use crate::liquidity::{GaussianDensity, LiquidityPoint};
use crate::price_path::{PricePathGenerator, RandomWalk};
use crate::volume::{SpikyVolume, VolumeModel};
use chrono::{DateTime, Duration, Utc};
use lp_sim_domain::enums::TimeWindow;
use lp_sim_domain::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One point of a price-history series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: Price,
}

/// One bar of a volume-history series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub timestamp: DateTime<Utc>,
    pub volume: Decimal,
}

/// Per-window generation parameters.
struct WindowSpec {
    price_points_per_day: f64,
    price_volatility: f64,
    volume_points: usize,
    hourly_volume: bool,
}

fn window_spec(window: TimeWindow) -> WindowSpec {
    match window {
        TimeWindow::H24 => WindowSpec {
            price_points_per_day: 24.0,
            price_volatility: 0.002,
            volume_points: 24,
            hourly_volume: true,
        },
        TimeWindow::D7 => WindowSpec {
            price_points_per_day: 4.0,
            price_volatility: 0.008,
            volume_points: 14,
            hourly_volume: false,
        },
        TimeWindow::D30 => WindowSpec {
            price_points_per_day: 1.0,
            price_volatility: 0.02,
            volume_points: 30,
            hourly_volume: false,
        },
        TimeWindow::D90 => WindowSpec {
            price_points_per_day: 1.0,
            price_volatility: 0.05,
            volume_points: 30,
            hourly_volume: false,
        },
        TimeWindow::D180 => WindowSpec {
            price_points_per_day: 0.5,
            price_volatility: 0.1,
            volume_points: 24,
            hourly_volume: false,
        },
        TimeWindow::Y1 => WindowSpec {
            price_points_per_day: 0.2,
            price_volatility: 0.15,
            volume_points: 12,
            hourly_volume: false,
        },
    }
}

/// All chart series for one session, keyed by time window.
pub struct MarketDataSet {
    prices: HashMap<TimeWindow, Vec<PricePoint>>,
    volumes: HashMap<TimeWindow, Vec<VolumePoint>>,
    liquidity: Vec<LiquidityPoint>,
}

/// Price band covered by the liquidity distribution on each side of the
/// current price.
const LIQUIDITY_SPREAD: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

impl MarketDataSet {
    /// Generates every series from one seed. The same `(seed, now,
    /// current_price)` triple reproduces the exact same dataset.
    pub fn generate(seed: u64, now: DateTime<Utc>, current_price: Price) -> Self {
        let mut prices = HashMap::new();
        let mut volumes = HashMap::new();

        for (i, window) in TimeWindow::ALL.into_iter().enumerate() {
            let stream = seed.wrapping_add(i as u64);
            let spec = window_spec(window);
            prices.insert(
                window,
                price_series(&spec, window, current_price, now, stream),
            );
            volumes.insert(
                window,
                volume_series(&spec, window, now, stream.wrapping_add(100)),
            );
        }

        let liquidity = GaussianDensity::new(
            current_price.value,
            LIQUIDITY_SPREAD,
            seed.wrapping_add(997),
        )
        .distribution();

        Self {
            prices,
            volumes,
            liquidity,
        }
    }

    /// Price series for a window, falling back to the 30d set.
    pub fn price_series(&self, window: TimeWindow) -> &[PricePoint] {
        self.prices
            .get(&window)
            .or_else(|| self.prices.get(&TimeWindow::D30))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Volume series for a window, falling back to the 30d set.
    pub fn volume_series(&self, window: TimeWindow) -> &[VolumePoint] {
        self.volumes
            .get(&window)
            .or_else(|| self.volumes.get(&TimeWindow::D30))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn liquidity_distribution(&self) -> &[LiquidityPoint] {
        &self.liquidity
    }

    /// Sum of the volume bars in a window.
    pub fn total_volume(&self, window: TimeWindow) -> Decimal {
        self.volume_series(window).iter().map(|p| p.volume).sum()
    }
}

fn price_series(
    spec: &WindowSpec,
    window: TimeWindow,
    current_price: Price,
    now: DateTime<Utc>,
    seed: u64,
) -> Vec<PricePoint> {
    let days = f64::from(window.days());
    let steps = (days * spec.price_points_per_day).floor() as usize;

    let mut walk = RandomWalk::seeded(current_price.value, spec.price_volatility, seed);
    let mut path = walk.generate(steps);
    // The walk runs backwards in time: reversing anchors the newest point to
    // the session's current price.
    path.reverse();

    path.into_iter()
        .enumerate()
        .map(|(idx, price)| {
            let back = (steps - idx) as f64 / spec.price_points_per_day;
            let offset_secs = (back * 86_400.0).round() as i64;
            PricePoint {
                timestamp: now - Duration::seconds(offset_secs),
                price,
            }
        })
        .collect()
}

fn volume_series(
    spec: &WindowSpec,
    window: TimeWindow,
    now: DateTime<Utc>,
    seed: u64,
) -> Vec<VolumePoint> {
    let days = f64::from(window.days());
    let points = spec.volume_points;
    let mut model = SpikyVolume::new(seed);

    (0..=points)
        .rev()
        .map(|i| {
            let offset = if spec.hourly_volume {
                Duration::hours(i as i64)
            } else {
                let back_days = i as f64 / points as f64 * days;
                Duration::seconds((back_days * 86_400.0).round() as i64)
            };
            VolumePoint {
                timestamp: now - offset,
                volume: model.next_volume(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dataset() -> MarketDataSet {
        MarketDataSet::generate(42, Utc::now(), Price::new(dec!(3026.58)))
    }

    #[test]
    fn test_series_lengths_match_window_specs() {
        let data = dataset();

        assert_eq!(data.price_series(TimeWindow::H24).len(), 25);
        assert_eq!(data.price_series(TimeWindow::D7).len(), 29);
        assert_eq!(data.price_series(TimeWindow::D30).len(), 31);
        assert_eq!(data.price_series(TimeWindow::D90).len(), 91);
        assert_eq!(data.price_series(TimeWindow::D180).len(), 91);
        assert_eq!(data.price_series(TimeWindow::Y1).len(), 74);

        assert_eq!(data.volume_series(TimeWindow::H24).len(), 25);
        assert_eq!(data.volume_series(TimeWindow::D7).len(), 15);
        assert_eq!(data.volume_series(TimeWindow::Y1).len(), 13);

        assert_eq!(data.liquidity_distribution().len(), 41);
    }

    #[test]
    fn test_price_series_is_oldest_first_and_anchored() {
        let now = Utc::now();
        let data = MarketDataSet::generate(7, now, Price::new(dec!(3026.58)));

        for window in TimeWindow::ALL {
            let series = data.price_series(window);
            for pair in series.windows(2) {
                assert!(pair[0].timestamp < pair[1].timestamp);
            }
            let newest = series.last().unwrap();
            assert_eq!(newest.timestamp, now);
            assert_eq!(newest.price.value, dec!(3026.58));
        }
    }

    #[test]
    fn test_total_volume_is_positive() {
        let data = dataset();
        for window in TimeWindow::ALL {
            assert!(data.total_volume(window) > Decimal::ZERO);
        }
    }

    #[test]
    fn test_same_seed_reproduces_dataset() {
        let now = Utc::now();
        let a = MarketDataSet::generate(9, now, Price::new(dec!(3000)));
        let b = MarketDataSet::generate(9, now, Price::new(dec!(3000)));

        assert_eq!(
            a.price_series(TimeWindow::D30),
            b.price_series(TimeWindow::D30)
        );
        assert_eq!(
            a.volume_series(TimeWindow::Y1),
            b.volume_series(TimeWindow::Y1)
        );
        assert_eq!(a.liquidity_distribution(), b.liquidity_distribution());
    }
}
