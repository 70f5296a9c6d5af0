use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named range widths selectable from the dashboard, as percent of full
/// width around the current price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangePreset {
    Narrow,
    Balanced,
    Wide,
    Full,
}

impl RangePreset {
    /// Full band width in percent; half is applied to each side.
    pub fn width_percent(&self) -> Decimal {
        match self {
            Self::Narrow => Decimal::from(10),
            Self::Balanced => Decimal::from(20),
            Self::Wide => Decimal::from(50),
            Self::Full => Decimal::ONE_HUNDRED,
        }
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Narrow => "narrow",
            Self::Balanced => "balanced",
            Self::Wide => "wide",
            Self::Full => "full",
        };
        f.write_str(label)
    }
}

impl FromStr for RangePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "narrow" => Ok(Self::Narrow),
            "balanced" => Ok(Self::Balanced),
            "wide" => Ok(Self::Wide),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown range preset: {other}")),
        }
    }
}

/// Chart lookback windows offered by the time selectors.
///
/// These only choose which pregenerated series is displayed; allocation and
/// fee math never depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    H24,
    D7,
    D30,
    D90,
    D180,
    Y1,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 6] = [
        Self::H24,
        Self::D7,
        Self::D30,
        Self::D90,
        Self::D180,
        Self::Y1,
    ];

    pub fn days(&self) -> u32 {
        match self {
            Self::H24 => 1,
            Self::D7 => 7,
            Self::D30 => 30,
            Self::D90 => 90,
            Self::D180 => 180,
            Self::Y1 => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::H24 => "24h",
            Self::D7 => "7d",
            Self::D30 => "30d",
            Self::D90 => "90d",
            Self::D180 => "180d",
            Self::Y1 => "1y",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "24h" => Ok(Self::H24),
            "7d" => Ok(Self::D7),
            "30d" => Ok(Self::D30),
            "90d" => Ok(Self::D90),
            "180d" => Ok(Self::D180),
            "1y" => Ok(Self::Y1),
            other => Err(format!("unknown time window: {other}")),
        }
    }
}
