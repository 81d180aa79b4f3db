//! Trading fee schedule.
//!
//! The exchange publishes volume-tiered maker/taker rates keyed by 30-day
//! cumulative volume in BTC. Breakpoints are ascending and the first is
//! always zero, so every volume falls into exactly one tier.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One fee tier: the rate that applies at and above `volume`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeTier {
    /// Cumulative 30-day volume breakpoint, in BTC.
    pub volume: Decimal,
    /// Fee rate as a fraction (0.001 = 0.1%).
    pub rate: Decimal,
}

/// The exchange's trading fee schedule.
#[derive(Debug, Clone)]
pub struct TradingFees {
    /// Whether the schedule is tier-based for the default rates.
    pub tier_based: bool,
    /// Whether rates are percentages of traded value.
    pub percentage: bool,
    /// Default taker rate.
    pub taker: Decimal,
    /// Default maker rate.
    pub maker: Decimal,
    /// Taker tiers, ascending by volume.
    pub taker_tiers: Vec<FeeTier>,
    /// Maker tiers, ascending by volume.
    pub maker_tiers: Vec<FeeTier>,
}

impl TradingFees {
    /// The published Bitpanda Pro schedule.
    pub fn bitpanda() -> Self {
        Self {
            tier_based: false,
            percentage: true,
            taker: dec!(0.001),
            maker: dec!(0.001),
            taker_tiers: vec![
                FeeTier { volume: dec!(0), rate: dec!(0.0015) },
                FeeTier { volume: dec!(100), rate: dec!(0.0013) },
                FeeTier { volume: dec!(250), rate: dec!(0.0013) },
                FeeTier { volume: dec!(1000), rate: dec!(0.0010) },
                FeeTier { volume: dec!(5000), rate: dec!(0.0009) },
                FeeTier { volume: dec!(10000), rate: dec!(0.00075) },
                FeeTier { volume: dec!(20000), rate: dec!(0.00065) },
            ],
            maker_tiers: vec![
                FeeTier { volume: dec!(0), rate: dec!(0.0010) },
                FeeTier { volume: dec!(100), rate: dec!(0.0010) },
                FeeTier { volume: dec!(250), rate: dec!(0.0009) },
                FeeTier { volume: dec!(1000), rate: dec!(0.00075) },
                FeeTier { volume: dec!(5000), rate: dec!(0.0006) },
                FeeTier { volume: dec!(10000), rate: dec!(0.0005) },
                FeeTier { volume: dec!(20000), rate: dec!(0.0005) },
            ],
        }
    }

    /// Returns the taker rate for a cumulative 30-day volume.
    pub fn taker_rate_for_volume(&self, volume: Decimal) -> Decimal {
        Self::rate_for_volume(&self.taker_tiers, volume).unwrap_or(self.taker)
    }

    /// Returns the maker rate for a cumulative 30-day volume.
    pub fn maker_rate_for_volume(&self, volume: Decimal) -> Decimal {
        Self::rate_for_volume(&self.maker_tiers, volume).unwrap_or(self.maker)
    }

    fn rate_for_volume(tiers: &[FeeTier], volume: Decimal) -> Option<Decimal> {
        tiers
            .iter()
            .take_while(|tier| tier.volume <= volume)
            .last()
            .map(|tier| tier.rate)
    }
}
