//! Anchor prices around the mid and the choice between them.

use mexo_core::Price;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places anchors are truncated to.
pub const ANCHOR_DECIMALS: u32 = 4;

/// Nudge added to the mid before truncating the upper anchor.
pub const ANCHOR_NUDGE: Decimal = dec!(0.0001);

/// Which anchor centres the straddle pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSide {
    Up,
    Down,
}

/// The two reference prices a ladder grows from.
///
/// Sells climb from `up`, buys descend from `down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPrices {
    pub up: Price,
    pub down: Price,
}

impl AnchorPrices {
    pub fn new(up: Price, down: Price) -> Self {
        Self { up, down }
    }

    /// `up = trunc4(mid + 0.0001)`, `down = trunc4(mid)`.
    ///
    /// For a positive mid the two are always exactly one 0.0001 step apart.
    pub fn from_mid(mid: Price) -> Self {
        Self {
            up: (mid + ANCHOR_NUDGE).truncate_dp(ANCHOR_DECIMALS),
            down: mid.truncate_dp(ANCHOR_DECIMALS),
        }
    }

    pub fn price(&self, side: AnchorSide) -> Price {
        match side {
            AnchorSide::Up => self.up,
            AnchorSide::Down => self.down,
        }
    }
}

/// Source of the up/down choice.
pub trait AnchorSelector {
    fn select(&mut self) -> AnchorSide;
}

/// Uniform coin flip.
#[derive(Debug, Clone)]
pub struct RandomAnchor {
    rng: StdRng,
}

impl RandomAnchor {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for replaying a session.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAnchor {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl AnchorSelector for RandomAnchor {
    fn select(&mut self) -> AnchorSide {
        if self.rng.gen_bool(0.5) {
            AnchorSide::Up
        } else {
            AnchorSide::Down
        }
    }
}

/// Always picks the same side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnchor(pub AnchorSide);

impl AnchorSelector for FixedAnchor {
    fn select(&mut self) -> AnchorSide {
        self.0
    }
}
