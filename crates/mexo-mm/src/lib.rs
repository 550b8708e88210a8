//! Symmetric multi-level ladder market making.
//!
//! Once per control-loop tick the host asks the strategy for actions:
//!
//! ```text
//! host tick → LadderStrategy.create_actions_proposal()
//!              ├─ anchor: up/down prices around the mid, one picked at random
//!              ├─ ladder: straddle pair + `level` buys below / sells above
//!              └─ CreateExecutorAction per rung        (Opening → Paused)
//!           → LadderStrategy.stop_actions_proposal()
//!              └─ StopExecutorAction per resting, unfilled executor
//!                                                      (Paused → Opening)
//! ```
//!
//! The strategy never talks to the exchange. Everything it needs from the
//! runtime comes through `StrategyHost`.

pub mod anchor;
pub mod config;
pub mod error;
pub mod host;
pub mod ladder;
pub mod strategy;

pub use anchor::{AnchorPrices, AnchorSelector, AnchorSide, FixedAnchor, RandomAnchor};
pub use config::{StopTiming, StrategyConfig};
pub use error::{MmError, MmResult};
pub use host::{filter_executors, StrategyHost};
pub use ladder::{build_ladder, Ladder, LadderParams, Rung};
pub use strategy::{init_markets, LadderStrategy, MarketSubscriptions, StrategyState};
