//! Core domain types for the MEXO market maker.
//!
//! This crate provides the types shared by the connector metadata and the
//! quoting strategy:
//! - `Price`, `Size`: precision-safe numeric types
//! - `OrderSide`, `OrderType`, `TimeInForce`, `ClientOrderId`: order enums and ids
//! - `OrderState`: canonical order lifecycle states
//! - Executor snapshots and create/stop actions exchanged with the host
//! - Field descriptor tables and the interactive collection pass

pub mod decimal;
pub mod error;
pub mod execution;
pub mod executor;
pub mod field;
pub mod order;
pub mod secret;

pub use decimal::{Price, Size};
pub use error::{CoreError, Result};
pub use execution::OrderState;
pub use executor::{
    CreateExecutorAction, ExecutorId, ExecutorInfo, PositionExecutorConfig, StopExecutorAction,
    TripleBarrierConfig,
};
pub use field::{collect_fields, Answers, FieldDescriptor, Prompter, StdioPrompter};
pub use order::{ClientOrderId, OrderSide, OrderType, TimeInForce};
pub use secret::SecretString;
