//! # quarter-ratio
//!
//! Proportional allocation of a total across a fixed sequence of quarters:
//! learned or default ratios → rounding → remainder redistribution so the
//! quarters sum back to the total.

pub mod allocation;
pub mod board;
pub mod engine;
pub mod remainder;

pub use allocation::AllocationContext;
pub use board::QuarterBoard;
pub use engine::QuarterRatioEngine;
pub use remainder::{RemainderBreakdown, RemainderPlan};
