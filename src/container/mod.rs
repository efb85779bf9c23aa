//! Structured containers.
//!
//! - [`FixedArray`] - length fixed at construction, all slots valid
//! - [`BoundedVec`] - logical length up to a fixed capacity, with every
//!   capacity slot materialized

mod bounded;
mod fixed;

pub use bounded::BoundedVec;
pub use fixed::FixedArray;
