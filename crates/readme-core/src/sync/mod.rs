//! Synchronization between the fragment and the README
//!
//! - `SyncEngine`: plans, checks and applies the splice
//! - `SyncPlan`: current and desired README content with a diff view
//! - `CheckReport`: whether the README is up to date

mod check;
mod engine;
mod plan;

pub use check::{CheckReport, CheckStatus};
pub use engine::{SyncEngine, SyncOptions, SyncReport};
pub use plan::SyncPlan;
