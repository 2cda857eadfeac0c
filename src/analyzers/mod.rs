//! History visualization.
//!
//! Reads the append-only log back, sums bikes available per fetch timestamp
//! and plots the totals over time.

pub mod aggregate;
pub mod chart;
pub mod history;
pub mod types;
pub mod visualize;
