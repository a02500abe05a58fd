//! Receipt intake, loyalty-points scoring, and identifier-keyed lookup.
//!
//! Scoring is a pure function of the receipt. The store scores each receipt
//! once at submission and serves the recorded points afterwards.

pub mod domain;
pub mod router;
pub mod scoring;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId, ScoredReceipt};
pub use router::{receipt_router, PointsResponse, ProcessReceiptResponse};
pub use scoring::{score, score_breakdown, PointsBreakdown, ScoreComponent, ScoringRule};
pub use store::{ReceiptStore, StoreError};
