//! # Dashboard Core Types
//!
//! This crate defines the data-transfer records exchanged with the negotiation
//! platform's REST API. The backend owns every one of these shapes; this crate
//! only reads and reshapes them, it never mutates the authoritative copy.
//!
//! As a Layer 0 crate it has no knowledge of HTTP, configuration, or rendering.

pub mod enums;
pub mod error;
pub mod records;

// Re-export the core types to provide a clean public API.
pub use enums::{DimensionKind, Trend};
pub use error::CoreError;
pub use records::{
    BenchmarkResult, ConflictRecord, EvaluationRecord, FeasibilityAnalysis, FeasibilityDimension,
    NegotiationRecord, ProposalRecord, UserProfile,
};
