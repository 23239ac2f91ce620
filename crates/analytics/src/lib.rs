//! # Dashboard Analytics Engine
//!
//! This crate derives the dashboard's KPI numbers from raw API records. It
//! acts as the "unbiased judge" of the platform's negotiation activity.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   HTTP or rendering. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless calculator.
//!   It takes already-fetched record slices as input and produces a
//!   `DashboardReport` as output.
//! - **Total Functions:** malformed or missing fields degrade to `0`/`None`/
//!   empty, never a panic. A degraded dashboard beats a crashed one.
//!
//! ## Public API
//!
//! - `MetricsEngine`: the main struct that contains the calculation logic.
//! - `DashboardReport`: the standardized struct holding the per-section KPIs.
//! - `stats`/`scoring`: the primitive aggregation functions.

pub mod engine;
pub mod report;
pub mod scoring;
pub mod stats;

// Re-export the key components to create a clean, public-facing API.
pub use engine::MetricsEngine;
pub use report::{
    ConflictKpis, DashboardReport, EvaluationKpis, FeasibilityKpis, NegotiationKpis, ProposalKpis,
};
pub use scoring::{derive_trend, enrich, performance_score};
pub use stats::{average, group_count_by, percentage_clamp, KeyCount};
