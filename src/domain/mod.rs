//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Immutable reference data: domains, questions, maturity levels
//! - `scoring` - Answer sets and the pure score aggregation engine
//! - `assessment` - The persisted assessment record and its errors
//! - `report` - Recommendation policy and report assembly

pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod report;
pub mod scoring;
