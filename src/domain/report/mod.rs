//! Recommendation policy and report assembly.

mod assembler;
mod recommendation;

pub use assembler::{build_report, ChartPoint, Recommendation, Report};
pub use recommendation::{advisory_for, recommend, RECOMMENDATION_BANDS};
