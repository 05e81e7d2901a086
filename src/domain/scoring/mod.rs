//! Answer sets and the pure score aggregation engine.

mod answer_set;
mod engine;

pub use answer_set::AnswerSet;
pub use engine::{compute_scores, DomainScore, ScoreCard};
