//! Immutable reference data: process domains, questions, maturity levels.
//!
//! The catalog is the fixed, ordered set of all questions across all
//! domains. Both the scoring engine (to enumerate expected questions)
//! and the report assembler (to resolve level titles) consult it.

mod maturity_level;
mod process_domain;
mod question;
#[allow(clippy::module_inception)]
mod catalog;

pub use catalog::{reference_catalog, Catalog};
pub use maturity_level::{Level, MaturityLevel, MATURITY_LEVELS};
pub use process_domain::ProcessDomain;
pub use question::Question;
