//! Use-case handlers.

pub mod assessment;
