//! MEA Maturity - COBIT 5 MEA Process Maturity Self-Assessment
//!
//! This crate implements questionnaire scoring, assessment persistence,
//! and report assembly for the three MEA process domains.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
