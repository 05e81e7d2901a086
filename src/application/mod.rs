//! Application layer - command and query handlers.
//!
//! Handlers orchestrate domain logic against the ports; they own the
//! use-case flow and nothing below it (no persistence details) or above
//! it (no HTTP types).

pub mod handlers;
