//! Identity provider adapters.

mod static_token;

pub use static_token::StaticTokenIdentity;
