//! Shared application domain and gateway modules.

pub mod context;
pub mod domain;
pub mod gateway;
