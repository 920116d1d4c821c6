//! Shared plumbing for Aurum services: health probes, request-id
//! middleware, tracing bootstrap, and serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
