//! Application layer - Commands, Queries, and Handlers.
//!
//! Handlers orchestrate the scoring engine and the garment agent on behalf
//! of the HTTP adapter.

pub mod agent;
pub mod handlers;
