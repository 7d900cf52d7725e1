//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (validation errors)
//! - `garment` - The garment record and its boundary validation
//! - `scoring` - Compatibility and fairness calculators with text reports
//! - `tools` - Tool definitions and call/response types for the agent
//! - `dialogue` - Prompt templates and dialogue turns

pub mod dialogue;
pub mod foundation;
pub mod garment;
pub mod scoring;
pub mod tools;
