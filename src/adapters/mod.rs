//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Language model providers (OpenAI, Anthropic, mock)
//! - `tools` - Tool executor backed by the scoring engine
//! - `http` - axum routes for the garment API

pub mod ai;
pub mod http;
pub mod tools;
