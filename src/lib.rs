//! Red String - garment swap agent service.
//!
//! Scores how well two garments match, judges whether a swap is fair, and
//! voices the swap as a short dialogue between the garments through a
//! tool-calling language model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
