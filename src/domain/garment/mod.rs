//! Garment module - the only domain entity.

#[allow(clippy::module_inception)]
mod garment;

pub use garment::{Garment, DEFAULT_QUALITY};
