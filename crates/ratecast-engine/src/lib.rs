//! # Ratecast Engine
//!
//! Sequences the forward-curve pipeline per request: fetch the dated
//! workbook, decode it, refresh the stored snapshot when stale, and adjust
//! each point with the caller's spread and clamp bounds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adjust;
mod builder;
mod engine;
mod error;

pub use adjust::adjust;
pub use builder::RateEngineBuilder;
pub use engine::RateEngine;
pub use error::EngineError;
