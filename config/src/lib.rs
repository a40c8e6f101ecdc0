//! # Config Crate
//!
//! Centralized configuration constants for cone glyph generation.
//! The glyph layout and proportions are defined here so the mesh builder
//! and the WASM surface agree on buffer sizes.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{records_for_samples, GlyphConfig, RECORDS_PER_SAMPLE};
//!
//! let samples = 3;
//! assert_eq!(records_for_samples(samples), samples * RECORDS_PER_SAMPLE);
//!
//! let config = GlyphConfig::default();
//! assert_eq!(config.records_per_sample(), RECORDS_PER_SAMPLE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Renderer Compatible**: Defaults match the attribute layout the glyph shader expects

pub mod constants;
