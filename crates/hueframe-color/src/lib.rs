//! hueframe Color - Hue analysis over pixel grids
//!
//! This crate provides the color-aware analysis built on `hueframe-core`:
//!
//! - **Isolation** ([`isolate`]): Binary hue-dominance masks driven by an
//!   [`IsolationProfile`]
//! - **Channel swapping** ([`swap`]): Read-both-then-write-both exchange
//!   of any two channels
//! - **Statistics** ([`analysis`]): Averages of all six channels at once
//! - **Analyzer** ([`analyzer`]): [`PixelAnalyzer`], one entry point for
//!   every operation above plus centroid, area and row cutoff

pub mod analysis;
pub mod analyzer;
pub mod error;
pub mod isolate;
pub mod swap;

// Re-export core types
pub use hueframe_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use analysis::{ChannelSummary, channel_summary};
pub use analyzer::PixelAnalyzer;
pub use isolate::{
    BASE_INTENSITY, BASE_THRESHOLD, ChannelRule, IsolationProfile, IsolationStats, isolate_color,
};
pub use swap::swap_channels;
