//! balgen compiler: GraphQL schema → Ballerina service type declarations.
//!
//! The pipeline lives in [`typegen`]:
//! - `classify` - record vs. service-class decision per object type
//! - `walk` - single pass over the named-type table, grouping declarations
//! - `emit` / `root` - declaration builders
//! - `descriptor` / `interfaces` - type descriptors and interface flattening
//! - `render` - the Ballerina formatter

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod typegen;

#[cfg(test)]
pub mod test_utils;

pub use typegen::{Config, FormatError, Module, compile, generate, generate_with};

/// Errors that can occur during generation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The formatter rejected the declaration tree.
    #[error("service types generation failed: {0}")]
    Generation(#[from] FormatError),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
