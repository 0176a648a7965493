//! wavebake CLI library.
//!
//! This crate provides the command implementations for the `wavebake`
//! binary: running the table generation pipeline, writing the generated
//! static-data source file, and reporting the table manifest.

pub mod commands;
pub mod manifest;
