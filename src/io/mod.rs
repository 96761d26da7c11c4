//! Input/output operations, CLI pipeline, and error handling

/// Command-line interface and run pipeline
pub mod cli;
/// Runtime constants and configuration defaults
pub mod configuration;
/// Error types for all generation operations
pub mod error;
/// Script-loadable tile manifest emission
pub mod manifest;
/// Multipage PDF assembly
pub mod pdf;
/// Progress bar management for generation and merging
pub mod progress;
/// Interactive operator prompts
pub mod prompt;
