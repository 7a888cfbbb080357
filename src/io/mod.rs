//! Map code text, forum formatting, configuration and errors

/// Map code encoding and decoding
pub mod codec;
/// Generation constants and runtime configuration defaults
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Forum line wrapping, editor links and post assembly
pub mod forum;
