//! Utility modules for common functionality

pub mod tokenizer;

// Re-export commonly used functions
pub use tokenizer::split_command_line;
