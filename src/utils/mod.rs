// Utility functions
// Helper functions for common operations

pub mod format;
pub mod username;

pub use format::{format_count_compact, format_with_separator};
pub use username::{normalize_username, UsernameInput};
