//! Utility functions and helpers.

pub mod http;
pub mod number;
pub mod text;
