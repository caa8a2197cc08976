//! Utility functions.
//!
//! This module provides number formatting shared by the plot annotations
//! and the status bar.

mod formatters;

pub use formatters::{format_number, format_value};
