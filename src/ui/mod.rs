//! UI utilities for terminal output
//!
//! Spinners draw on stderr so stdout carries only the report.

mod spinner;

pub use spinner::{clear_spinner, create_spinner, finish_spinner};
