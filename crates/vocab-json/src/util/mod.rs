//! Parsing and formatting utilities for literal value kinds.

pub mod datetime;
pub mod duration;
