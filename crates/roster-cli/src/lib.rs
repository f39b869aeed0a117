//! CLI library components for the roster checker.

pub mod logging;
pub mod pipeline;
