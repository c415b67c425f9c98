//! Input events produced by the polling step.
pub mod input;
