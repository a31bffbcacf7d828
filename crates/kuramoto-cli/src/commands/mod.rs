//! Command handlers.

pub mod animate;
