//! Integration tests for the Kuramoto simulation engine.
//!
//! These tests drive the public API end to end with deterministic inputs:
//! - Coupling behaviour (no coupling, synchronization, update modes)
//! - Symmetry under relabeling of oscillators
//! - Lockstep histories through the frame driver
//! - Sampling determinism and reference traces
//! - Boundary rejection of invalid inputs

mod helpers;
mod coupling_tests;
mod driver_tests;
mod edge_case_tests;
