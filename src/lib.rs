//! Rellenar - fixed-array populate, print, and offset-sum demonstrator
//!
//! This library provides the core functionality for the populate/print/compute
//! sequence: a fixed-capacity integer container, a pure offset-sum helper, and
//! a runner that writes the reference output to any `io::Write`.

pub mod cli;
pub mod fixed_array;
pub mod runner;
