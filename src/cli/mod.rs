//! CLI surface for the `mxc` binary: argument parsing and the leveled
//! display macros `main.rs` drives the run loop with.

#[macro_use]
pub mod constants;
pub mod args;
