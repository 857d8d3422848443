// Path: crates/cli/src/lib.rs

//! # Blink CLI Library
//!
//! The binary target provides the `blink` command; this library exposes the
//! testing helpers consumed by the end-to-end suite in `tests/`, chiefly
//! local HTTP stubs that stand in for remote action hosts.

pub mod testing;
