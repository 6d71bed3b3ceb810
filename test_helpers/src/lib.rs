//! Test helpers shared across crates.
//!
//! This crate provides an exit-code recorder standing in for
//! `std::process::exit` and text helpers for captured output streams.

pub mod exit;
pub mod text;
