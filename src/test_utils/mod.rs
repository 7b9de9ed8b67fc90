//! Test utilities for the gasstation crate
//!
//! Scripted station fetchers and station document factories shared by the
//! unit tests.

pub mod factories;
pub mod mocks;

pub use factories::*;
pub use mocks::*;
