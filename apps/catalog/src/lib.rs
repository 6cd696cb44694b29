//! # Catalog application library
//!
//! Shared by the `catalog` binary and its integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
