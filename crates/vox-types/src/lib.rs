//! Foundation types for VOX BOARD.
//!
//! This crate contains the types shared by all VOX BOARD crates: the error
//! enum, the `Result` alias, and the shell configuration. It has no
//! dependency on the store or catalog crates.

pub mod config;
pub mod error;
