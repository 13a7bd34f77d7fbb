//! Foundation types and traits for flick.
//!
//! This crate contains the surface-agnostic types shared by all flick crates:
//! pointer input events, viewport geometry, per-frame output, the sink trait
//! implemented by render adapters, physics configuration, and error types.

pub mod backend;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
