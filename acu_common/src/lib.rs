//! ACU Common Library
//!
//! This crate provides the shared vocabulary for all ACU workspace crates:
//! the per-tick vehicle state snapshot, the actuator request/response pair,
//! outbound bus-frame descriptors, platform profiles, and the controller
//! configuration structures.
//!
//! # Module Structure
//!
//! - [`vehicle`] - Sensed vehicle state snapshot (input, read-only per tick)
//! - [`actuator`] - Actuator request and applied-actuation response
//! - [`frame`] - Semantic outbound bus-frame descriptors
//! - [`platform`] - Platform variants, profiles, and steer-speed policies
//! - [`config`] - Controller configuration structures with validation
//! - [`event`] - Advisory events surfaced to the external event channel
//! - [`consts`] - System-wide constants
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use acu_common::prelude::*;
//! ```

pub mod actuator;
pub mod config;
pub mod consts;
pub mod event;
pub mod frame;
pub mod platform;
pub mod prelude;
pub mod vehicle;
