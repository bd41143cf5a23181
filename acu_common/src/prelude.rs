//! Prelude module for common re-exports.
//!
//! This module provides convenient re-exports of commonly used types
//! so that consumers can do `use acu_common::prelude::*;` and get the
//! most important types without listing individual paths.
//!
//! # Usage
//!
//! ```rust
//! use acu_common::prelude::*;
//! ```

use std::time::Duration;

// ─── Vehicle State ──────────────────────────────────────────────────
pub use crate::vehicle::{ButtonEvent, ButtonKind, CruiseState, GearShifter, SteerFault, VehicleState};

// ─── Actuation ──────────────────────────────────────────────────────
pub use crate::actuator::{ActuatorRequest, ActuatorResponse, HudRequest, LongControlState};

// ─── Outbound Frames ────────────────────────────────────────────────
pub use crate::frame::{BusFrame, CruiseButton, CruiseDisplayState, FrameVec};

// ─── Platform ───────────────────────────────────────────────────────
pub use crate::platform::{PlatformProfile, PlatformVariant, SteerSpeedPolicy};

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{
    ButtonParams, ControllerConfig, LockoutParams, LongitudinalParams, SteerLimits,
};

// ─── Events ─────────────────────────────────────────────────────────
pub use crate::event::{Advisory, AdvisoryVec};

// ─── Timing ─────────────────────────────────────────────────────────
pub use crate::consts::{TICK_PERIOD_MS, TICK_PERIOD_S};

/// Default control cycle period as a `Duration`.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(TICK_PERIOD_MS);
