//! # ACU Control Unit Library
//!
//! Per-cycle actuation controller for a lane-keeping and adaptive-cruise
//! driver-assistance system. Each tick it ingests the planner's actuator
//! request and the sensed vehicle state snapshot and produces a
//! safety-limited steering command, a longitudinal torque/deceleration
//! command, cruise-button emulation, and the periodic diagnostic/HUD and
//! watchdog frames — all as semantic bus-frame descriptors for the
//! external encoder.
//!
//! ## Layers
//!
//! 1. **Lockout gate** — steering-enable state machine with a mandatory
//!    disable cooldown ([`lockout`])
//! 2. **Steering shaper** — driver-override-aware slew-limited torque
//!    shaping, zeroed while the gate is closed ([`steering`])
//! 3. **Longitudinal composer** — mutually exclusive regime selection
//!    and inverse-dynamics torque estimation ([`longitudinal`])
//! 4. **Periodic scheduler** — fixed-cadence keep-alive/HUD/watchdog
//!    frames ([`schedule`])
//!
//! ## Zero-Allocation Tick
//!
//! All cross-tick state is owned by [`cycle::CarController`]; the tick
//! function performs no heap allocation and never blocks. The owning
//! scheduler guarantees serialized calls at the control period.

#![deny(clippy::disallowed_types)]

pub mod buttons;
pub mod config;
pub mod cycle;
pub mod error;
pub mod lockout;
pub mod longitudinal;
pub mod schedule;
pub mod steering;

pub use cycle::{CarController, TickOutput};
pub use error::ConfigError;
