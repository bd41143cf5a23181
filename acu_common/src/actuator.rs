//! Actuator request and response types.
//!
//! The request is produced by the upstream planner each tick; the
//! response reports what was actually applied after the safety envelope,
//! for telemetry and downstream feedback loops.

use serde::Serialize;

/// Longitudinal control phase tag from the upstream planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LongControlState {
    /// Longitudinal control inactive.
    #[default]
    Off,
    /// Closed-loop tracking of the acceleration target.
    Pid,
    /// Bringing the vehicle to a controlled stop.
    Stopping,
    /// Launching from a standstill.
    Starting,
}

/// HUD-facing fields forwarded from the planner.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudRequest {
    /// Set speed to display [m/s].
    pub set_speed: f64,
    /// Show the take-over-steering warning.
    pub steer_warning: bool,
}

/// Desired actuation for one tick.
#[derive(Debug, Clone, Default)]
pub struct ActuatorRequest {
    /// Normalized steering command in [-1, 1].
    pub steer: f64,
    /// Target longitudinal acceleration [m/s²], signed.
    pub accel: f64,
    /// Lateral actuation requested.
    pub lat_active: bool,
    /// Longitudinal actuation requested.
    pub long_active: bool,
    /// Longitudinal control phase.
    pub long_state: LongControlState,
    /// Explicit request to cancel cruise.
    pub cruise_cancel: bool,
    /// Explicit request to resume cruise.
    pub cruise_resume: bool,
    /// Desired follow-gap setting, when the planner wants it changed.
    pub target_follow_setting: Option<u8>,
    /// HUD fields.
    pub hud: HudRequest,
}

/// Actuation actually applied this tick, after limiting.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ActuatorResponse {
    /// Applied steering command, normalized back to [-1, 1].
    pub steer_applied: f64,
    /// Acceleration target after clamping to platform bounds [m/s²].
    pub accel_applied: f64,
}
