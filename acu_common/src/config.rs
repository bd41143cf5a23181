//! Controller configuration structures.
//!
//! All config types use `serde::Deserialize` for TOML loading. Every
//! numeric tunable carries a default and an explicit validated range.
//! The regime constants are empirically tuned per platform and stay
//! configuration — they are not derived from a formula.

use serde::{Deserialize, Serialize};

use crate::consts::STD_CARGO_KG;
use crate::platform::PlatformVariant;

// ─── Steering Limits ────────────────────────────────────────────────

/// Steering torque envelope and slew limits [platform torque units].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SteerLimits {
    /// Maximum commanded torque magnitude.
    #[serde(default = "default_steer_max")]
    pub max: i16,
    /// Maximum per-tick increase in torque magnitude.
    #[serde(default = "default_steer_delta_up")]
    pub delta_up: i16,
    /// Maximum per-tick decrease in torque magnitude.
    #[serde(default = "default_steer_delta_down")]
    pub delta_down: i16,
    /// Allowed deviation from the measured EPS torque before the
    /// driver-override envelope clamps the command.
    #[serde(default = "default_steer_error_max")]
    pub error_max: i16,
}

fn default_steer_max() -> i16 {
    261
}
fn default_steer_delta_up() -> i16 {
    3
}
fn default_steer_delta_down() -> i16 {
    3
}
fn default_steer_error_max() -> i16 {
    80
}

impl Default for SteerLimits {
    fn default() -> Self {
        Self {
            max: default_steer_max(),
            delta_up: default_steer_delta_up(),
            delta_down: default_steer_delta_down(),
            error_max: default_steer_error_max(),
        }
    }
}

impl SteerLimits {
    /// Validate parameter bounds.
    pub fn validate(&self) -> Result<(), String> {
        if self.max <= 0 {
            return Err(format!("steer.max {} must be positive", self.max));
        }
        if self.delta_up <= 0 || self.delta_up > self.max {
            return Err(format!(
                "steer.delta_up {} out of range [1, {}]",
                self.delta_up, self.max
            ));
        }
        if self.delta_down <= 0 || self.delta_down > self.max {
            return Err(format!(
                "steer.delta_down {} out of range [1, {}]",
                self.delta_down, self.max
            ));
        }
        if self.error_max <= 0 {
            return Err(format!(
                "steer.error_max {} must be positive",
                self.error_max
            ));
        }
        Ok(())
    }
}

// ─── Lockout Gate ───────────────────────────────────────────────────

/// Steering lockout gate parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LockoutParams {
    /// Ticks the gate must stay closed after a disable before it may
    /// reopen. The EPS faults if re-enabled faster.
    #[serde(default = "default_cooldown_ticks")]
    pub cooldown_ticks: u32,
}

fn default_cooldown_ticks() -> u32 {
    200
}

impl Default for LockoutParams {
    fn default() -> Self {
        Self {
            cooldown_ticks: default_cooldown_ticks(),
        }
    }
}

impl LockoutParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.cooldown_ticks == 0 || self.cooldown_ticks > 10_000 {
            return Err(format!(
                "lockout.cooldown_ticks {} out of range [1, 10000]",
                self.cooldown_ticks
            ));
        }
        Ok(())
    }
}

// ─── Longitudinal Tunables ──────────────────────────────────────────

/// Longitudinal regime constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LongitudinalParams {
    /// Acceleration target floor [m/s²].
    #[serde(default = "default_accel_min")]
    pub accel_min: f64,
    /// Acceleration target ceiling [m/s²].
    #[serde(default = "default_accel_max")]
    pub accel_max: f64,
    /// Targets below this enter the hard-brake regime [m/s²].
    #[serde(default = "default_brake_threshold")]
    pub brake_threshold: f64,
    /// Maximum per-tick change of the commanded deceleration [m/s²].
    #[serde(default = "default_brake_ramp")]
    pub brake_ramp: f64,
    /// Recovery dead-band: a less-negative target must differ by more
    /// than this before the commanded deceleration follows it [m/s²].
    #[serde(default = "default_brake_deadband")]
    pub brake_deadband: f64,
    /// Look-ahead window of the drive-torque estimate [s].
    #[serde(default = "default_sample_window")]
    pub sample_window_s: f64,
    /// Driveline efficiency fraction.
    #[serde(default = "default_drivetrain_efficiency")]
    pub drivetrain_efficiency: f64,
    /// Energy-rate to torque-at-rpm conversion constant.
    #[serde(default = "default_rpm_torque_constant")]
    pub rpm_torque_constant: f64,
    /// Computed torque delta floor [Nm].
    #[serde(default = "default_torque_floor")]
    pub torque_floor: f64,
    /// Computed torque delta ceiling [Nm].
    #[serde(default = "default_torque_ceiling")]
    pub torque_ceiling: f64,
    /// Fixed command while the engine reports negative (braking) torque [Nm].
    #[serde(default = "default_engine_brake_torque")]
    pub engine_brake_torque: f64,
    /// Gear ceiling while a regime is actively commanding the powertrain.
    #[serde(default = "default_gear_limit_active")]
    pub gear_limit_active: u8,
    /// Gear ceiling for the neutral/disengage command.
    #[serde(default = "default_gear_limit_neutral")]
    pub gear_limit_neutral: u8,
    /// Ticks the launch ("go") request stays raised on a fresh engagement.
    #[serde(default = "default_go_pulse_ticks")]
    pub go_pulse_ticks: u32,
}

fn default_accel_min() -> f64 {
    -3.5
}
fn default_accel_max() -> f64 {
    2.0
}
fn default_brake_threshold() -> f64 {
    -0.1
}
fn default_brake_ramp() -> f64 {
    0.06
}
fn default_brake_deadband() -> f64 {
    0.01
}
fn default_sample_window() -> f64 {
    0.25
}
fn default_drivetrain_efficiency() -> f64 {
    0.85
}
fn default_rpm_torque_constant() -> f64 {
    9.55414
}
fn default_torque_floor() -> f64 {
    0.01
}
fn default_torque_ceiling() -> f64 {
    20.0
}
fn default_engine_brake_torque() -> f64 {
    15.0
}
fn default_gear_limit_active() -> u8 {
    8
}
fn default_gear_limit_neutral() -> u8 {
    9
}
fn default_go_pulse_ticks() -> u32 {
    10
}

impl Default for LongitudinalParams {
    fn default() -> Self {
        Self {
            accel_min: default_accel_min(),
            accel_max: default_accel_max(),
            brake_threshold: default_brake_threshold(),
            brake_ramp: default_brake_ramp(),
            brake_deadband: default_brake_deadband(),
            sample_window_s: default_sample_window(),
            drivetrain_efficiency: default_drivetrain_efficiency(),
            rpm_torque_constant: default_rpm_torque_constant(),
            torque_floor: default_torque_floor(),
            torque_ceiling: default_torque_ceiling(),
            engine_brake_torque: default_engine_brake_torque(),
            gear_limit_active: default_gear_limit_active(),
            gear_limit_neutral: default_gear_limit_neutral(),
            go_pulse_ticks: default_go_pulse_ticks(),
        }
    }
}

impl LongitudinalParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.accel_min >= 0.0 || self.accel_min < -10.0 {
            return Err(format!(
                "longitudinal.accel_min {} out of range [-10, 0)",
                self.accel_min
            ));
        }
        if self.accel_max <= 0.0 || self.accel_max > 5.0 {
            return Err(format!(
                "longitudinal.accel_max {} out of range (0, 5]",
                self.accel_max
            ));
        }
        if self.brake_threshold >= 0.0 || self.brake_threshold < self.accel_min {
            return Err(format!(
                "longitudinal.brake_threshold {} out of range [{}, 0)",
                self.brake_threshold, self.accel_min
            ));
        }
        if self.brake_ramp <= 0.0 {
            return Err("longitudinal.brake_ramp must be positive".to_string());
        }
        if self.brake_deadband < 0.0 || self.brake_deadband >= self.brake_ramp {
            return Err(format!(
                "longitudinal.brake_deadband {} out of range [0, brake_ramp)",
                self.brake_deadband
            ));
        }
        if self.sample_window_s <= 0.0 || self.sample_window_s > 2.0 {
            return Err(format!(
                "longitudinal.sample_window_s {} out of range (0, 2]",
                self.sample_window_s
            ));
        }
        if self.drivetrain_efficiency <= 0.0 || self.drivetrain_efficiency > 1.0 {
            return Err(format!(
                "longitudinal.drivetrain_efficiency {} out of range (0, 1]",
                self.drivetrain_efficiency
            ));
        }
        if self.rpm_torque_constant <= 0.0 {
            return Err("longitudinal.rpm_torque_constant must be positive".to_string());
        }
        if self.torque_floor <= 0.0 || self.torque_floor >= self.torque_ceiling {
            return Err(format!(
                "longitudinal.torque_floor {} out of range (0, torque_ceiling)",
                self.torque_floor
            ));
        }
        if self.engine_brake_torque <= 0.0 {
            return Err("longitudinal.engine_brake_torque must be positive".to_string());
        }
        if self.gear_limit_active == 0 || self.gear_limit_active > self.gear_limit_neutral {
            return Err(format!(
                "longitudinal.gear_limit_active {} out of range [1, gear_limit_neutral]",
                self.gear_limit_active
            ));
        }
        Ok(())
    }
}

// ─── Button Policy ──────────────────────────────────────────────────

/// Cruise-button emulation policy tunables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ButtonParams {
    /// Auto-resume fires only when the button counter is a multiple of
    /// this modulus, bounding the resume-press rate.
    #[serde(default = "default_auto_resume_modulus")]
    pub auto_resume_modulus: u32,
    /// Speeds below this count as standstill [m/s].
    #[serde(default = "default_standstill_speed")]
    pub standstill_speed: f64,
}

fn default_auto_resume_modulus() -> u32 {
    12
}
fn default_standstill_speed() -> f64 {
    0.1
}

impl Default for ButtonParams {
    fn default() -> Self {
        Self {
            auto_resume_modulus: default_auto_resume_modulus(),
            standstill_speed: default_standstill_speed(),
        }
    }
}

impl ButtonParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.auto_resume_modulus == 0 {
            return Err("buttons.auto_resume_modulus must be positive".to_string());
        }
        if self.standstill_speed <= 0.0 || self.standstill_speed > 1.0 {
            return Err(format!(
                "buttons.standstill_speed {} out of range (0, 1]",
                self.standstill_speed
            ));
        }
        Ok(())
    }
}

// ─── Top-Level Config ───────────────────────────────────────────────

/// Complete controller configuration.
///
/// Loaded from TOML at session start. Immutable for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Vehicle variant; selects the platform profile. Unsupported
    /// variants fail deserialization, before any control code runs.
    pub variant: PlatformVariant,
    /// Cargo allowance added to the variant's curb mass [kg].
    #[serde(default = "default_cargo_mass")]
    pub cargo_mass_kg: f64,
    #[serde(default)]
    pub steer: SteerLimits,
    #[serde(default)]
    pub lockout: LockoutParams,
    #[serde(default)]
    pub longitudinal: LongitudinalParams,
    #[serde(default)]
    pub buttons: ButtonParams,
}

fn default_cargo_mass() -> f64 {
    STD_CARGO_KG
}

impl ControllerConfig {
    /// A configuration with all defaults for the given variant.
    pub fn for_variant(variant: PlatformVariant) -> Self {
        Self {
            variant,
            cargo_mass_kg: default_cargo_mass(),
            steer: SteerLimits::default(),
            lockout: LockoutParams::default(),
            longitudinal: LongitudinalParams::default(),
            buttons: ButtonParams::default(),
        }
    }

    /// Validate all parameter bounds.
    pub fn validate(&self) -> Result<(), String> {
        if self.cargo_mass_kg < 0.0 || self.cargo_mass_kg > 2000.0 {
            return Err(format!(
                "cargo_mass_kg {} out of range [0, 2000]",
                self.cargo_mass_kg
            ));
        }
        self.steer.validate()?;
        self.lockout.validate()?;
        self.longitudinal.validate()?;
        self.buttons.validate()?;
        Ok(())
    }
}
