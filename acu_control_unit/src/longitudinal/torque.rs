//! Inverse-dynamics drive torque estimate.
//!
//! The powertrain command is a torque delta from the engine's current
//! output, so the estimate works backwards from the kinetic energy the
//! vehicle must gain over the look-ahead window: the energy rate at the
//! current engine speed gives the required torque, corrected for
//! torque-converter slip when the driveline is unlocked.

use acu_common::config::LongitudinalParams;
use acu_common::consts::RPM_EPSILON;

/// Inputs to the torque estimate for one tick.
#[derive(Debug, Clone, Copy)]
pub struct TorqueInput {
    /// Ego speed [m/s].
    pub v_ego: f64,
    /// Measured ego acceleration [m/s²].
    pub a_ego: f64,
    /// Acceleration target [m/s²], already clamped.
    pub accel_target: f64,
    /// Engine speed [rpm].
    pub engine_rpm: f64,
    /// Current engine output torque [Nm].
    pub engine_torque: f64,
    /// Torque converter locked.
    pub tc_locked: bool,
    /// Torque-converter slip fraction (1.0 = fully coupled).
    pub tc_slip_ratio: f64,
}

/// Closed-form kinetic-energy torque estimate, before slip correction
/// and clamping.
///
/// `v_des = v_ego + (a_target − a_ego)·T`,
/// `ΔKE = ½·m·(v_des² − v_ego²)`,
/// `τ = ΔKE·K·T / (η·rpm + ε)`.
///
/// The ε keeps the denominator nonzero at stall; the caller clamps the
/// result before emission.
pub fn raw_drive_torque(
    mass_kg: f64,
    v_ego: f64,
    a_ego: f64,
    accel_target: f64,
    engine_rpm: f64,
    params: &LongitudinalParams,
) -> f64 {
    let window = params.sample_window_s;
    let v_des = v_ego + (accel_target - a_ego) * window;
    let delta_ke = 0.5 * mass_kg * (v_des * v_des - v_ego * v_ego);
    delta_ke * params.rpm_torque_constant * window
        / (params.drivetrain_efficiency * engine_rpm + RPM_EPSILON)
}

/// Full drive torque command [Nm]: raw estimate, slip correction,
/// platform clamp, and composition with the measured engine torque.
///
/// The output is always finite and non-negative.
pub fn drive_torque_command(
    mass_kg: f64,
    input: &TorqueInput,
    params: &LongitudinalParams,
) -> f64 {
    let mut torque = raw_drive_torque(
        mass_kg,
        input.v_ego,
        input.a_ego,
        input.accel_target,
        input.engine_rpm,
        params,
    );

    // An unlocked, slipping converter transmits only a fraction of the
    // engine torque to the wheels.
    if !input.tc_locked && input.tc_slip_ratio > 0.0 {
        torque /= input.tc_slip_ratio;
    }

    if !torque.is_finite() {
        torque = params.torque_floor;
    }
    let torque = torque.clamp(params.torque_floor, params.torque_ceiling);

    if input.engine_torque < 0.0 {
        // Engine braking: a delta on top of negative output would
        // command net-negative torque. Hold the fixed floor instead.
        params.engine_brake_torque
    } else {
        torque + input.engine_torque
    }
}
