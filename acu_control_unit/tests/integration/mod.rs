//! Shared fixtures for the integration tests.

mod cadence;
mod lockout_cooldown;
mod regimes;

use acu_common::prelude::*;
use acu_control_unit::{CarController, TickOutput};

/// Controller with longitudinal control already engaged, as if the
/// driver had switched ACC on and pressed set.
pub fn engaged_controller(variant: PlatformVariant) -> CarController {
    let mut ctrl =
        CarController::from_config(ControllerConfig::for_variant(variant)).expect("valid config");
    ctrl.state_mut().long_available = true;
    ctrl.state_mut().long_enabled = true;
    ctrl
}

/// Cruise-engaged vehicle snapshot at the given speed.
pub fn cruising(v_ego: f64) -> VehicleState {
    let mut vs = VehicleState {
        v_ego,
        engine_rpm: 650.0 + v_ego * 90.0,
        engine_torque: 85.0,
        tc_locked: true,
        tc_slip_ratio: 1.0,
        gear: Some(GearShifter::Drive),
        ..VehicleState::default()
    };
    vs.cruise.available = true;
    vs.cruise.enabled = true;
    vs.cruise.set_speed = 25.0;
    vs
}

/// Planner request with lateral and longitudinal control active.
pub fn active_request(steer: f64, accel: f64) -> ActuatorRequest {
    ActuatorRequest {
        steer,
        accel,
        lat_active: true,
        long_active: true,
        long_state: LongControlState::Pid,
        ..ActuatorRequest::default()
    }
}

/// Torque of the steering command frame (present every tick).
pub fn steer_torque(out: &TickOutput) -> i16 {
    out.frames
        .iter()
        .find_map(|f| match f {
            BusFrame::SteerCommand { torque, .. } => Some(*torque),
            _ => None,
        })
        .expect("steer frame present every tick")
}

/// (torque, decel, go, max_gear) of the ACC command frame.
pub fn acc_fields(out: &TickOutput) -> (Option<f64>, Option<f64>, bool, u8) {
    out.frames
        .iter()
        .find_map(|f| match f {
            BusFrame::AccCommand {
                torque_nm,
                decel,
                go,
                max_gear,
                ..
            } => Some((*torque_nm, *decel, *go, *max_gear)),
            _ => None,
        })
        .expect("acc frame present every tick")
}
