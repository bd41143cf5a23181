//! Longitudinal command composer.
//!
//! Selects exactly one regime per tick ([`regime`]), then produces a
//! complete, self-consistent command record for it: rate-limited
//! deceleration ([`brake`]), inverse-dynamics drive torque ([`torque`]),
//! engine-torque passthrough, or the neutral disengage command. Fields
//! with no value this tick are `None`, never sentinels.

pub mod brake;
pub mod regime;
pub mod torque;

use acu_common::config::LongitudinalParams;
use acu_common::vehicle::VehicleState;

use self::brake::BrakeHysteresis;
use self::regime::Regime;
use self::torque::TorqueInput;

/// Longitudinal command for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongCommand {
    /// Launch ("go") request pulse.
    pub go: bool,
    /// Commanded driveline torque [Nm]; `None` = no torque request.
    pub torque_nm: Option<f64>,
    /// Highest gear the powertrain may select.
    pub max_gear: u8,
    /// Commanded deceleration [m/s²]; `None` = no deceleration engaged.
    pub decel: Option<f64>,
}

/// Compose the command record for the selected regime.
///
/// `accel` must already be clamped to the platform acceleration bounds.
/// `brake_mem` and `go_counter` are the cross-tick hysteresis and
/// go-pulse state owned by the controller.
pub fn compose_command(
    selected: Regime,
    accel: f64,
    vehicle: &VehicleState,
    mass_kg: f64,
    params: &LongitudinalParams,
    brake_mem: &mut BrakeHysteresis,
    go_counter: &mut u32,
) -> LongCommand {
    match selected {
        Regime::Disengage => {
            brake_mem.reset();
            *go_counter = 0;
            LongCommand {
                go: false,
                torque_nm: None,
                max_gear: params.gear_limit_neutral,
                decel: None,
            }
        }
        Regime::HardBrake => {
            *go_counter = 0;
            let decel = brake_mem.step(accel, params);
            LongCommand {
                go: false,
                torque_nm: None,
                max_gear: params.gear_limit_active,
                decel: Some(decel),
            }
        }
        Regime::GasHeld => {
            brake_mem.reset();
            // Exhaust the pulse budget so releasing the pedal does not
            // re-launch.
            *go_counter = params.go_pulse_ticks;
            LongCommand {
                go: false,
                torque_nm: Some(vehicle.engine_torque),
                max_gear: params.gear_limit_active,
                decel: None,
            }
        }
        Regime::PoweredAccel => {
            brake_mem.reset();
            let go = *go_counter < params.go_pulse_ticks;
            *go_counter = go_counter.saturating_add(1);
            let input = TorqueInput {
                v_ego: vehicle.v_ego,
                a_ego: vehicle.a_ego,
                accel_target: accel,
                engine_rpm: vehicle.engine_rpm,
                engine_torque: vehicle.engine_torque,
                tc_locked: vehicle.tc_locked,
                tc_slip_ratio: vehicle.tc_slip_ratio,
            };
            let torque = torque::drive_torque_command(mass_kg, &input, params);
            LongCommand {
                go,
                torque_nm: Some(torque),
                max_gear: params.gear_limit_active,
                decel: None,
            }
        }
    }
}
