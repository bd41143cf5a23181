//! Integration test: longitudinal regime selection and numeric policy.
//!
//! Drives the controller through the four regimes and checks each
//! branch's complete output record, the brake hysteresis shape, and the
//! inverse-dynamics torque path.

use acu_common::prelude::*;
use acu_control_unit::longitudinal::torque::{TorqueInput, drive_torque_command};

use super::{acc_fields, active_request, cruising, engaged_controller};

#[test]
fn gas_held_passes_engine_torque_with_no_decel() {
    let mut ctrl = engaged_controller(PlatformVariant::MinivanEarly);
    let mut vehicle = cruising(22.0);
    vehicle.gas_pressed = true;
    vehicle.engine_torque = 132.5;

    for accel in [-0.05, 0.0, 0.8, 2.0] {
        let out = ctrl.tick(&active_request(0.0, accel), &vehicle);
        let (torque, decel, go, _) = acc_fields(&out);
        assert_eq!(torque, Some(132.5));
        assert_eq!(decel, None);
        assert!(!go);
    }
}

#[test]
fn brake_pedal_disengages_with_neutral_gear() {
    let mut ctrl = engaged_controller(PlatformVariant::MinivanEarly);
    let mut vehicle = cruising(22.0);
    vehicle.brake_pressed = true;

    let out = ctrl.tick(&active_request(0.0, -2.0), &vehicle);
    let (torque, decel, go, gear) = acc_fields(&out);
    assert_eq!(torque, None);
    assert_eq!(decel, None);
    assert!(!go);
    assert_eq!(gear, 9);
}

#[test]
fn hard_brake_descends_ramped_and_recovers_past_deadband() {
    let mut ctrl = engaged_controller(PlatformVariant::MinivanEarly);
    let vehicle = cruising(22.0);

    // Descend toward -2.5 m/s².
    let mut prev: Option<f64> = None;
    for tick in 0..80u64 {
        let out = ctrl.tick(&active_request(0.0, -2.5), &vehicle);
        let (torque, decel, _, _) = acc_fields(&out);
        assert_eq!(torque, None, "hard brake is pure deceleration");
        let value = decel.expect("deceleration engaged");
        if let Some(p) = prev {
            assert!(value <= p, "descent must be monotonic at tick {tick}");
            assert!(
                p - value <= 0.06 + 1e-12,
                "ramp exceeded at tick {tick}: {p} -> {value}"
            );
        }
        prev = Some(value);
    }
    let deep = prev.unwrap();
    assert!((deep - (-2.5)).abs() < 1e-9);

    // Tiny recovery inside the dead-band: command holds.
    let out = ctrl.tick(&active_request(0.0, deep + 0.005), &vehicle);
    let (_, decel, _, _) = acc_fields(&out);
    assert_eq!(decel, Some(deep));

    // Real recovery: ramp-limited rise toward the new target.
    let out = ctrl.tick(&active_request(0.0, -0.3), &vehicle);
    let (_, decel, _, _) = acc_fields(&out);
    let risen = decel.unwrap();
    assert!(risen > deep);
    assert!(risen - deep <= 0.06 + 1e-12);
}

#[test]
fn powered_accel_matches_the_torque_estimator() {
    let mut ctrl = engaged_controller(PlatformVariant::MinivanEarly);
    let vehicle = cruising(15.0);
    let accel = 0.9;

    let out = ctrl.tick(&active_request(0.0, accel), &vehicle);
    let (torque, decel, go, gear) = acc_fields(&out);
    assert_eq!(decel, None);
    assert!(go, "fresh engagement raises the go pulse");
    assert_eq!(gear, 8);

    let expected = drive_torque_command(
        2242.0 + 136.0,
        &TorqueInput {
            v_ego: vehicle.v_ego,
            a_ego: vehicle.a_ego,
            accel_target: accel,
            engine_rpm: vehicle.engine_rpm,
            engine_torque: vehicle.engine_torque,
            tc_locked: vehicle.tc_locked,
            tc_slip_ratio: vehicle.tc_slip_ratio,
        },
        &LongitudinalParams::default(),
    );
    assert!((torque.unwrap() - expected).abs() < 1e-12);
}

#[test]
fn go_pulse_expires_and_rearms_after_disengage() {
    let mut ctrl = engaged_controller(PlatformVariant::MinivanEarly);
    let vehicle = cruising(15.0);
    let go_ticks = LongitudinalParams::default().go_pulse_ticks as u64;

    for tick in 0..(go_ticks + 5) {
        let (_, _, go, _) = acc_fields(&ctrl.tick(&active_request(0.0, 0.5), &vehicle));
        assert_eq!(go, tick < go_ticks, "tick {tick}");
    }

    // Brake-pedal override clears the pulse budget.
    let mut braking = vehicle.clone();
    braking.brake_pressed = true;
    ctrl.tick(&active_request(0.0, 0.5), &braking);

    let (_, _, go, _) = acc_fields(&ctrl.tick(&active_request(0.0, 0.5), &vehicle));
    assert!(go, "pulse budget must re-arm after an override");
}

#[test]
fn override_resets_brake_hysteresis() {
    let mut ctrl = engaged_controller(PlatformVariant::MinivanEarly);
    let vehicle = cruising(22.0);

    // Establish a deep braking episode.
    for _ in 0..80 {
        ctrl.tick(&active_request(0.0, -2.5), &vehicle);
    }

    // Driver brake press clears the episode memory.
    let mut braking = vehicle.clone();
    braking.brake_pressed = true;
    ctrl.tick(&active_request(0.0, -2.5), &braking);

    // The next braking episode seeds at half the target again.
    let out = ctrl.tick(&active_request(0.0, -2.0), &vehicle);
    let (_, decel, _, _) = acc_fields(&out);
    assert_eq!(decel, Some(-1.0));
}

#[test]
fn acceleration_target_is_clamped_to_platform_bounds() {
    let mut ctrl = engaged_controller(PlatformVariant::MinivanEarly);
    let vehicle = cruising(22.0);
    let p = LongitudinalParams::default();

    let out = ctrl.tick(&active_request(0.0, -9.0), &vehicle);
    assert_eq!(out.response.accel_applied, p.accel_min);

    let out = ctrl.tick(&active_request(0.0, 9.0), &vehicle);
    assert_eq!(out.response.accel_applied, p.accel_max);
}
