//! Full-tick micro-benchmark.
//!
//! Measures the complete control cycle (gate + steering + longitudinal
//! + scheduler) and the torque estimator alone. The tick must fit
//! comfortably inside the 10 ms control period with margin for the
//! encoder and bus transmission.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use acu_common::prelude::*;
use acu_control_unit::CarController;
use acu_control_unit::longitudinal::torque::{TorqueInput, drive_torque_command};

fn engaged_controller() -> CarController {
    let mut ctrl = CarController::from_config(ControllerConfig::for_variant(
        PlatformVariant::MinivanEarly,
    ))
    .expect("valid config");
    ctrl.state_mut().long_available = true;
    ctrl.state_mut().long_enabled = true;
    ctrl
}

fn cruising_vehicle() -> VehicleState {
    let mut vs = VehicleState {
        v_ego: 22.0,
        engine_rpm: 2600.0,
        engine_torque: 95.0,
        tc_locked: true,
        tc_slip_ratio: 1.0,
        gear: Some(GearShifter::Drive),
        ..VehicleState::default()
    };
    vs.cruise.available = true;
    vs.cruise.enabled = true;
    vs
}

fn bench_full_tick(c: &mut Criterion) {
    let mut ctrl = engaged_controller();
    let vehicle = cruising_vehicle();
    let request = ActuatorRequest {
        steer: 0.3,
        accel: 0.6,
        lat_active: true,
        long_active: true,
        ..ActuatorRequest::default()
    };

    c.bench_function("controller_tick", |b| {
        b.iter(|| black_box(ctrl.tick(black_box(&request), black_box(&vehicle))))
    });
}

fn bench_torque_estimate(c: &mut Criterion) {
    let params = LongitudinalParams::default();
    let input = TorqueInput {
        v_ego: 22.0,
        a_ego: 0.1,
        accel_target: 0.8,
        engine_rpm: 2600.0,
        engine_torque: 95.0,
        tc_locked: true,
        tc_slip_ratio: 1.0,
    };

    c.bench_function("drive_torque_command", |b| {
        b.iter(|| black_box(drive_torque_command(2378.0, black_box(&input), &params)))
    });
}

criterion_group!(benches, bench_full_tick, bench_torque_estimate);
criterion_main!(benches);
