//! # ACU Control Unit
//!
//! Drives the per-cycle actuation controller against a scripted
//! simulated drive: launch from standstill, cruise with lane-keep,
//! then a braking run to a stop. Useful for exercising the full frame
//! pipeline and for eyeballing regime/gate transitions in the logs.
//!
//! The real deployment embeds [`acu_control_unit::CarController`] in the
//! vehicle-interface process, which owns the tick cadence and the frame
//! encoder; this binary stands in for both with a toy plant model.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use acu_common::prelude::*;
use acu_control_unit::CarController;
use acu_control_unit::config::load_config;

/// ACU Control Unit — scripted simulation driver
#[derive(Parser, Debug)]
#[command(name = "acu_control_unit")]
#[command(version)]
#[command(about = "Per-cycle actuation controller, driven against a scripted simulated drive")]
struct Args {
    /// Path to the controller configuration TOML.
    #[arg(long, value_name = "FILE", default_value = "config/controller.toml")]
    config: PathBuf,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 6000)]
    ticks: u64,

    /// Pace the loop at the real control period instead of free-running.
    #[arg(long)]
    realtime: bool,

    /// Dump every tick's frames as JSON lines on stdout.
    #[arg(long)]
    dump_frames: bool,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("ACU Control Unit v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("ACU Control Unit shutdown complete");
}

fn setup_tracing(args: &Args) {
    let default = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if args.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[derive(Serialize)]
struct TickRecord<'a> {
    tick: u64,
    frames: &'a FrameVec,
    response: &'a ActuatorResponse,
    advisories: &'a AdvisoryVec,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_config(&args.config)?;
    info!(
        "Config OK: variant={:?}, mass={:.0} kg, cooldown={} ticks",
        loaded.controller.variant,
        loaded.total_mass_kg(),
        loaded.controller.lockout.cooldown_ticks,
    );

    let mut controller = CarController::new(loaded);

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    })?;

    let mut plant = Plant::new();
    for tick in 0..args.ticks {
        if !running.load(Ordering::SeqCst) {
            info!("Stopping early at tick {tick}");
            break;
        }

        let vehicle = plant.snapshot(tick);
        let request = scripted_request(tick, args.ticks, plant.v_ego);
        let out = controller.tick(&request, &vehicle);
        plant.integrate(&out.response);

        if args.dump_frames {
            let record = TickRecord {
                tick,
                frames: &out.frames,
                response: &out.response,
                advisories: &out.advisories,
            };
            println!("{}", serde_json::to_string(&record)?);
        }

        if args.realtime {
            std::thread::sleep(DEFAULT_TICK_PERIOD);
        }
    }

    let stats = controller.stats();
    info!(
        "Simulation done: {} ticks, {} frames ({} button), gate open {} ticks, final speed {:.1} m/s",
        stats.ticks, stats.frames, stats.button_frames, stats.gate_open_ticks, plant.v_ego,
    );

    Ok(())
}

// ─── Toy Plant ──────────────────────────────────────────────────────

/// Minimal longitudinal plant: integrates the applied acceleration and
/// synthesizes plausible engine/cruise feedback for the controller.
struct Plant {
    v_ego: f64,
    a_ego: f64,
    acc_on: bool,
    acc_engaged: bool,
}

impl Plant {
    fn new() -> Self {
        Self {
            v_ego: 0.0,
            a_ego: 0.0,
            acc_on: false,
            acc_engaged: false,
        }
    }

    fn snapshot(&mut self, tick: u64) -> VehicleState {
        let mut vs = VehicleState {
            v_ego: self.v_ego,
            a_ego: self.a_ego,
            gear: Some(GearShifter::Drive),
            engine_rpm: 650.0 + self.v_ego * 90.0,
            engine_torque: 35.0 + 120.0 * self.a_ego.max(0.0),
            tc_locked: self.v_ego > 6.0,
            tc_slip_ratio: if self.v_ego > 6.0 { 1.0 } else { 0.6 },
            follow_setting: 2,
            button_counter: (tick / 4) as u32,
            ..VehicleState::default()
        };

        // Driver switches ACC on early, then engages with a set press.
        if tick == 20 {
            let _ = vs.button_events.push(ButtonEvent {
                kind: ButtonKind::AccOnOff,
                pressed: true,
                press_ticks: 1,
            });
            self.acc_on = true;
        }
        if tick == 40 {
            let _ = vs.button_events.push(ButtonEvent {
                kind: ButtonKind::AccelCruise,
                pressed: true,
                press_ticks: 1,
            });
            self.acc_engaged = true;
        }

        vs.cruise.available = self.acc_on;
        vs.cruise.enabled = self.acc_engaged;
        vs.cruise.set_speed = 25.0;
        vs
    }

    fn integrate(&mut self, response: &ActuatorResponse) {
        self.a_ego = response.accel_applied;
        self.v_ego = (self.v_ego + self.a_ego * TICK_PERIOD_S).max(0.0);
    }
}

/// Scripted planner: accelerate to the set speed, hold it, then brake
/// to a stop over the last quarter of the run.
fn scripted_request(tick: u64, total_ticks: u64, v_ego: f64) -> ActuatorRequest {
    let engaged = tick >= 40;
    let braking = tick >= total_ticks.saturating_mul(3) / 4;

    let accel = if !engaged {
        0.0
    } else if braking {
        -1.5
    } else {
        ((25.0 - v_ego) * 0.3).clamp(-1.0, 1.2)
    };

    // Gentle weave so the steering shaper has work to do.
    let steer = if engaged {
        0.25 * (tick as f64 / 120.0).sin()
    } else {
        0.0
    };

    ActuatorRequest {
        steer,
        accel,
        lat_active: engaged,
        long_active: engaged,
        long_state: if braking {
            LongControlState::Stopping
        } else if engaged {
            LongControlState::Pid
        } else {
            LongControlState::Off
        },
        hud: HudRequest {
            set_speed: 25.0,
            steer_warning: false,
        },
        ..ActuatorRequest::default()
    }
}
