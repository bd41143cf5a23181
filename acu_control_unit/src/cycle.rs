//! Per-tick orchestration.
//!
//! [`CarController`] owns all cross-tick state and evaluates the three
//! control layers plus the periodic scheduler exactly once per tick:
//! engagement tracking → button emulation → lockout gate → steering
//! shaper → longitudinal composer → periodic frames → advisories.
//!
//! The tick function never blocks, never allocates, and never fails —
//! abnormal inputs degrade to safe commands. The owning scheduler
//! guarantees serialized calls at the control period.

use acu_common::actuator::{ActuatorRequest, ActuatorResponse};
use acu_common::config::ControllerConfig;
use acu_common::event::{Advisory, AdvisoryVec};
use acu_common::frame::{BusFrame, FrameVec};
use acu_common::platform::PlatformProfile;
use acu_common::vehicle::{SteerFault, VehicleState};
use tracing::{debug, warn};

use crate::buttons::{self, ButtonEmulator};
use crate::config::LoadedConfig;
use crate::error::ConfigError;
use crate::lockout::{GateInput, LockoutGate};
use crate::longitudinal;
use crate::longitudinal::brake::BrakeHysteresis;
use crate::longitudinal::regime::{self, Regime};
use crate::schedule::PeriodicScheduler;
use crate::steering;

/// Margin above the minimum steer speed at which the low-speed alert
/// latches, and the wider margin at which it releases.
const LOW_SPEED_ALERT_SET: f64 = 0.5;
const LOW_SPEED_ALERT_CLEAR: f64 = 1.0;

// ─── Cross-Tick State ───────────────────────────────────────────────

/// All controller state that survives across ticks.
///
/// Exclusively owned by [`CarController`]; nothing outside the tick
/// function mutates it.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    /// Monotonic tick counter.
    pub tick: u64,
    /// Last emitted steering torque [platform torque units].
    pub last_applied_steer: i16,
    /// Steering lockout gate.
    pub gate: LockoutGate,
    /// Hard-brake hysteresis memory.
    pub brake: BrakeHysteresis,
    /// Launch go-pulse budget counter.
    pub go_counter: u32,
    /// Cruise-button frame emitter.
    pub emulator: ButtonEmulator,
    /// Longitudinal control switched on by the driver.
    pub long_available: bool,
    /// Longitudinal control engaged.
    pub long_enabled: bool,
    /// Low-speed steer alert latch.
    pub low_speed_alert: bool,
    /// Fault flags seen on the previous tick (for edge logging).
    prev_fault: SteerFault,
    /// Regime selected on the previous tick (for transition logging).
    last_regime: Option<Regime>,
}

/// Per-session frame accounting for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickStats {
    /// Ticks executed.
    pub ticks: u64,
    /// Total frames emitted.
    pub frames: u64,
    /// Button frames emitted.
    pub button_frames: u64,
    /// Ticks with the lockout gate open.
    pub gate_open_ticks: u64,
}

/// Everything one tick produces.
#[derive(Debug, Clone)]
pub struct TickOutput {
    /// Ordered outbound frame descriptors for the encoder.
    pub frames: FrameVec,
    /// Actuation actually applied, for telemetry.
    pub response: ActuatorResponse,
    /// Advisories for the external event channel.
    pub advisories: AdvisoryVec,
}

// ─── Controller ─────────────────────────────────────────────────────

/// The per-cycle actuation controller.
///
/// Constructed once per driving session from a validated configuration;
/// lives for the whole session.
#[derive(Debug, Clone)]
pub struct CarController {
    config: ControllerConfig,
    profile: PlatformProfile,
    mass_kg: f64,
    state: ControllerState,
    scheduler: PeriodicScheduler,
    stats: TickStats,
}

impl CarController {
    /// Build a controller from an already-validated configuration bundle.
    pub fn new(loaded: LoadedConfig) -> Self {
        let mass_kg = loaded.total_mass_kg();
        Self {
            config: loaded.controller,
            profile: loaded.profile,
            mass_kg,
            state: ControllerState::default(),
            scheduler: PeriodicScheduler::default(),
            stats: TickStats::default(),
        }
    }

    /// Validate `config` and build a controller. Fails fast — an invalid
    /// configuration never produces a controller.
    pub fn from_config(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;
        let profile = config.variant.profile();
        Ok(Self::new(LoadedConfig {
            controller: config,
            profile,
        }))
    }

    /// Platform profile in use.
    #[inline]
    pub fn profile(&self) -> &PlatformProfile {
        &self.profile
    }

    /// Cross-tick state (read-only).
    #[inline]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Mutable cross-tick state, for session bring-up and tests.
    #[inline]
    pub fn state_mut(&mut self) -> &mut ControllerState {
        &mut self.state
    }

    /// Frame accounting.
    #[inline]
    pub fn stats(&self) -> &TickStats {
        &self.stats
    }

    /// Execute one control cycle.
    pub fn tick(&mut self, request: &ActuatorRequest, vehicle: &VehicleState) -> TickOutput {
        let tick = self.state.tick;
        let mut frames = FrameVec::new();
        let mut advisories = AdvisoryVec::new();

        // ═══ Engagement tracking ═══
        buttons::update_engagement(
            &mut self.state.long_available,
            &mut self.state.long_enabled,
            vehicle,
        );
        let long_engaged =
            self.state.long_enabled && vehicle.cruise.enabled && request.long_active;

        // Acceleration target, clamped to platform bounds. Non-finite
        // planner output degrades to zero.
        let accel = if request.accel.is_finite() {
            request
                .accel
                .clamp(self.config.longitudinal.accel_min, self.config.longitudinal.accel_max)
        } else {
            0.0
        };

        // ═══ Cruise button emulation ═══
        let intent = buttons::select_intent(request, vehicle, accel, &self.config.buttons);
        if let Some(frame) = self.state.emulator.step(vehicle.button_counter, intent) {
            self.stats.button_frames += 1;
            push(&mut frames, frame);
        }

        // ═══ Lockout gate ═══
        let gate_open_prev = self.state.gate.is_open();
        let gate_input = GateInput {
            lat_requested: request.lat_active,
            v_ego: vehicle.v_ego,
            in_drive: vehicle.in_drive(),
            fault: vehicle.steer_fault,
        };
        let gate_open = self.state.gate.step(
            tick,
            &gate_input,
            &self.profile,
            self.config.lockout.cooldown_ticks,
        );
        if gate_open {
            self.stats.gate_open_ticks += 1;
        }

        // ═══ Steering shaper ═══
        let desired = steering::scale_steer_request(request.steer, self.config.steer.max);
        let mut apply = steering::limit_steer(
            desired,
            self.state.last_applied_steer,
            vehicle.steering_torque_eps,
            &self.config.steer,
        );
        // Closed, or open for only one tick: force zero so resumption
        // slews up from zero rather than a stale command.
        if !gate_open || !gate_open_prev {
            apply = 0;
        }
        self.state.last_applied_steer = apply;
        push(
            &mut frames,
            BusFrame::SteerCommand {
                torque: apply,
                gate_open,
            },
        );

        // ═══ Longitudinal composer ═══
        let selected = regime::select(accel, vehicle, long_engaged, &self.config.longitudinal);
        if self.state.last_regime != Some(selected) {
            debug!(tick, regime = selected.label(), "longitudinal regime");
            self.state.last_regime = Some(selected);
        }
        let cmd = longitudinal::compose_command(
            selected,
            accel,
            vehicle,
            self.mass_kg,
            &self.config.longitudinal,
            &mut self.state.brake,
            &mut self.state.go_counter,
        );
        push(
            &mut frames,
            BusFrame::AccCommand {
                available: vehicle.cruise.available,
                enabled: self.state.long_enabled,
                go: cmd.go,
                torque_nm: cmd.torque_nm,
                max_gear: cmd.max_gear,
                decel: cmd.decel,
            },
        );

        // ═══ Periodic frames ═══
        self.scheduler.emit(
            tick,
            vehicle,
            request,
            gate_open && request.lat_active,
            &mut frames,
        );

        // ═══ Advisories ═══
        self.collect_advisories(request, vehicle, &mut advisories);

        // ═══ Response + accounting ═══
        let response = ActuatorResponse {
            steer_applied: f64::from(apply) / f64::from(self.config.steer.max),
            accel_applied: accel,
        };

        self.stats.ticks += 1;
        self.stats.frames += frames.len() as u64;
        self.state.tick += 1;

        TickOutput {
            frames,
            response,
            advisories,
        }
    }

    fn collect_advisories(
        &mut self,
        request: &ActuatorRequest,
        vehicle: &VehicleState,
        advisories: &mut AdvisoryVec,
    ) {
        let fault = vehicle.steer_fault;
        if fault.contains(SteerFault::TEMPORARY) {
            if !self.state.prev_fault.contains(SteerFault::TEMPORARY) {
                warn!(tick = self.state.tick, "temporary EPS fault reported");
            }
            let _ = advisories.push(Advisory::SteerFaultTemporary);
        }
        if fault.contains(SteerFault::PERMANENT) {
            if !self.state.prev_fault.contains(SteerFault::PERMANENT) {
                warn!(tick = self.state.tick, "permanent EPS fault reported");
            }
            let _ = advisories.push(Advisory::SteerFaultPermanent);
        }
        self.state.prev_fault = fault;

        // Low-speed steer alert with hysteresis, only meaningful on
        // variants with a nonzero engagement floor.
        if self.profile.min_steer_speed > 0.0 {
            if vehicle.v_ego < self.profile.min_steer_speed + LOW_SPEED_ALERT_SET {
                self.state.low_speed_alert = true;
            } else if vehicle.v_ego > self.profile.min_steer_speed + LOW_SPEED_ALERT_CLEAR {
                self.state.low_speed_alert = false;
            }
            if self.state.low_speed_alert && request.lat_active {
                let _ = advisories.push(Advisory::BelowSteerSpeed);
            }
        }

        // Keyed off the vehicle-reported cruise state: the pedal press
        // itself drops the engagement toggle on the same tick.
        let standstill = vehicle.v_ego < self.config.buttons.standstill_speed;
        if vehicle.cruise.enabled && vehicle.brake_pressed && standstill {
            let _ = advisories.push(Advisory::StandstillBrakeHold);
        }
    }
}

// Capacity covers the worst-case tick (button + steer + long + every
// periodic frame at a shared boundary).
#[inline]
fn push(frames: &mut FrameVec, frame: BusFrame) {
    debug_assert!(!frames.is_full(), "frame buffer full at {}", frame.label());
    let _ = frames.push(frame);
}
