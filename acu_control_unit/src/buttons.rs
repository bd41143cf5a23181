//! Cruise-control button emulation and engagement tracking.
//!
//! The vehicle's ACC accepts commands only as button presses on its own
//! counter stream. Frames are synthesized on each distinct advance of
//! the observed counter, with a counter-offset cycle that matches the
//! platform's button-repeat cadence — stamping every frame at the same
//! offset trips the double-press fault.

use acu_common::actuator::{ActuatorRequest, LongControlState};
use acu_common::config::ButtonParams;
use acu_common::frame::{BusFrame, CruiseButton};
use acu_common::vehicle::{ButtonKind, VehicleState};
use static_assertions::const_assert_eq;
use tracing::debug;

/// Counter offsets applied to consecutive emulated button frames.
/// `None` consumes a slot without emitting a frame.
pub const OFFSET_PATTERN: [Option<u32>; 4] = [Some(1), Some(1), Some(0), None];

const_assert_eq!(OFFSET_PATTERN.len(), 4);

// ─── Engagement Tracking ────────────────────────────────────────────

/// Fold this tick's physical button presses into the longitudinal
/// engagement flags.
///
/// The on/off toggle flips availability and always drops engagement;
/// cancel or the brake pedal disengage; set/resume presses engage when
/// available and in a forward-drive gear.
pub fn update_engagement(
    long_available: &mut bool,
    long_enabled: &mut bool,
    vehicle: &VehicleState,
) {
    if vehicle.button_pressed(ButtonKind::AccOnOff) {
        *long_available = !*long_available;
        *long_enabled = false;
        debug!(available = *long_available, "ACC availability toggled");
    }

    if !*long_available {
        *long_enabled = false;
        return;
    }

    if vehicle.button_pressed(ButtonKind::Cancel) || vehicle.brake_pressed {
        *long_enabled = false;
    } else if (vehicle.button_pressed(ButtonKind::AccelCruise)
        || vehicle.button_pressed(ButtonKind::DecelCruise)
        || vehicle.button_pressed(ButtonKind::Resume))
        && vehicle.in_drive()
    {
        *long_enabled = true;
    }
}

// ─── Intent Selection ───────────────────────────────────────────────

/// Pick the button to press this tick, if any.
///
/// Precedence: explicit cancel > explicit resume > auto-resume from
/// standstill > follow-gap stepping. Auto-resume is rate-limited to
/// counter multiples of the configured modulus.
pub fn select_intent(
    request: &ActuatorRequest,
    vehicle: &VehicleState,
    commanded_accel: f64,
    params: &ButtonParams,
) -> Option<CruiseButton> {
    if request.cruise_cancel {
        return Some(CruiseButton::Cancel);
    }
    if request.cruise_resume {
        return Some(CruiseButton::Resume);
    }

    let standstill =
        vehicle.v_ego < params.standstill_speed || vehicle.cruise.standstill_brake_hold;
    let wants_motion =
        commanded_accel > 0.0 || request.long_state == LongControlState::Starting;
    if wants_motion && standstill && vehicle.button_counter % params.auto_resume_modulus == 0 {
        return Some(CruiseButton::Resume);
    }

    if let Some(target) = request.target_follow_setting {
        // The gap rocker shares the cruise set buttons on this platform:
        // decel steps the gap longer, accel shorter.
        if target > vehicle.follow_setting {
            return Some(CruiseButton::DecelCruise);
        }
        if target < vehicle.follow_setting {
            return Some(CruiseButton::AccelCruise);
        }
    }

    None
}

// ─── Frame Emission ─────────────────────────────────────────────────

/// Emits at most one button frame per distinct advance of the vehicle's
/// button counter, cycling [`OFFSET_PATTERN`] across emissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonEmulator {
    last_counter: Option<u32>,
    cycle_idx: u8,
}

impl ButtonEmulator {
    /// Process one tick. Returns a button frame when the counter has
    /// advanced, an intent exists, and the pattern slot is not a skip.
    pub fn step(&mut self, button_counter: u32, intent: Option<CruiseButton>) -> Option<BusFrame> {
        if self.last_counter == Some(button_counter) {
            return None;
        }
        self.last_counter = Some(button_counter);

        let button = intent?;
        let offset = OFFSET_PATTERN[self.cycle_idx as usize];
        self.cycle_idx = (self.cycle_idx + 1) % OFFSET_PATTERN.len() as u8;

        offset.map(|off| BusFrame::CruiseButton {
            counter: button_counter.wrapping_add(off),
            button,
        })
    }
}
