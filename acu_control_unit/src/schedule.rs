//! Periodic frame scheduler.
//!
//! Keep-alive, display, watchdog, and chime frames run on fixed modulo
//! cadences of the tick counter, unconditionally and independent of the
//! active regime. The factory radar stays disabled only as long as the
//! suppress frame keeps arriving.

use acu_common::actuator::ActuatorRequest;
use acu_common::consts::{
    CHIME_TICKS, CRUISE_STATUS_TICKS, HUD_TICKS, KEEP_ALIVE_TICKS, RADAR_SUPPRESS_TICKS,
};
use acu_common::frame::{BusFrame, CruiseDisplayState, FrameVec};
use acu_common::vehicle::VehicleState;

/// Rolling indices for the periodic frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicScheduler {
    hud_index: u8,
}

impl PeriodicScheduler {
    /// Append every periodic frame due at `tick`, in cadence order.
    pub fn emit(
        &mut self,
        tick: u64,
        vehicle: &VehicleState,
        request: &ActuatorRequest,
        lkas_active: bool,
        frames: &mut FrameVec,
    ) {
        if tick % KEEP_ALIVE_TICKS == 0 {
            let index = (tick / KEEP_ALIVE_TICKS) as u16;
            push(frames, BusFrame::KeepAlive { index });
        }

        if tick % CRUISE_STATUS_TICKS == 0 {
            let state = if !vehicle.cruise.available {
                CruiseDisplayState::Off
            } else if vehicle.cruise.enabled {
                CruiseDisplayState::Engaged
            } else {
                CruiseDisplayState::Ready
            };
            push(
                frames,
                BusFrame::CruiseStatus {
                    state,
                    set_speed: request.hud.set_speed,
                },
            );
        }

        if tick % HUD_TICKS == 0 {
            push(
                frames,
                BusFrame::Hud {
                    lkas_active,
                    steer_warning: request.hud.steer_warning,
                    index: self.hud_index,
                },
            );
            self.hud_index = self.hud_index.wrapping_add(1);
        }

        if tick % RADAR_SUPPRESS_TICKS == 0 {
            push(frames, BusFrame::RadarSuppress);
        }

        if tick % CHIME_TICKS == 0 {
            push(frames, BusFrame::Chime);
        }
    }
}

// Capacity covers the worst-case tick; a dropped frame here would mean
// the cadence table and MAX_FRAMES_PER_TICK disagree.
#[inline]
fn push(frames: &mut FrameVec, frame: BusFrame) {
    debug_assert!(!frames.is_full(), "frame buffer full at {}", frame.label());
    let _ = frames.push(frame);
}
