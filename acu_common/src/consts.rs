//! System-wide constants for the ACU workspace.
//!
//! Single source of truth for tick timing, scheduler cadences, and
//! output buffer capacities. Imported by all crates — no duplication
//! permitted.

use static_assertions::const_assert;

/// Control cycle period [s] (100 Hz tick rate).
pub const TICK_PERIOD_S: f64 = 0.01;

/// Control cycle period in milliseconds, for the host scheduler.
pub const TICK_PERIOD_MS: u64 = 10;

/// Keep-alive frame cadence [ticks].
pub const KEEP_ALIVE_TICKS: u64 = 2;

/// Cruise-status display frame cadence [ticks].
pub const CRUISE_STATUS_TICKS: u64 = 6;

/// HUD frame cadence [ticks].
pub const HUD_TICKS: u64 = 25;

/// Radar-suppress watchdog frame cadence [ticks].
pub const RADAR_SUPPRESS_TICKS: u64 = 50;

/// Chime frame cadence [ticks].
pub const CHIME_TICKS: u64 = 100;

/// Worst-case outbound frames in a single tick: one button frame, the
/// steering and longitudinal commands, and every periodic frame due at
/// a shared cadence boundary.
pub const MAX_FRAMES_PER_TICK: usize = 8;

/// Maximum advisory events raised in a single tick.
pub const MAX_ADVISORIES_PER_TICK: usize = 4;

/// Maximum button events delivered in a single vehicle-state snapshot.
pub const MAX_BUTTON_EVENTS: usize = 8;

/// Standard cargo allowance added to curb mass [kg].
pub const STD_CARGO_KG: f64 = 136.0;

/// Epsilon added to the engine-speed denominator of the drive-torque
/// estimate so a stalled engine can never divide by zero.
pub const RPM_EPSILON: f64 = 0.001;

// Every periodic cadence must be nonzero, and the frame buffer must hold
// the worst-case tick (button + steer + long + all five periodic frames).
const_assert!(KEEP_ALIVE_TICKS > 0);
const_assert!(CRUISE_STATUS_TICKS > 0);
const_assert!(HUD_TICKS > 0);
const_assert!(RADAR_SUPPRESS_TICKS > 0);
const_assert!(CHIME_TICKS > 0);
const_assert!(MAX_FRAMES_PER_TICK >= 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_period_fields_agree() {
        assert!((TICK_PERIOD_S * 1000.0 - TICK_PERIOD_MS as f64).abs() < 1e-9);
    }

    #[test]
    fn cadences_share_a_common_boundary() {
        // Tick 0 is the worst case: every periodic frame is due at once.
        for cadence in [
            KEEP_ALIVE_TICKS,
            CRUISE_STATUS_TICKS,
            HUD_TICKS,
            RADAR_SUPPRESS_TICKS,
            CHIME_TICKS,
        ] {
            assert_eq!(0 % cadence, 0);
        }
    }
}
