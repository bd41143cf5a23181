//! Steering command shaper.
//!
//! Scales the planner's normalized steering command to the platform
//! torque range, then applies a driver-override-aware slew limiter: the
//! command may not leave an envelope around the measured EPS torque
//! (so the actuator never fights a driver who is overpowering it) and
//! may not change faster than the configured per-tick deltas.
//!
//! All torque math is integer, in platform torque units.

use acu_common::config::SteerLimits;

/// Measured EPS torque values far outside the command range carry no
/// extra information for the envelope.
const EPS_TORQUE_CLAMP: f64 = 10_000.0;

/// Scale a normalized steering command in [-1, 1] to torque units.
#[inline]
pub fn scale_steer_request(steer: f64, max: i16) -> i16 {
    let clamped = if steer.is_finite() {
        steer.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    (clamped * f64::from(max)).round() as i16
}

/// Apply the driver-override envelope and the per-tick slew limits.
///
/// `last_applied` is the torque emitted on the previous tick;
/// `eps_torque` the measured EPS motor torque. The returned value is
/// always within `[-limits.max, limits.max]` provided `last_applied` is.
pub fn limit_steer(
    new_torque: i16,
    last_applied: i16,
    eps_torque: f64,
    limits: &SteerLimits,
) -> i16 {
    let new = i32::from(new_torque);
    let last = i32::from(last_applied);
    let eps = eps_torque.clamp(-EPS_TORQUE_CLAMP, EPS_TORQUE_CLAMP).round() as i32;

    let max = i32::from(limits.max);
    let err = i32::from(limits.error_max);
    let up = i32::from(limits.delta_up);
    let down = i32::from(limits.delta_down);

    // Envelope around the measured EPS torque: when the driver overpowers
    // the rack the window follows the measured value, releasing the
    // command toward the driver's input.
    let hi = (eps + err).max(err).min(max);
    let lo = (eps - err).min(-err).max(-max);
    let mut apply = new.clamp(lo, hi);

    // Asymmetric slew: magnitude rises by at most `delta_up` per tick and
    // falls by at most `delta_down`, on either side of zero.
    apply = if last > 0 {
        apply.clamp((last - down).max(-up), last + up)
    } else {
        apply.clamp(last - up, (last + down).min(up))
    };

    apply as i16
}
