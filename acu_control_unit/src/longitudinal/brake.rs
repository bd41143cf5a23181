//! Hard-brake deceleration hysteresis.
//!
//! The brake controller downstream overshoots on step inputs, so the
//! commanded deceleration walks toward the target at a bounded ramp
//! rate. Recovery (a less-negative target) additionally waits out a
//! dead-band before following, which keeps the command from chattering
//! around small planner oscillations.

use acu_common::config::LongitudinalParams;

/// Cross-tick memory of the last commanded deceleration.
///
/// `None` means no braking episode is in progress; the first braking
/// tick seeds the command at half the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrakeHysteresis {
    last: Option<f64>,
}

impl BrakeHysteresis {
    /// Advance one tick toward `target_accel` (signed, m/s²).
    ///
    /// Returns the deceleration to command this tick. The target is
    /// clamped to `[accel_min, 0]` first.
    pub fn step(&mut self, target_accel: f64, params: &LongitudinalParams) -> f64 {
        let target = if target_accel.is_finite() {
            target_accel.clamp(params.accel_min, 0.0)
        } else {
            params.accel_min
        };

        let next = match self.last {
            None => (target / 2.0).min(0.0),
            Some(last) => {
                if target < last {
                    // Deeper braking: ramp down, never past the target.
                    (last - params.brake_ramp).max(target)
                } else if target - last > params.brake_deadband {
                    // Recovery: follow only past the dead-band, ramped.
                    (last + params.brake_ramp).min(target)
                } else {
                    last
                }
            }
        };

        self.last = Some(next);
        next
    }

    /// Clear the episode memory.
    #[inline]
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Last commanded deceleration, if a braking episode is in progress.
    #[inline]
    pub const fn value(&self) -> Option<f64> {
        self.last
    }
}
