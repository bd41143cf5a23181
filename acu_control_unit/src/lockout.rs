//! Steering-enable lockout gate.
//!
//! Binary permission state for lateral actuation. The EPS rack faults if
//! lane-keep is re-enabled too quickly after a disable, so every
//! OPEN → CLOSED transition starts a mandatory cooldown during which the
//! gate cannot reopen — enforced here structurally, not by callers.

use acu_common::platform::PlatformProfile;
use acu_common::vehicle::SteerFault;
use tracing::debug;

/// Per-tick inputs to the gate.
#[derive(Debug, Clone, Copy)]
pub struct GateInput {
    /// Lateral actuation requested by the planner.
    pub lat_requested: bool,
    /// Ego speed [m/s].
    pub v_ego: f64,
    /// Selector in a forward-drive position.
    pub in_drive: bool,
    /// EPS fault flags.
    pub fault: SteerFault,
}

/// Steering lockout gate state machine.
///
/// States: OPEN / CLOSED, initial CLOSED, cyclic for the session.
/// The speed-band verdict is sticky and evaluated through the platform's
/// [`SteerSpeedPolicy`](acu_common::platform::SteerSpeedPolicy), so one
/// state machine serves every vehicle variant.
#[derive(Debug, Clone)]
pub struct LockoutGate {
    open: bool,
    band_verdict: bool,
    last_close_tick: u64,
}

impl LockoutGate {
    /// Create a gate in the CLOSED state.
    ///
    /// The session start counts as the most recent close, so the first
    /// open can happen no earlier than one full cooldown into the drive.
    pub const fn new() -> Self {
        Self {
            open: false,
            band_verdict: false,
            last_close_tick: 0,
        }
    }

    /// Evaluate one tick. Returns the gate state after the transition.
    pub fn step(
        &mut self,
        tick: u64,
        input: &GateInput,
        profile: &PlatformProfile,
        cooldown_ticks: u32,
    ) -> bool {
        self.band_verdict = profile.steer_policy.evaluate(
            self.band_verdict,
            input.v_ego,
            profile.min_steer_speed,
            input.in_drive,
        );

        let cooldown_elapsed = tick.saturating_sub(self.last_close_tick) > u64::from(cooldown_ticks);
        let open = self.band_verdict
            && input.lat_requested
            && input.fault.is_empty()
            && cooldown_elapsed;

        if self.open && !open {
            // Falling edge arms the cooldown.
            self.last_close_tick = tick;
            debug!(tick, "lockout gate closed");
        } else if !self.open && open {
            debug!(tick, "lockout gate opened");
        }

        self.open = open;
        open
    }

    /// Current gate state.
    #[inline]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Tick index of the most recent OPEN → CLOSED transition
    /// (or session start if the gate has never been open).
    #[inline]
    pub const fn last_close_tick(&self) -> u64 {
        self.last_close_tick
    }
}

impl Default for LockoutGate {
    fn default() -> Self {
        Self::new()
    }
}
