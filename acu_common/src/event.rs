//! Advisory events for the external fault-reporting channel.
//!
//! Abnormal sensor conditions are not errors in this core — they are
//! folded into the state machines and additionally surfaced here as
//! data, once per tick, for the event subsystem to render.

use serde::Serialize;

use crate::consts::MAX_ADVISORIES_PER_TICK;

/// Advisories raised in one tick. Fixed capacity — the tick path never
/// allocates.
pub type AdvisoryVec = heapless::Vec<Advisory, MAX_ADVISORIES_PER_TICK>;

/// Advisory raised during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advisory {
    /// Transient EPS fault reported; gate held closed.
    SteerFaultTemporary,
    /// Latched EPS fault reported; gate held closed for the drive.
    SteerFaultPermanent,
    /// Speed below the steer-enable band; lateral control unavailable.
    BelowSteerSpeed,
    /// ACC is holding the brakes at a standstill.
    StandstillBrakeHold,
}
