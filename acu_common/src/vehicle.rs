//! Sensed vehicle state snapshot.
//!
//! Produced externally once per tick by the state-estimation collaborator
//! and consumed read-only by the control unit. The controller never
//! mutates a snapshot.

use bitflags::bitflags;
use heapless::Vec;

use crate::consts::MAX_BUTTON_EVENTS;

bitflags! {
    /// Power-steering fault flags reported by the EPS rack.
    ///
    /// Either flag closes the steering lockout gate; PERMANENT does not
    /// clear for the remainder of the drive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SteerFault: u8 {
        /// Transient EPS fault (e.g. torque sensor glitch).
        const TEMPORARY = 0x01;
        /// Latched EPS fault — requires an ignition cycle to clear.
        const PERMANENT = 0x02;
    }
}

impl Default for SteerFault {
    fn default() -> Self {
        Self::empty()
    }
}

/// Transmission gear selector position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GearShifter {
    Park,
    Reverse,
    Neutral,
    Drive,
    Low,
}

impl GearShifter {
    /// Forward-drive positions permit lateral engagement on platforms
    /// that gate steering on the selector.
    #[inline]
    pub const fn is_drive(&self) -> bool {
        matches!(self, Self::Drive | Self::Low)
    }
}

/// Adaptive-cruise state as reported by the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CruiseState {
    /// ACC is switched on and ready to engage.
    pub available: bool,
    /// ACC is currently engaged.
    pub enabled: bool,
    /// Driver-selected set speed [m/s].
    pub set_speed: f64,
    /// Vehicle is holding the brakes at a standstill under ACC.
    pub standstill_brake_hold: bool,
}

impl Default for CruiseState {
    fn default() -> Self {
        Self {
            available: false,
            enabled: false,
            set_speed: 0.0,
            standstill_brake_hold: false,
        }
    }
}

/// Steering-wheel cruise button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// ACC main on/off toggle.
    AccOnOff,
    /// Cancel.
    Cancel,
    /// Resume.
    Resume,
    /// Set-speed up.
    AccelCruise,
    /// Set-speed down.
    DecelCruise,
    /// Follow-gap adjust.
    GapAdjust,
}

/// A button transition observed since the previous snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub kind: ButtonKind,
    /// True on press, false on release.
    pub pressed: bool,
    /// Hold duration at the time of the event [ticks].
    pub press_ticks: u32,
}

/// Complete per-tick vehicle state snapshot.
#[derive(Debug, Clone, Default)]
pub struct VehicleState {
    /// Ego speed [m/s].
    pub v_ego: f64,
    /// Ego acceleration [m/s²].
    pub a_ego: f64,
    /// Gear selector position.
    pub gear: Option<GearShifter>,
    /// Accelerator pedal pressed by the driver.
    pub gas_pressed: bool,
    /// Brake pedal pressed by the driver.
    pub brake_pressed: bool,
    /// EPS fault flags.
    pub steer_fault: SteerFault,
    /// Measured EPS motor torque [platform torque units].
    pub steering_torque_eps: f64,
    /// Current engine output torque [Nm].
    pub engine_torque: f64,
    /// Engine speed [rpm].
    pub engine_rpm: f64,
    /// Torque-converter slip as a fraction of coupling (1.0 = locked).
    pub tc_slip_ratio: f64,
    /// Torque converter is mechanically locked.
    pub tc_locked: bool,
    /// Adaptive-cruise state.
    pub cruise: CruiseState,
    /// Current follow-gap setting (1 = closest).
    pub follow_setting: u8,
    /// Monotonic counter from the cruise-button message stream.
    pub button_counter: u32,
    /// Button transitions since the previous snapshot.
    pub button_events: Vec<ButtonEvent, MAX_BUTTON_EVENTS>,
}

impl VehicleState {
    /// True when a press event for `kind` is present in this snapshot.
    pub fn button_pressed(&self, kind: ButtonKind) -> bool {
        self.button_events
            .iter()
            .any(|ev| ev.kind == kind && ev.pressed)
    }

    /// True when the selector is in a forward-drive position.
    #[inline]
    pub fn in_drive(&self) -> bool {
        self.gear.is_some_and(|g| g.is_drive())
    }
}
