//! Semantic outbound bus-frame descriptors.
//!
//! Each variant is a typed payload handed to the external frame-encoding
//! collaborator, which owns the byte layout. Fields that may legitimately
//! carry no value this tick are `Option` — never sentinel numbers.

use serde::Serialize;

use crate::consts::MAX_FRAMES_PER_TICK;

/// Ordered outbound frames for one tick. Fixed capacity — the tick path
/// never allocates.
pub type FrameVec = heapless::Vec<BusFrame, MAX_FRAMES_PER_TICK>;

/// Cruise state rendered on the instrument cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CruiseDisplayState {
    /// ACC off.
    Off,
    /// ACC available, not engaged.
    Ready,
    /// ACC engaged.
    Engaged,
}

/// Emulated cruise-button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CruiseButton {
    Cancel,
    Resume,
    AccelCruise,
    DecelCruise,
}

/// One outbound command descriptor.
///
/// The per-tick frame sequence is ordered; the encoder must transmit in
/// the order produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BusFrame {
    /// Lane-keep steering command.
    SteerCommand {
        /// Commanded torque [platform torque units].
        torque: i16,
        /// Steering-enable gate bit.
        gate_open: bool,
    },
    /// Adaptive-cruise longitudinal command.
    AccCommand {
        /// ACC availability bit.
        available: bool,
        /// ACC engaged bit.
        enabled: bool,
        /// Launch ("go") request pulse.
        go: bool,
        /// Commanded driveline torque [Nm]; `None` = no torque request.
        torque_nm: Option<f64>,
        /// Highest transmission gear the powertrain may select.
        max_gear: u8,
        /// Commanded deceleration [m/s²]; `None` = no deceleration engaged.
        decel: Option<f64>,
    },
    /// ACC keep-alive heartbeat.
    KeepAlive {
        /// Rolling message index.
        index: u16,
    },
    /// Cruise-status display update.
    CruiseStatus {
        state: CruiseDisplayState,
        /// Set speed to display [m/s].
        set_speed: f64,
    },
    /// Lane-keep HUD update.
    Hud {
        /// Lateral actuation currently applied.
        lkas_active: bool,
        /// Take-over-steering warning.
        steer_warning: bool,
        /// Rolling HUD message index.
        index: u8,
    },
    /// Diagnostic keep-alive that holds the factory radar disabled.
    RadarSuppress,
    /// Audible chime keep-alive.
    Chime,
    /// Emulated cruise-button press.
    CruiseButton {
        /// Counter value to stamp on the frame.
        counter: u32,
        button: CruiseButton,
    },
}

impl BusFrame {
    /// Short label for diagnostics and frame accounting.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SteerCommand { .. } => "steer",
            Self::AccCommand { .. } => "acc",
            Self::KeepAlive { .. } => "keep_alive",
            Self::CruiseStatus { .. } => "cruise_status",
            Self::Hud { .. } => "hud",
            Self::RadarSuppress => "radar_suppress",
            Self::Chime => "chime",
            Self::CruiseButton { .. } => "button",
        }
    }
}
