//! Regime selection.
//!
//! One regime is selected per tick, in precedence order. Each regime
//! owns a complete output record — there is no fallthrough between
//! branches and no shared mutable flags.

use acu_common::config::LongitudinalParams;
use acu_common::vehicle::VehicleState;

/// Mutually exclusive longitudinal control regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Driver brake or longitudinal control disengaged: neutral command.
    Disengage,
    /// Deceleration target below the brake threshold.
    HardBrake,
    /// Driver is holding the accelerator: preserve the manual input.
    GasHeld,
    /// Default: inverse-dynamics drive torque toward the target.
    PoweredAccel,
}

impl Regime {
    /// Short label for diagnostics.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Disengage => "disengage",
            Self::HardBrake => "hard_brake",
            Self::GasHeld => "gas_held",
            Self::PoweredAccel => "powered_accel",
        }
    }
}

/// Select the regime for this tick.
///
/// `long_engaged` is the combined verdict that longitudinal control is
/// both enabled by the driver and reported engaged by the vehicle.
pub fn select(
    accel: f64,
    vehicle: &VehicleState,
    long_engaged: bool,
    params: &LongitudinalParams,
) -> Regime {
    if vehicle.brake_pressed || !long_engaged {
        Regime::Disengage
    } else if accel < params.brake_threshold {
        Regime::HardBrake
    } else if vehicle.gas_pressed {
        Regime::GasHeld
    } else {
        Regime::PoweredAccel
    }
}
