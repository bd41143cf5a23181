//! Platform variants, profiles, and steer-speed policies.
//!
//! The platform family ships several near-identical body styles whose
//! EPS racks tolerate different engagement speeds. All of that variance
//! is carried here as data — a profile of numeric thresholds plus a
//! [`SteerSpeedPolicy`] — so the control logic itself never branches on
//! vehicle identity.

use serde::{Deserialize, Serialize};

use crate::consts::STD_CARGO_KG;

/// Supported vehicle variants of the platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformVariant {
    /// First-run minivan (no minimum steer speed).
    MinivanEarly,
    /// Refreshed minivan with a high engagement floor.
    MinivanLate,
    /// Mid-size SUV trim.
    SuvMid,
    /// Light-duty pickup.
    PickupLightDuty,
    /// Heavy-duty pickup.
    PickupHeavyDuty,
}

/// Speed-band predicate deciding whether the EPS will accept lateral
/// engagement at the current speed.
///
/// The verdict is sticky: policies only assert `true`/`false` on their
/// trigger conditions and otherwise hold the previous verdict, which is
/// what gives the per-variant hysteresis its shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SteerSpeedPolicy {
    /// Open once speed exceeds the minimum; hold otherwise.
    EngageAbove,
    /// Open above the minimum, close below `min − release_margin`,
    /// hold in between.
    Hysteresis {
        /// Re-engagement margin below the minimum [m/s].
        release_margin: f64,
    },
    /// Open only inside `[min, min + window]`; additionally forced
    /// closed when out of a forward-drive gear on racks whose floor is
    /// at or above `drive_gear_floor`.
    EngageWindow {
        /// Width of the engagement window above the minimum [m/s].
        window: f64,
        /// Engagement floor at which the drive-gear interlock applies [m/s].
        drive_gear_floor: f64,
    },
}

impl SteerSpeedPolicy {
    /// Evaluate the sticky speed-band verdict.
    ///
    /// `prev` is the verdict from the previous tick; `min_speed` the
    /// platform's minimum steer-enable speed.
    pub fn evaluate(&self, prev: bool, v_ego: f64, min_speed: f64, in_drive: bool) -> bool {
        match *self {
            Self::EngageAbove => {
                if v_ego > min_speed {
                    true
                } else {
                    prev
                }
            }
            Self::Hysteresis { release_margin } => {
                if v_ego > min_speed {
                    true
                } else if v_ego < min_speed - release_margin {
                    false
                } else {
                    prev
                }
            }
            Self::EngageWindow {
                window,
                drive_gear_floor,
            } => {
                let mut verdict = prev;
                if v_ego >= min_speed && v_ego <= min_speed + window {
                    verdict = true;
                }
                if min_speed >= drive_gear_floor && !in_drive {
                    verdict = false;
                }
                verdict
            }
        }
    }
}

/// Immutable physical and policy parameters for one vehicle variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformProfile {
    pub variant: PlatformVariant,
    /// Curb mass [kg], without cargo allowance.
    pub curb_mass_kg: f64,
    /// Wheelbase [m].
    pub wheelbase_m: f64,
    /// Overall steering ratio.
    pub steer_ratio: f64,
    /// Minimum steer-enable speed [m/s].
    pub min_steer_speed: f64,
    /// Speed-band policy for the steering lockout gate.
    pub steer_policy: SteerSpeedPolicy,
}

impl PlatformProfile {
    /// Total vehicle mass including a cargo allowance [kg].
    #[inline]
    pub fn total_mass_kg(&self, cargo_kg: f64) -> f64 {
        self.curb_mass_kg + cargo_kg
    }
}

impl PlatformVariant {
    /// Build the calibration profile for this variant.
    pub fn profile(self) -> PlatformProfile {
        match self {
            Self::MinivanEarly => PlatformProfile {
                variant: self,
                curb_mass_kg: 2242.0,
                wheelbase_m: 3.089,
                steer_ratio: 16.2,
                min_steer_speed: 0.0,
                steer_policy: SteerSpeedPolicy::EngageAbove,
            },
            Self::MinivanLate => PlatformProfile {
                variant: self,
                curb_mass_kg: 2242.0,
                wheelbase_m: 3.089,
                steer_ratio: 16.2,
                min_steer_speed: 17.5,
                steer_policy: SteerSpeedPolicy::Hysteresis {
                    release_margin: 3.0,
                },
            },
            Self::SuvMid => PlatformProfile {
                variant: self,
                curb_mass_kg: 2242.0,
                wheelbase_m: 2.91,
                steer_ratio: 16.7,
                min_steer_speed: 0.0,
                steer_policy: SteerSpeedPolicy::EngageAbove,
            },
            Self::PickupLightDuty => PlatformProfile {
                variant: self,
                curb_mass_kg: 2493.0,
                wheelbase_m: 3.88,
                steer_ratio: 16.3,
                min_steer_speed: 14.5,
                steer_policy: SteerSpeedPolicy::EngageWindow {
                    window: 0.5,
                    drive_gear_floor: 14.5,
                },
            },
            Self::PickupHeavyDuty => PlatformProfile {
                variant: self,
                curb_mass_kg: 3405.0,
                wheelbase_m: 3.785,
                steer_ratio: 15.61,
                min_steer_speed: 16.0,
                steer_policy: SteerSpeedPolicy::Hysteresis {
                    release_margin: 0.5,
                },
            },
        }
    }
}
