//! Three-tier status semaphore for a computed discharge.

use std::fmt;

use log::debug;
use serde::Serialize;
use uom::si::f64::VolumeRate;
use uom::si::volume_rate::cubic_meter_per_second;

/// Discharge below which a flow is reported as [`StatusCategory::Low`], in m³/s.
pub const THRESHOLD_LOW: f64 = 0.1;

/// Discharge above which a flow is reported as [`StatusCategory::High`], in m³/s.
pub const THRESHOLD_HIGH: f64 = 0.25;

/// Operational status of a discharge, ordered from lowest to highest flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    /// Discharge below [`THRESHOLD_LOW`].
    Low,
    /// Discharge between the two thresholds, both ends included.
    Operative,
    /// Discharge above [`THRESHOLD_HIGH`].
    High,
}

impl StatusCategory {
    /// Label shown next to the discharge value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low flow",
            Self::Operative => "Operative flow",
            Self::High => "High / critical flow",
        }
    }

    /// Visual severity tag consumed by presentation layers.
    #[must_use]
    pub const fn severity_tag(self) -> &'static str {
        match self {
            Self::Low => "status-low",
            Self::Operative => "status-mid",
            Self::High => "status-high",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a discharge against the fixed thresholds.
///
/// Values exactly at [`THRESHOLD_LOW`] or [`THRESHOLD_HIGH`] are
/// [`StatusCategory::Operative`].
///
/// # Examples
/// ```
/// use flowcalc::{classify, StatusCategory};
/// use uom::si::f64::VolumeRate;
/// use uom::si::volume_rate::cubic_meter_per_second;
///
/// let q = VolumeRate::new::<cubic_meter_per_second>(0.25);
/// assert_eq!(classify(q), StatusCategory::Operative);
/// ```
#[must_use]
pub fn classify(discharge: VolumeRate) -> StatusCategory {
    let q = discharge.get::<cubic_meter_per_second>();
    let status = if q < THRESHOLD_LOW {
        StatusCategory::Low
    } else if q <= THRESHOLD_HIGH {
        StatusCategory::Operative
    } else {
        StatusCategory::High
    };
    debug!("discharge {q} m³/s classified as {status:?}");
    status
}
