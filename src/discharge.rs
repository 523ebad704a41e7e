//! Volumetric discharge `Q = A·v`.

use rust_decimal::{Decimal, RoundingStrategy};
use uom::si::f64::{Area, Velocity, VolumeRate};
use uom::si::volume_rate::cubic_meter_per_second;

/// Compute the discharge through a channel section.
///
/// The product of a positive area and a non-negative velocity, so the result is never
/// negative for validated inputs.
///
/// # Examples
/// ```
/// use flowcalc::compute_discharge;
/// use uom::si::area::square_meter;
/// use uom::si::f64::{Area, Velocity};
/// use uom::si::velocity::meter_per_second;
/// use uom::si::volume_rate::cubic_meter_per_second;
///
/// let q = compute_discharge(
///     Area::new::<square_meter>(2.0),
///     Velocity::new::<meter_per_second>(0.5),
/// );
/// assert_eq!(q.get::<cubic_meter_per_second>(), 1.0);
/// ```
#[must_use]
pub fn compute_discharge(area: Area, velocity: Velocity) -> VolumeRate {
    area * velocity
}

/// Number of decimals shown for every user-facing discharge.
pub const DISCHARGE_DECIMALS: u32 = 3;

/// Render a discharge in cubic metres per second with exactly three decimals.
///
/// Rounding follows [`format_fixed`].
///
/// # Examples
/// ```
/// use flowcalc::format_discharge;
/// use uom::si::f64::VolumeRate;
/// use uom::si::volume_rate::cubic_meter_per_second;
///
/// assert_eq!(format_discharge(VolumeRate::new::<cubic_meter_per_second>(0.15)), "0.150");
/// ```
#[must_use]
pub fn format_discharge(discharge: VolumeRate) -> String {
    format_fixed(discharge.get::<cubic_meter_per_second>(), DISCHARGE_DECIMALS)
}

/// Render `value` with exactly `decimals` digits after the point.
///
/// The exact binary value is rounded, with ties going away from zero, so `0.0625` becomes
/// `0.063`. Zero of either sign renders unsigned. Non-finite values render as `Infinity`,
/// `-Infinity` or `NaN`.
///
/// # Examples
/// ```
/// use flowcalc::format_fixed;
///
/// assert_eq!(format_fixed(0.0625, 3), "0.063");
/// assert_eq!(format_fixed(0.15, 3), "0.150");
/// assert_eq!(format_fixed(f64::INFINITY, 3), "Infinity");
/// ```
#[must_use]
pub fn format_fixed(value: f64, decimals: u32) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    // -0.0 renders as "-0.000" otherwise.
    let value = if value == 0.0 { 0.0 } else { value };
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals);
            rounded.to_string()
        }
        // Beyond the range of `Decimal`; no fractional digits are left to round there.
        None => format!("{value:.prec$}", prec = decimals as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use uom::si::area::square_meter;
    use uom::si::velocity::meter_per_second;

    fn discharge(area: f64, velocity: f64) -> f64 {
        compute_discharge(
            Area::new::<square_meter>(area),
            Velocity::new::<meter_per_second>(velocity),
        )
        .get::<cubic_meter_per_second>()
    }

    #[test]
    fn discharge_is_area_times_velocity() {
        assert_relative_eq!(discharge(0.5, 0.3), 0.15, epsilon = 1.0e-12);
        assert_relative_eq!(discharge(2.0, 0.5), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(discharge(1.0e-3, 12.5), 0.0125, epsilon = 1.0e-12);
    }

    #[test]
    fn zero_velocity_gives_zero_discharge() {
        let q = discharge(3.0, 0.0);
        assert!(q >= 0.0);
        assert_eq!(q, 0.0);
    }

    #[test]
    fn formats_three_decimals() {
        let format = |value| format_discharge(VolumeRate::new::<cubic_meter_per_second>(value));
        assert_eq!(format(1.0), "1.000");
        assert_eq!(format(0.15), "0.150");
        assert_eq!(format(12.34567), "12.346");
        assert_eq!(format(-0.0), "0.000");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_fixed(0.0625, 3), "0.063");
        assert_eq!(format_fixed(1.0005, 3), "1.000");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-0.0625, 3), "-0.063");
    }

    #[test]
    fn non_finite_values_are_spelled_out() {
        assert_eq!(format_fixed(f64::INFINITY, 3), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 3), "-Infinity");
        assert_eq!(format_fixed(f64::NAN, 3), "NaN");
    }

    #[test]
    fn huge_values_keep_three_decimals() {
        assert_eq!(format_fixed(1.0e30, 3), format!("{:.3}", 1.0e30));
    }
}
