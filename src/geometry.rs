//! Chart-ready geometry derived from a single calculation.

use log::debug;
use serde::Serialize;
use uom::si::area::square_meter;
use uom::si::f64::{Area, Velocity, VolumeRate};
use uom::si::velocity::meter_per_second;
use uom::si::volume_rate::cubic_meter_per_second;

/// Smallest upper bound of the velocity axis in metres per second.
pub const MIN_AXIS_VELOCITY: f64 = 3.0;

/// Factor applied to the user's velocity so the plotted point keeps clear of the axis edge.
pub const AXIS_HEADROOM: f64 = 1.2;

/// Position on the discharge-versus-velocity plane.
///
/// `x` is a velocity in metres per second and `y` a discharge in cubic metres per second.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Velocity coordinate.
    pub x: f64,
    /// Discharge coordinate.
    pub y: f64,
}

impl ChartPoint {
    /// Create a [`ChartPoint`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Convenience helper for creating [`ChartPoint`] instances.
///
/// # Examples
/// ```
/// use flowcalc::point;
///
/// let origin = point(0.0, 0.0);
/// assert_eq!(origin.y, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> ChartPoint {
    ChartPoint::new(x, y)
}

/// Everything a chart needs to draw one calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartGeometry {
    /// Upper bound of the velocity axis; the lower bound is always zero.
    pub axis_max_velocity: f64,
    /// Theoretical `Q = A·v` line across the whole visible axis, starting at the origin.
    pub trend_line: [ChartPoint; 2],
    /// The user's own observation.
    pub user_point: ChartPoint,
}

/// Build the chart geometry for one calculation.
///
/// The axis spans `max(3, 1.2·v)`. The trend line runs from the origin to the end of the
/// axis and does not depend on where the user's point sits along it.
///
/// # Examples
/// ```
/// use flowcalc::{build_geometry, point};
/// use uom::si::area::square_meter;
/// use uom::si::f64::{Area, Velocity, VolumeRate};
/// use uom::si::velocity::meter_per_second;
/// use uom::si::volume_rate::cubic_meter_per_second;
///
/// let geometry = build_geometry(
///     Area::new::<square_meter>(0.5),
///     Velocity::new::<meter_per_second>(0.3),
///     VolumeRate::new::<cubic_meter_per_second>(0.15),
/// );
/// assert_eq!(geometry.axis_max_velocity, 3.0);
/// assert_eq!(geometry.trend_line, [point(0.0, 0.0), point(3.0, 1.5)]);
/// ```
#[must_use]
pub fn build_geometry(area: Area, velocity: Velocity, discharge: VolumeRate) -> ChartGeometry {
    let area = area.get::<square_meter>();
    let velocity = velocity.get::<meter_per_second>();
    let discharge = discharge.get::<cubic_meter_per_second>();

    let axis_max_velocity = MIN_AXIS_VELOCITY.max(velocity * AXIS_HEADROOM);
    let geometry = ChartGeometry {
        axis_max_velocity,
        trend_line: [
            point(0.0, 0.0),
            point(axis_max_velocity, area * axis_max_velocity),
        ],
        user_point: point(velocity, discharge),
    };
    debug!("chart geometry: {geometry:?}");
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn geometry(area: f64, velocity: f64) -> ChartGeometry {
        build_geometry(
            Area::new::<square_meter>(area),
            Velocity::new::<meter_per_second>(velocity),
            VolumeRate::new::<cubic_meter_per_second>(area * velocity),
        )
    }

    #[test]
    fn small_velocities_keep_the_minimum_axis() {
        let geometry = geometry(0.5, 0.3);
        assert_eq!(geometry.axis_max_velocity, MIN_AXIS_VELOCITY);
        assert_eq!(geometry.trend_line[1].x, 3.0);
        assert_relative_eq!(geometry.trend_line[1].y, 1.5, epsilon = 1.0e-12);
        assert_eq!(geometry.user_point.x, 0.3);
        assert_relative_eq!(geometry.user_point.y, 0.15, epsilon = 1.0e-12);
    }

    #[test]
    fn large_velocities_get_twenty_percent_headroom() {
        let geometry = geometry(2.0, 5.0);
        assert_relative_eq!(geometry.axis_max_velocity, 6.0, epsilon = 1.0e-12);
        assert_relative_eq!(geometry.trend_line[1].y, 12.0, epsilon = 1.0e-12);
        assert!(geometry.user_point.x < geometry.axis_max_velocity);
    }

    #[test]
    fn axis_bound_dominates_both_constraints() {
        for velocity in [0.0, 0.01, 1.0, 2.5, 2.6, 10.0, 1_234.5] {
            let geometry = geometry(1.0, velocity);
            assert!(geometry.axis_max_velocity >= MIN_AXIS_VELOCITY);
            assert!(geometry.axis_max_velocity >= velocity * AXIS_HEADROOM);
        }
    }

    #[test]
    fn trend_line_always_starts_at_origin() {
        for (area, velocity) in [(0.5, 0.3), (2.0, 0.0), (1.0e-4, 40.0), (8.0, 8.0)] {
            assert_eq!(geometry(area, velocity).trend_line[0], point(0.0, 0.0));
        }
    }

    #[test]
    fn zero_velocity_point_sits_on_the_origin() {
        let geometry = geometry(1.5, 0.0);
        assert_eq!(geometry.user_point, point(0.0, 0.0));
        assert_eq!(geometry.axis_max_velocity, MIN_AXIS_VELOCITY);
    }
}
