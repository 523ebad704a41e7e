use std::fmt::Write;

use flowcalc::{
    format_fixed, Calculation, ChartSpec, ChartStyle, StatusCategory, DISCHARGE_DECIMALS,
};
use serde::Serialize;
use uom::si::volume_rate::cubic_meter_per_second;

/// Render a textual summary of one calculation.
///
/// The plot itself is drawn by the chart backend; this covers the numbers behind it.
#[must_use]
pub fn render_summary(calculation: &Calculation) -> String {
    let mut output = String::new();
    let geometry = &calculation.geometry;

    // Lead with the discharge itself, at the precision every front end shows.
    writeln!(
        &mut output,
        "Discharge Q = {} m³/s",
        calculation.discharge_text()
    )
    .expect("writing to string cannot fail");

    // The tag is printed next to the label so scripts can grep for it.
    writeln!(
        &mut output,
        "Status: {} [{}]",
        calculation.status.label(),
        calculation.status.severity_tag()
    )
    .expect("writing to string cannot fail");

    // The trend line spans the whole velocity axis, so its end point also gives the axis
    // bound the plot below is scaled to.
    let [start, end] = geometry.trend_line;
    writeln!(
        &mut output,
        "Trend line Q = A·v: ({}, {}) -> ({}, {}), velocity axis 0 to {} m/s",
        start.x,
        start.y,
        end.x,
        format_fixed(end.y, DISCHARGE_DECIMALS),
        geometry.axis_max_velocity
    )
    .expect("writing to string cannot fail");

    // The user's observation always lies on the trend line; repeating it lets a reader
    // check that by hand.
    writeln!(
        &mut output,
        "Your point: v = {} m/s, Q = {} m³/s",
        geometry.user_point.x,
        format_fixed(geometry.user_point.y, DISCHARGE_DECIMALS)
    )
    .expect("writing to string cannot fail");

    output
}

/// Machine-readable form of one calculation.
///
/// JSON has no infinity. When the discharge overflows `f64`, `discharge` reads `"Infinity"`,
/// `discharge_m3_per_s` is `null` and the affected chart coordinates serialize as `null`.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Discharge with three decimals.
    pub discharge: String,
    /// Unrounded discharge in m³/s; `None` when it is not finite.
    pub discharge_m3_per_s: Option<f64>,
    /// Status of the discharge.
    pub status: JsonStatus,
    /// Chart description for an external renderer.
    pub chart: ChartSpec,
}

/// Status entry of a [`JsonReport`].
#[derive(Debug, Serialize)]
pub struct JsonStatus {
    /// Category name.
    pub category: StatusCategory,
    /// Display label.
    pub label: &'static str,
    /// Severity tag.
    pub tag: &'static str,
}

impl JsonReport {
    pub fn new(calculation: &Calculation, style: &ChartStyle) -> Self {
        Self {
            discharge: calculation.discharge_text(),
            discharge_m3_per_s: Some(calculation.discharge.get::<cubic_meter_per_second>())
                .filter(|value| value.is_finite()),
            status: JsonStatus {
                category: calculation.status,
                label: calculation.status.label(),
                tag: calculation.status.severity_tag(),
            },
            chart: ChartSpec::new(&calculation.geometry, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowcalc::calculate;

    #[test]
    fn formats_human_readable_report() {
        let calculation = calculate("0.5", "0.3").expect("valid input");
        let report = render_summary(&calculation);
        assert!(report.contains("Discharge Q = 0.150 m³/s"));
        assert!(report.contains("Status: Operative flow [status-mid]"));
        assert!(report.contains("(0, 0) -> (3, 1.500), velocity axis 0 to 3 m/s"));
        assert!(report.contains("Your point: v = 0.3 m/s, Q = 0.150 m³/s"));
    }

    #[test]
    fn json_report_carries_status_and_chart() {
        let calculation = calculate("2", "0.5").expect("valid input");
        let report = JsonReport::new(&calculation, &ChartStyle::default());
        let value = serde_json::to_value(&report).expect("serializable");
        assert_eq!(value["discharge"], "1.000");
        assert_eq!(value["discharge_m3_per_s"], 1.0);
        assert_eq!(value["status"]["category"], "high");
        assert_eq!(value["status"]["tag"], "status-high");
        assert_eq!(value["chart"]["options"]["scales"]["x"]["max"], 3.0);
    }

    #[test]
    fn json_report_marks_overflow_explicitly() {
        let calculation = calculate("1e308", "10").expect("valid input");
        let report = JsonReport::new(&calculation, &ChartStyle::default());
        assert_eq!(report.discharge, "Infinity");
        assert_eq!(report.discharge_m3_per_s, None);

        let value = serde_json::to_value(&report).expect("serializable");
        assert!(value["discharge_m3_per_s"].is_null());
        assert_eq!(value["status"]["category"], "high");
        assert!(value["chart"]["data"]["datasets"][1]["data"][0]["y"].is_null());
    }

    #[test]
    fn summary_rounds_exact_ties_up() {
        let calculation = calculate("0.25", "0.25").expect("valid input");
        let report = render_summary(&calculation);
        assert!(report.contains("Discharge Q = 0.063 m³/s"));
        assert!(report.contains("Your point: v = 0.25 m/s, Q = 0.063 m³/s"));
    }
}
