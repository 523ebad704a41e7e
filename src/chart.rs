//! Serializable scatter-chart description handed to a charting collaborator.
//!
//! The layout follows the configuration object of common browser charting libraries so the
//! JSON produced by [`ChartSpec::to_json`] can be fed to one with little or no glue.

use serde::Serialize;

use crate::config::{ChartStyle, LegendPosition};
use crate::discharge::{format_fixed, DISCHARGE_DECIMALS};
use crate::geometry::{ChartGeometry, ChartPoint};

/// Draw order of the user's point; lower values are drawn on top.
const POINT_ORDER: u32 = 1;
/// Draw order of the theoretical line.
const TREND_ORDER: u32 = 2;

/// Complete description of one chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Chart kind, always `"scatter"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// The plotted series.
    pub data: ChartData,
    /// Axes and plugin options.
    pub options: ChartOptions,
}

/// Series of a chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    /// Theoretical line first, user's point second.
    pub datasets: Vec<Dataset>,
}

/// One plotted series together with its styling.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend and tooltip label.
    pub label: String,
    /// Points of the series.
    pub data: Vec<ChartPoint>,
    /// Whether consecutive points are joined by a line.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_line: bool,
    /// Line colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Line width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    /// Dash pattern of the line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub border_dash: Vec<u32>,
    /// Marker fill colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Marker radius; zero hides the markers.
    pub point_radius: u32,
    /// Marker radius while hovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    /// Whether the area under the line is filled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    /// Draw order; lower values are drawn on top.
    pub order: u32,
}

/// Chart-wide options.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Whether the chart follows the size of its container.
    pub responsive: bool,
    /// Whether the canvas keeps its aspect ratio when resized.
    pub maintain_aspect_ratio: bool,
    /// Velocity and discharge axes.
    pub scales: Scales,
    /// Legend options.
    pub plugins: Plugins,
}

/// The two axes of the chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
    /// Velocity axis.
    pub x: Axis,
    /// Discharge axis.
    pub y: Axis,
}

/// One axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    /// Scale kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    /// Side of the plot the axis is drawn on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    /// Axis title.
    pub title: AxisTitle,
    /// Lower bound.
    pub min: f64,
    /// Upper bound; left to the collaborator when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Title of an axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    /// Whether the title is drawn.
    pub display: bool,
    /// Title text.
    pub text: String,
}

/// Plugin options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plugins {
    /// Legend options.
    pub legend: Legend,
}

/// Legend options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    /// Legend placement.
    pub position: LegendPosition,
    /// Label options.
    pub labels: LegendLabels,
}

/// Legend label options.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    /// Whether legend entries use the dataset's marker instead of a box.
    pub use_point_style: bool,
}

impl ChartSpec {
    /// Describe the chart for `geometry` drawn in `style`.
    #[must_use]
    pub fn new(geometry: &ChartGeometry, style: &ChartStyle) -> Self {
        let trend = Dataset {
            label: style.trend_label.clone(),
            data: geometry.trend_line.to_vec(),
            show_line: true,
            border_color: Some(style.trend_color.clone()),
            border_width: Some(style.trend_width),
            border_dash: style.trend_dash.clone(),
            background_color: None,
            point_radius: 0,
            point_hover_radius: None,
            fill: Some(false),
            order: TREND_ORDER,
        };
        let user = Dataset {
            label: style.point_label.clone(),
            data: vec![geometry.user_point],
            show_line: false,
            border_color: None,
            border_width: None,
            border_dash: Vec::new(),
            background_color: Some(style.point_color.clone()),
            point_radius: style.point_radius,
            point_hover_radius: Some(style.point_hover_radius),
            fill: None,
            order: POINT_ORDER,
        };

        Self {
            kind: "scatter",
            data: ChartData {
                datasets: vec![trend, user],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                scales: Scales {
                    x: Axis {
                        kind: Some("linear"),
                        position: Some("bottom"),
                        title: AxisTitle {
                            display: true,
                            text: style.x_title.clone(),
                        },
                        min: 0.0,
                        max: Some(geometry.axis_max_velocity),
                    },
                    y: Axis {
                        kind: None,
                        position: None,
                        title: AxisTitle {
                            display: true,
                            text: style.y_title.clone(),
                        },
                        min: 0.0,
                        max: None,
                    },
                },
                plugins: Plugins {
                    legend: Legend {
                        position: style.legend_position,
                        labels: LegendLabels {
                            use_point_style: true,
                        },
                    },
                },
            },
        }
    }

    /// The theoretical line series.
    #[must_use]
    pub fn trend(&self) -> &Dataset {
        &self.data.datasets[0]
    }

    /// The user's point series.
    #[must_use]
    pub fn user(&self) -> &Dataset {
        &self.data.datasets[1]
    }

    /// Serialize the description to JSON.
    ///
    /// Coordinates that overflowed to infinity have no JSON form and come out as `null`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Tooltip text for a point of the series labelled `label`.
///
/// # Examples
/// ```
/// use flowcalc::{point, tooltip_label};
///
/// assert_eq!(
///     tooltip_label("Your current point", point(0.3, 0.15)),
///     "Your current point: v: 0.3 m/s, Q: 0.150 m³/s"
/// );
/// assert_eq!(tooltip_label("", point(3.0, 1.5)), "v: 3 m/s, Q: 1.500 m³/s");
/// ```
#[must_use]
pub fn tooltip_label(label: &str, point: ChartPoint) -> String {
    let reading = format!(
        "v: {} m/s, Q: {} m³/s",
        point.x,
        format_fixed(point.y, DISCHARGE_DECIMALS)
    );
    if label.is_empty() {
        reading
    } else {
        format!("{label}: {reading}")
    }
}
