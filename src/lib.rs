#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod calculation;
mod chart;
mod config;
mod discharge;
mod errors;
mod geometry;
mod presenter;
mod status;
mod validation;

pub use calculation::{calculate, Calculation};
pub use chart::{
    tooltip_label, Axis, AxisTitle, ChartData, ChartOptions, ChartSpec, Dataset, Legend,
    LegendLabels, Plugins, Scales,
};
pub use config::{
    ChartStyle, Config, LegendPosition, TerminalConfig, LOCAL_CONFIG_NAME, MIN_TERMINAL_HEIGHT,
    MIN_TERMINAL_WIDTH,
};
pub use discharge::{compute_discharge, format_discharge, format_fixed, DISCHARGE_DECIMALS};
pub use errors::{ConfigError, Field, InvalidInput};
pub use geometry::{
    build_geometry, point, ChartGeometry, ChartPoint, AXIS_HEADROOM, MIN_AXIS_VELOCITY,
};
pub use presenter::{ChartBackend, Presenter, ResultPanel};
pub use status::{classify, StatusCategory, THRESHOLD_HIGH, THRESHOLD_LOW};
pub use validation::{validate, InputPair};
