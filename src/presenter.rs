//! Boundary between the calculation and whatever draws it.
//!
//! A [`Presenter`] owns the displayed result and at most one live chart. Rendering a new
//! calculation destroys the previous chart before the next one is created, and a reset
//! tears everything down to the empty state.

use log::{debug, info};

use crate::calculation::{calculate, Calculation};
use crate::chart::ChartSpec;
use crate::config::ChartStyle;
use crate::errors::InvalidInput;
use crate::status::StatusCategory;

/// Charting collaborator that turns a [`ChartSpec`] into something visible.
///
/// Handles are owned by the [`Presenter`] and always returned through
/// [`ChartBackend::destroy`]; a backend never has more than one of its handles alive on
/// behalf of a single presenter.
pub trait ChartBackend {
    /// Resource representing one drawn chart.
    type Handle;

    /// Draw a chart and return the resource that keeps it alive.
    fn create(&mut self, spec: &ChartSpec) -> Self::Handle;

    /// Release a chart previously returned by [`ChartBackend::create`].
    fn destroy(&mut self, handle: Self::Handle);
}

/// The visible result of the last accepted calculation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultPanel {
    /// Discharge with three decimals.
    pub discharge: String,
    /// Status shown next to the discharge.
    pub status: StatusCategory,
}

impl ResultPanel {
    /// Panel content for an accepted calculation.
    fn from_calculation(calculation: &Calculation) -> Self {
        Self {
            discharge: calculation.discharge_text(),
            status: calculation.status,
        }
    }

    /// Display label of the status.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.status.label()
    }

    /// Severity tag of the status.
    #[must_use]
    pub const fn severity_tag(&self) -> &'static str {
        self.status.severity_tag()
    }
}

/// Drives a [`ChartBackend`] from raw user input.
pub struct Presenter<B: ChartBackend> {
    /// Where charts are created and destroyed.
    backend: B,
    /// Styling applied to every chart.
    style: ChartStyle,
    /// Result of the last accepted calculation, if any.
    panel: Option<ResultPanel>,
    /// The one live chart, if any.
    chart: Option<B::Handle>,
}

impl<B: ChartBackend> Presenter<B> {
    /// Create a presenter showing nothing.
    #[must_use]
    pub fn new(backend: B, style: ChartStyle) -> Self {
        Self {
            backend,
            style,
            panel: None,
            chart: None,
        }
    }

    /// Calculate from raw input and show the result.
    ///
    /// On success the result panel is replaced and the chart is redrawn: the old chart is
    /// destroyed first, then the new one is created.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] when validation fails. The caller is expected to show
    /// [`InvalidInput::notice`]; the panel and chart are left exactly as they were.
    pub fn calculate(
        &mut self,
        raw_area: &str,
        raw_velocity: &str,
    ) -> Result<Calculation, InvalidInput> {
        let calculation = calculate(raw_area, raw_velocity)?;
        self.panel = Some(ResultPanel::from_calculation(&calculation));

        self.release_chart();
        let spec = ChartSpec::new(&calculation.geometry, &self.style);
        self.chart = Some(self.backend.create(&spec));
        debug!("chart created");

        Ok(calculation)
    }

    /// Clear the result panel and release the chart. Safe to call repeatedly.
    pub fn reset(&mut self) {
        self.panel = None;
        self.release_chart();
        info!("presenter reset");
    }

    /// The result currently on display, if any.
    #[must_use]
    pub fn panel(&self) -> Option<&ResultPanel> {
        self.panel.as_ref()
    }

    /// The live chart, if any.
    #[must_use]
    pub fn chart(&self) -> Option<&B::Handle> {
        self.chart.as_ref()
    }

    /// The charting collaborator.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Style applied to every chart this presenter creates.
    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Destroy the live chart, if there is one.
    fn release_chart(&mut self) {
        if let Some(handle) = self.chart.take() {
            self.backend.destroy(handle);
            debug!("chart destroyed");
        }
    }
}

impl<B: ChartBackend> Drop for Presenter<B> {
    fn drop(&mut self) {
        self.release_chart();
    }
}
