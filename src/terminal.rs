use flowcalc::{
    format_fixed, tooltip_label, ChartBackend, ChartPoint, ChartSpec, LegendPosition,
    TerminalConfig, DISCHARGE_DECIMALS,
};
use log::debug;

/// Width reserved for the discharge labels left of the plot.
const LABEL_WIDTH: usize = 8;

/// Chart backend drawing an ASCII scatter plot.
#[derive(Debug, Clone)]
pub struct TerminalChart {
    width: usize,
    height: usize,
}

/// A drawn plot, alive until handed back to [`TerminalChart::destroy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPlot {
    rows: Vec<String>,
    text: String,
}

impl TextPlot {
    /// Plot area only, top row first, without axes or legend.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Complete plot ready to print.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TerminalChart {
    pub fn new(config: TerminalConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }

    fn column(&self, x: f64, x_max: f64) -> usize {
        let scaled = (x / x_max * (self.width - 1) as f64).round();
        (scaled.max(0.0) as usize).min(self.width - 1)
    }

    fn row(&self, y: f64, y_max: f64) -> usize {
        let scaled = (y / y_max * (self.height - 1) as f64).round();
        let from_bottom = (scaled.max(0.0) as usize).min(self.height - 1);
        self.height - 1 - from_bottom
    }

    fn draw(&self, spec: &ChartSpec) -> TextPlot {
        let points = spec.data.datasets.iter().flat_map(|set| set.data.iter());
        let x_max = spec
            .options
            .scales
            .x
            .max
            .unwrap_or_else(|| points.clone().map(|p| p.x).fold(0.0, f64::max));
        let x_max = if x_max > 0.0 { x_max } else { 1.0 };
        let y_max = points.map(|p| p.y).fold(0.0, f64::max);
        let y_max = if y_max > 0.0 { y_max } else { 1.0 };

        let mut grid = vec![vec![' '; self.width]; self.height];

        // Lower order is drawn on top, so it goes last.
        let mut datasets: Vec<_> = spec.data.datasets.iter().collect();
        datasets.sort_by(|a, b| b.order.cmp(&a.order));
        for dataset in datasets {
            if dataset.show_line {
                let dashed = !dataset.border_dash.is_empty();
                for segment in dataset.data.windows(2) {
                    self.draw_segment(&mut grid, segment[0], segment[1], x_max, y_max, dashed);
                }
            } else {
                for p in &dataset.data {
                    grid[self.row(p.y, y_max)][self.column(p.x, x_max)] = '*';
                }
            }
        }

        let rows: Vec<String> = grid.into_iter().map(|row| row.into_iter().collect()).collect();
        let text = self.frame(spec, &rows, x_max, y_max);
        TextPlot { rows, text }
    }

    fn draw_segment(
        &self,
        grid: &mut [Vec<char>],
        start: ChartPoint,
        end: ChartPoint,
        x_max: f64,
        y_max: f64,
        dashed: bool,
    ) {
        let first = self.column(start.x.min(end.x), x_max);
        let last = self.column(start.x.max(end.x), x_max);
        for col in first..=last {
            if dashed && col % 2 == 1 && col != last {
                continue;
            }
            let x = col as f64 / (self.width - 1) as f64 * x_max;
            let y = if end.x == start.x {
                end.y
            } else {
                start.y + (end.y - start.y) * (x - start.x) / (end.x - start.x)
            };
            grid[self.row(y, y_max)][col] = '.';
        }
    }

    fn frame(&self, spec: &ChartSpec, rows: &[String], x_max: f64, y_max: f64) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 6);
        for (index, row) in rows.iter().enumerate() {
            let label = if index == 0 {
                format_fixed(y_max, DISCHARGE_DECIMALS)
            } else if index == rows.len() - 1 {
                "0".to_owned()
            } else {
                String::new()
            };
            lines.push(format!("{label:>width$} |{row}", width = LABEL_WIDTH));
        }
        lines.push(format!("{:>width$} +{}", "", "-".repeat(self.width), width = LABEL_WIDTH));
        let x_end = format!("{x_max}");
        let gap = self.width.saturating_sub(1 + x_end.len());
        lines.push(format!(
            "{:>width$}  0{}{x_end}",
            "",
            " ".repeat(gap),
            width = LABEL_WIDTH
        ));
        lines.push(format!(
            "x: {}   y: {}",
            spec.options.scales.x.title.text, spec.options.scales.y.title.text
        ));

        let legend = legend_lines(spec);
        match spec.options.plugins.legend.position {
            LegendPosition::Top => {
                let mut framed = legend;
                framed.extend(lines);
                framed.join("\n")
            }
            LegendPosition::Bottom => {
                lines.extend(legend);
                lines.join("\n")
            }
            // Side columns would squeeze the plot; a text frame lists them below instead.
            position @ (LegendPosition::Left | LegendPosition::Right) => {
                debug!("legend position {position:?} drawn below the terminal plot");
                lines.extend(legend);
                lines.join("\n")
            }
        }
    }
}

fn legend_lines(spec: &ChartSpec) -> Vec<String> {
    let mut lines = Vec::new();
    for dataset in &spec.data.datasets {
        if dataset.show_line {
            lines.push(format!("  . {}", dataset.label));
        } else {
            for p in &dataset.data {
                lines.push(format!("  * {}", tooltip_label(&dataset.label, *p)));
            }
        }
    }
    lines
}

impl ChartBackend for TerminalChart {
    type Handle = TextPlot;

    fn create(&mut self, spec: &ChartSpec) -> TextPlot {
        self.draw(spec)
    }

    fn destroy(&mut self, plot: TextPlot) {
        debug!("released terminal plot ({} rows)", plot.rows().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowcalc::{calculate, point, ChartGeometry, ChartStyle};

    fn plot(area: &str, velocity: &str, style: &ChartStyle) -> TextPlot {
        let calculation = calculate(area, velocity).expect("valid input");
        let spec = ChartSpec::new(&calculation.geometry, style);
        let mut chart = TerminalChart::new(TerminalConfig {
            width: 11,
            height: 7,
        });
        chart.create(&spec)
    }

    #[test]
    fn places_point_and_dashed_trend() {
        let plot = plot("0.5", "0.3", &ChartStyle::default());
        let rows = plot.rows();
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|row| row.chars().count() == 11));
        // Origin bottom-left, axis end top-right.
        assert_eq!(rows[6].chars().next(), Some('.'));
        assert_eq!(rows[0].chars().last(), Some('.'));
        assert_eq!(rows[5].chars().nth(1), Some('*'));
        let stars: usize = rows.iter().map(|row| row.matches('*').count()).sum();
        assert_eq!(stars, 1);
        // Odd columns are skipped by the dash pattern.
        assert_eq!(rows[3].chars().nth(5), Some(' '));
    }

    #[test]
    fn solid_trend_fills_every_column() {
        let style = ChartStyle {
            trend_dash: Vec::new(),
            ..ChartStyle::default()
        };
        let plot = plot("0.5", "0.3", &style);
        let marks: usize = plot
            .rows()
            .iter()
            .map(|row| row.matches(|c: char| c == '.' || c == '*').count())
            .sum();
        assert!(marks >= 11);
    }

    #[test]
    fn frame_shows_bounds_titles_and_tooltip() {
        let plot = plot("0.5", "0.3", &ChartStyle::default());
        let text = plot.text();
        assert!(text.contains("1.500 |"));
        assert!(text.contains("x: Velocity v (m/s)   y: Discharge Q (m³/s)"));
        assert!(text.contains("  * Your current point: v: 0.3 m/s, Q: 0.150 m³/s"));
        assert!(text.lines().last().is_some_and(|line| line.contains("Your current point")));
    }

    #[test]
    fn legend_can_go_on_top() {
        let style = ChartStyle {
            legend_position: LegendPosition::Top,
            ..ChartStyle::default()
        };
        let plot = plot("0.5", "0.3", &style);
        assert!(plot.text().starts_with("  . Behaviour curve"));
    }

    #[test]
    fn side_legends_are_listed_below_the_plot() {
        for position in [LegendPosition::Left, LegendPosition::Right] {
            let style = ChartStyle {
                legend_position: position,
                ..ChartStyle::default()
            };
            let text = plot("0.5", "0.3", &style).text().to_owned();
            assert!(!text.starts_with("  . Behaviour curve"));
            let last_lines: Vec<&str> = text.lines().rev().take(2).collect();
            assert!(last_lines[0].contains("Your current point"));
            assert!(last_lines[1].starts_with("  . Behaviour curve"));
        }
    }

    #[test]
    fn axis_label_rounds_exact_ties_up() {
        // 0.3125 is exact in binary, so the tie must go up rather than to the even digit.
        let geometry = ChartGeometry {
            axis_max_velocity: 3.0,
            trend_line: [point(0.0, 0.0), point(3.0, 0.3125)],
            user_point: point(1.0, 0.3125 / 3.0),
        };
        let spec = ChartSpec::new(&geometry, &ChartStyle::default());
        let mut chart = TerminalChart::new(TerminalConfig {
            width: 11,
            height: 7,
        });
        assert!(chart.create(&spec).text().contains("   0.313 |"));
    }
}
