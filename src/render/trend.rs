use chrono::NaiveDate;

use crate::model::{Category, Scorecard, TrendPoint};
use crate::render::format_date;

pub const Y_AXIS_LABEL: &str = "Score (%)";
pub const Y_MIN: f64 = 0.0;
pub const Y_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    /// One slot per x label; None where the series has no value on that date.
    pub points: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub y_label: &'static str,
    pub y_min: f64,
    pub y_max: f64,
    pub x_labels: Vec<String>,
    pub series: Vec<Series>,
}

/// Single-series chart for one product/category pair from the trend endpoint.
pub fn trend_spec(product: &str, category: Category, points: &[TrendPoint]) -> ChartSpec {
    let mut sorted: Vec<&TrendPoint> = points.iter().collect();
    sorted.sort_by_key(|p| p.date);
    ChartSpec {
        title: format!("{}: {} Trend", product, category.label()),
        y_label: Y_AXIS_LABEL,
        y_min: Y_MIN,
        y_max: Y_MAX,
        x_labels: sorted.iter().map(|p| format_date(p.date)).collect(),
        series: vec![Series {
            name: category.label().to_string(),
            points: sorted.iter().map(|p| Some(p.score)).collect(),
        }],
    }
}

/// Multi-metric chart assembled from the cached scorecard list: one series
/// per category over the union of scorecard dates, ascending.
pub fn multi_metric_spec(scorecards: &[Scorecard]) -> ChartSpec {
    let mut sorted: Vec<&Scorecard> = scorecards.iter().collect();
    sorted.sort_by_key(|card| card.date);

    let mut dates: Vec<NaiveDate> = Vec::new();
    for card in &sorted {
        if !dates.contains(&card.date) {
            dates.push(card.date);
        }
    }

    let series = Category::ALL
        .iter()
        .map(|&category| Series {
            name: category.label().to_string(),
            points: dates
                .iter()
                .map(|&date| {
                    sorted
                        .iter()
                        .find(|card| card.category == category && card.date == date)
                        .map(|card| card.score)
                })
                .collect(),
        })
        .collect();

    ChartSpec {
        title: "Score Trends Over Time".to_string(),
        y_label: Y_AXIS_LABEL,
        y_min: Y_MIN,
        y_max: Y_MAX,
        x_labels: dates.into_iter().map(format_date).collect(),
        series,
    }
}

/// Drawing seam: the adapter builds a `ChartSpec`, a backend turns it into
/// output.
pub trait ChartBackend {
    fn draw(&self, spec: &ChartSpec) -> String;
}

const SERIES_GLYPHS: [char; 4] = ['*', '+', 'x', 'o'];

#[derive(Debug, Clone)]
pub struct TextChart {
    pub height: usize,
    pub column_step: usize,
}

impl Default for TextChart {
    fn default() -> Self {
        Self {
            height: 11,
            column_step: 4,
        }
    }
}

impl ChartBackend for TextChart {
    fn draw(&self, spec: &ChartSpec) -> String {
        let mut out = String::new();
        out.push_str(&spec.title);
        out.push('\n');

        let n = spec.x_labels.len();
        if n == 0 {
            out.push_str("(no data)\n");
            return out;
        }

        let height = self.height.max(2);
        let span = spec.y_max - spec.y_min;
        let width = (n - 1) * self.column_step + 1;
        let mut canvas = vec![vec![' '; width]; height];

        for (series_idx, series) in spec.series.iter().enumerate() {
            let glyph = SERIES_GLYPHS[series_idx % SERIES_GLYPHS.len()];
            for (i, point) in series.points.iter().enumerate() {
                let Some(value) = point else { continue };
                let clamped = value.clamp(spec.y_min, spec.y_max);
                let row = ((spec.y_max - clamped) / span * (height - 1) as f64).round() as usize;
                canvas[row.min(height - 1)][i * self.column_step] = glyph;
            }
        }

        out.push_str(spec.y_label);
        out.push('\n');
        for (row, line) in canvas.iter().enumerate() {
            let value = spec.y_max - span * row as f64 / (height - 1) as f64;
            let rendered: String = line.iter().collect();
            out.push_str(&format!("{value:>4.0} |{}\n", rendered.trim_end()));
        }
        out.push_str(&format!("     +{}\n", "-".repeat(width)));

        let first = &spec.x_labels[0];
        let last = &spec.x_labels[n - 1];
        if n == 1 {
            out.push_str(&format!("      {first} (1 point)\n"));
        } else {
            out.push_str(&format!("      {first} .. {last} ({n} points)\n"));
        }

        let legend = spec
            .series
            .iter()
            .enumerate()
            .map(|(i, series)| {
                format!("{} {}", SERIES_GLYPHS[i % SERIES_GLYPHS.len()], series.name)
            })
            .collect::<Vec<_>>()
            .join("   ");
        out.push_str(&format!("      {legend}\n"));
        out
    }
}

#[derive(Debug)]
pub struct RenderedChart {
    pub spec: ChartSpec,
    pub output: String,
}

/// Owns at most one rendered chart. Rendering drops the previous chart before
/// drawing the next, so two charts can never be live on the same surface.
#[derive(Debug, Default)]
pub struct ChartSurface {
    current: Option<RenderedChart>,
}

impl ChartSurface {
    pub fn render(&mut self, backend: &dyn ChartBackend, spec: ChartSpec) -> &RenderedChart {
        self.current = None;
        let output = backend.draw(&spec);
        self.current.insert(RenderedChart { spec, output })
    }

    pub fn current(&self) -> Option<&RenderedChart> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Breakdown;

    fn point(date: &str, score: f64) -> TrendPoint {
        TrendPoint {
            date: date.parse().unwrap(),
            score,
        }
    }

    fn card(date: &str, category: Category, score: f64) -> Scorecard {
        Scorecard {
            id: 0,
            product_id: 1,
            product_name: None,
            category,
            date: date.parse().unwrap(),
            score,
            breakdown: Breakdown::new(),
            feedback: None,
            tool_suggestions: None,
        }
    }

    #[test]
    fn test_trend_labels_sort_ascending_regardless_of_input_order() {
        let spec = trend_spec(
            "Payments",
            Category::Security,
            &[
                point("2024-03-01", 70.0),
                point("2024-01-01", 50.0),
                point("2024-02-01", 60.0),
            ],
        );
        assert_eq!(
            spec.x_labels,
            vec!["Jan 01, 2024", "Feb 01, 2024", "Mar 01, 2024"]
        );
        assert_eq!(
            spec.series[0].points,
            vec![Some(50.0), Some(60.0), Some(70.0)]
        );
    }

    #[test]
    fn test_trend_sort_is_stable_on_date_ties() {
        let spec = trend_spec(
            "Payments",
            Category::Security,
            &[
                point("2024-02-01", 10.0),
                point("2024-01-01", 20.0),
                point("2024-01-01", 30.0),
            ],
        );
        // The two Jan entries keep their original relative order.
        assert_eq!(
            spec.series[0].points,
            vec![Some(20.0), Some(30.0), Some(10.0)]
        );
    }

    #[test]
    fn test_axis_is_fixed_zero_to_hundred() {
        let spec = trend_spec("Payments", Category::Cicd, &[point("2024-01-01", 50.0)]);
        assert_eq!(spec.y_min, 0.0);
        assert_eq!(spec.y_max, 100.0);
        assert_eq!(spec.y_label, "Score (%)");
    }

    #[test]
    fn test_multi_metric_spec_builds_four_series_with_gaps() {
        let spec = multi_metric_spec(&[
            card("2024-02-01", Category::Performance, 65.0),
            card("2024-01-01", Category::Automation, 40.0),
            card("2024-02-01", Category::Automation, 45.0),
        ]);
        assert_eq!(spec.series.len(), 4);
        assert_eq!(spec.x_labels, vec!["Jan 01, 2024", "Feb 01, 2024"]);

        let automation = &spec.series[0];
        assert_eq!(automation.name, "Automation");
        assert_eq!(automation.points, vec![Some(40.0), Some(45.0)]);

        let performance = &spec.series[1];
        assert_eq!(performance.points, vec![None, Some(65.0)]);

        let security = &spec.series[2];
        assert_eq!(security.points, vec![None, None]);
    }

    #[test]
    fn test_surface_never_holds_two_charts() {
        let backend = TextChart::default();
        let mut surface = ChartSurface::default();

        let first = trend_spec("A", Category::Cicd, &[point("2024-01-01", 10.0)]);
        surface.render(&backend, first);

        let second = trend_spec("B", Category::Cicd, &[point("2024-02-01", 20.0)]);
        surface.render(&backend, second.clone());

        let live = surface.current().unwrap();
        assert_eq!(live.spec, second);
    }

    #[test]
    fn test_text_backend_draws_axis_and_legend() {
        let backend = TextChart::default();
        let spec = multi_metric_spec(&[
            card("2024-01-01", Category::Automation, 100.0),
            card("2024-01-01", Category::Security, 0.0),
        ]);
        let drawing = backend.draw(&spec);
        assert!(drawing.contains("Score Trends Over Time"));
        assert!(drawing.contains("Score (%)"));
        assert!(drawing.contains(" 100 |") || drawing.contains("100 |"));
        assert!(drawing.contains("   0 |") || drawing.contains("  0 |"));
        assert!(drawing.contains("* Automation"));
        assert!(drawing.contains("x Security"));
    }

    #[test]
    fn test_text_backend_empty_spec() {
        let backend = TextChart::default();
        let spec = multi_metric_spec(&[]);
        assert!(backend.draw(&spec).contains("(no data)"));
    }
}
