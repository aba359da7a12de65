use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::manager_reports::parse_hex_color;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const WIDTH: u32 = 600;
const HEIGHT: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    /// Month label and revenue, in display order
    pub points: Vec<(&'static str, f64)>,
    /// `#rrggbb`
    pub color: &'static str,
}

/// Revenue trend line drawn straight onto a canvas.
pub struct TrendChart {
    canvas_ref: NodeRef,
}

impl Component for TrendChart {
    type Message = ();
    type Properties = TrendChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(&ctx.props().points, ctx.props().color);
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-content">
                <canvas
                    ref={self.canvas_ref.clone()}
                    id="revenueChart"
                    class="report-chart-canvas"
                    width={WIDTH.to_string()}
                    height={HEIGHT.to_string()}
                ></canvas>
            </div>
        }
    }
}

impl TrendChart {
    fn draw_chart(&self, points: &[(&'static str, f64)], color: &str) {
        if points.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(WIDTH);
        canvas.set_height(HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let (r, g, b) = parse_hex_color(color).unwrap_or((52, 152, 219));
        let line_color = RGBColor(r, g, b);
        let x_max = (points.len().saturating_sub(1)).max(1) as f64;

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..x_max, 0.0..y_upper_bound(points))
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .x_labels(points.len())
            .x_label_formatter(&|v| axis_label(points, *v))
            .y_label_formatter(&|v| format!("${:.0}", v))
            .label_style(("sans-serif", 12, &RGBColor(102, 102, 102)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .light_line_style(&RGBColor(250, 250, 250))
            .draw()
            .is_err()
        {
            return;
        }

        let series = || points.iter().enumerate().map(|(i, (_, value))| (i as f64, *value));

        if chart
            .draw_series(AreaSeries::new(series(), 0.0, line_color.mix(0.1)))
            .is_err()
        {
            return;
        }

        if chart
            .draw_series(LineSeries::new(series(), line_color.stroke_width(3)))
            .is_err()
        {
            return;
        }

        for point in series() {
            if chart
                .draw_series(std::iter::once(Circle::new(point, 4, line_color.filled())))
                .is_err()
            {
                continue;
            }
        }

        let _ = root.present();
    }
}

/// Top of the y axis: the largest value plus ten percent headroom.
fn y_upper_bound(points: &[(&'static str, f64)]) -> f64 {
    let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    (max * 1.1).max(1.0)
}

/// Label for an x tick; ticks between categories stay blank.
fn axis_label(points: &[(&'static str, f64)], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    points
        .get(index as usize)
        .map(|(label, _)| label.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::manager_reports::REVENUE_TREND;

    #[test]
    fn test_y_upper_bound_adds_headroom() {
        let bound = y_upper_bound(&REVENUE_TREND);
        assert!((bound - 33000.0).abs() < 1e-6);
        assert_eq!(y_upper_bound(&[]), 1.0);
    }

    #[test]
    fn test_axis_label_only_on_categories() {
        assert_eq!(axis_label(&REVENUE_TREND, 0.0), "Jan");
        assert_eq!(axis_label(&REVENUE_TREND, 5.0), "Jun");
        assert_eq!(axis_label(&REVENUE_TREND, 2.5), "");
        assert_eq!(axis_label(&REVENUE_TREND, 9.0), "");
        assert_eq!(axis_label(&REVENUE_TREND, -1.0), "");
    }

    #[test]
    fn test_draw_without_canvas_is_noop() {
        let chart = TrendChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw_chart(&REVENUE_TREND, "#3498db");
        chart.draw_chart(&[], "#3498db");
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use shared::manager_reports::REVENUE_TREND;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_trend_chart_detached_in_wasm() {
        let chart = TrendChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw_chart(&REVENUE_TREND, "not-a-color");
    }
}
