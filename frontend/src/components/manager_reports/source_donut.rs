use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::manager_reports::{donut_slices, parse_hex_color, DonutSlice, RevenueSource};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const SIZE: u32 = 300;
const INNER_RATIO: f64 = 0.5;
const ARC_STEPS: usize = 48;

#[derive(Properties, PartialEq)]
pub struct SourceDonutProps {
    pub sources: Vec<RevenueSource>,
}

/// Revenue split by source, as a ring with an HTML legend underneath.
pub struct SourceDonut {
    canvas_ref: NodeRef,
}

impl Component for SourceDonut {
    type Message = ();
    type Properties = SourceDonutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(&ctx.props().sources);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-content">
                <canvas
                    ref={self.canvas_ref.clone()}
                    id="revenueDistributionChart"
                    class="report-chart-canvas"
                    width={SIZE.to_string()}
                    height={SIZE.to_string()}
                ></canvas>
                <ul class="chart-legend">
                    {for ctx.props().sources.iter().map(|source| html! {
                        <li>
                            <span class="legend-swatch" style={format!("background-color: {};", source.color)}></span>
                            {source.label}
                        </li>
                    })}
                </ul>
            </div>
        }
    }
}

impl SourceDonut {
    fn draw_chart(&self, sources: &[RevenueSource]) {
        let slices = donut_slices(sources);
        if slices.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(SIZE);
        canvas.set_height(SIZE);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let center = (SIZE as i32 / 2, SIZE as i32 / 2);
        let outer = SIZE as f64 / 2.0 - 10.0;
        for slice in &slices {
            let (r, g, b) = parse_hex_color(slice.source.color).unwrap_or((149, 165, 166));
            let outline = slice_outline(slice, center, outer, outer * INNER_RATIO);
            if root
                .draw(&Polygon::new(outline, RGBColor(r, g, b).filled()))
                .is_err()
            {
                return;
            }
        }

        let _ = root.present();
    }
}

fn arc_point(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        center.0 + (radius * angle.sin()).round() as i32,
        center.1 - (radius * angle.cos()).round() as i32,
    )
}

/// Closed outline of one ring segment: out along the outer arc, back along
/// the inner one. Angles run clockwise from twelve o'clock.
fn slice_outline(slice: &DonutSlice, center: (i32, i32), outer: f64, inner: f64) -> Vec<(i32, i32)> {
    let sweep = slice.end_angle - slice.start_angle;
    let steps = ((ARC_STEPS as f64 * sweep / std::f64::consts::TAU).ceil() as usize).max(1);
    let angle_at = |i: usize| slice.start_angle + sweep * i as f64 / steps as f64;

    let mut points: Vec<(i32, i32)> = (0..=steps).map(|i| arc_point(center, outer, angle_at(i))).collect();
    points.extend((0..=steps).rev().map(|i| arc_point(center, inner, angle_at(i))));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::manager_reports::REVENUE_SOURCES;

    #[test]
    fn test_first_slice_starts_at_twelve_oclock() {
        let slices = donut_slices(&REVENUE_SOURCES);
        let outline = slice_outline(&slices[0], (150, 150), 100.0, 50.0);

        assert_eq!(outline[0], (150, 50));
        // inner arc ends back at the top
        assert_eq!(*outline.last().unwrap(), (150, 100));
    }

    #[test]
    fn test_small_slice_still_has_an_arc() {
        let slices = donut_slices(&REVENUE_SOURCES);
        let other = slices.last().unwrap();
        let outline = slice_outline(other, (0, 0), 100.0, 50.0);
        assert!(outline.len() >= 4);
    }

    #[test]
    fn test_draw_without_canvas_is_noop() {
        let donut = SourceDonut {
            canvas_ref: NodeRef::default(),
        };
        donut.draw_chart(&REVENUE_SOURCES);
        donut.draw_chart(&[]);
    }
}
