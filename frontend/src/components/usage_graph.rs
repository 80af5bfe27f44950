use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::data::usage::UsagePoint;

const WIDTH: u32 = 600;
const HEIGHT: u32 = 300;
const BAR: RGBColor = RGBColor(6, 182, 212);

#[derive(Properties, PartialEq)]
pub struct UsageGraphProps {
    pub points: Vec<UsagePoint>,
}

fn draw(canvas: HtmlCanvasElement, points: &[UsagePoint]) -> Result<(), String> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&RGBColor(15, 23, 42)).map_err(|e| format!("{:?}", e))?;

    let max = points.iter().map(|p| p.requests).max().unwrap_or(0);
    let top = max + max / 10 + 1;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Requests per day", ("sans-serif", 18).into_font().color(&WHITE))
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0..points.len(), 0..top)
        .map_err(|e| format!("{:?}", e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(WHITE.mix(0.08))
        .axis_style(WHITE.mix(0.3))
        .label_style(("sans-serif", 12).into_font().color(&WHITE.mix(0.6)))
        .x_labels(points.len().min(7))
        .x_label_formatter(&|x| {
            points
                .get(*x)
                .map(|p| p.date.format("%b %-d").to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    chart
        .draw_series(points.iter().enumerate().map(|(i, p)| {
            let mut bar = Rectangle::new([(i, 0), (i + 1, p.requests)], BAR.filled());
            bar.set_margin(0, 0, 2, 2);
            bar
        }))
        .map_err(|e| format!("{:?}", e))?;

    root.present().map_err(|e| format!("{:?}", e))?;
    Ok(())
}

/// Daily request histogram on a canvas.
#[function_component]
pub fn UsageGraph(props: &UsageGraphProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |points: &Vec<UsagePoint>| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(WIDTH);
                    canvas.set_height(HEIGHT);
                    if let Err(e) = draw(canvas, points) {
                        log::warn!("usage chart not drawn: {}", e);
                    }
                }
                || ()
            },
            props.points.clone(),
        );
    }

    html! {
        <div class="usage-graph">
            <canvas
                ref={canvas_ref}
                width={WIDTH.to_string()}
                height={HEIGHT.to_string()}
                style="max-width: 100%;"
            />
        </div>
    }
}
