//! Chart Components
//!
//! Inline SVG renderings of the geometry in `crate::charts`.

use leptos::prelude::*;

use crate::charts::{area_path, bars, donut_segments, gapped_line_path, line_path, shared_range, Frame};
use crate::models::{ForecastPoint, SeriesPoint};

/// KPI sparkline with a soft area fill
#[component]
pub fn Sparkline(series: &'static [SeriesPoint], #[prop(into)] color: String) -> impl IntoView {
    let frame = Frame::new(120.0, 40.0, 2.0);
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();

    view! {
        <svg class="sparkline" viewBox=frame.view_box() preserveAspectRatio="none">
            <path d=area_path(&values, frame) fill=color.clone() fill-opacity="0.12" stroke="none" />
            <path d=line_path(&values, frame) fill="none" stroke=color stroke-width="2" />
        </svg>
    }
}

/// Actual spend against prediction. The actual line stops where data ends.
#[component]
pub fn ForecastChart(points: &'static [ForecastPoint]) -> impl IntoView {
    let frame = Frame::new(600.0, 220.0, 20.0);
    let actual: Vec<Option<f64>> = points.iter().map(|p| p.actual).collect();
    let predicted: Vec<Option<f64>> = points.iter().map(|p| Some(p.predicted)).collect();
    let (min, max) = shared_range(&[actual.as_slice(), predicted.as_slice()]);
    let count = points.len().max(1) as f64;

    let labels = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = frame.padding + (frame.width - 2.0 * frame.padding) * i as f64 / (count - 1.0).max(1.0);
            view! {
                <text x=x.to_string() y=(frame.height - 4.0).to_string() text-anchor="middle" class="axis-label">
                    {p.label}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg class="forecast-chart" viewBox=frame.view_box()>
            <path
                d=gapped_line_path(&predicted, frame, min, max)
                fill="none"
                stroke="#D4AF37"
                stroke-width="2"
                stroke-dasharray="6 4"
            />
            <path d=gapped_line_path(&actual, frame, min, max) fill="none" stroke="#1A2A44" stroke-width="3" />
            {labels}
        </svg>
        <div class="chart-legend">
            <span class="legend-item actual">"Actual"</span>
            <span class="legend-item predicted">"AI Predicted"</span>
        </div>
    }
}

#[component]
pub fn BarChart(series: &'static [SeriesPoint], #[prop(into)] color: String) -> impl IntoView {
    let frame = Frame::new(600.0, 240.0, 20.0);
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();

    let rects = bars(&values, frame, 16.0)
        .into_iter()
        .zip(series)
        .map(|(bar, point)| {
            let label_x = bar.x + bar.width / 2.0;
            view! {
                <g>
                    <rect
                        x=bar.x.to_string()
                        y=bar.y.to_string()
                        width=bar.width.to_string()
                        height=bar.height.to_string()
                        rx="3"
                        fill=color.clone()
                    />
                    <text x=label_x.to_string() y=(frame.height - 4.0).to_string() text-anchor="middle" class="axis-label">
                        {point.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! { <svg class="bar-chart" viewBox=frame.view_box()>{rects}</svg> }
}

#[component]
pub fn DonutChart(series: &'static [SeriesPoint], colors: &'static [&'static str]) -> impl IntoView {
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let segments = donut_segments(&values, 100.0, 100.0, 90.0, 60.0);

    let paths = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let fill = colors.get(i % colors.len().max(1)).copied().unwrap_or("#9CA3AF");
            view! { <path d=segment.path.clone() fill=fill /> }
        })
        .collect_view();

    let legend = series
        .iter()
        .zip(segments)
        .enumerate()
        .map(|(i, (point, segment))| {
            let swatch = format!("background:{}", colors.get(i % colors.len().max(1)).copied().unwrap_or("#9CA3AF"));
            view! {
                <li>
                    <span class="swatch" style=swatch></span>
                    {point.label}
                    <span class="legend-share">{format!("{:.0}%", segment.fraction * 100.0)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="donut">
            <svg viewBox="0 0 200 200" class="donut-chart">{paths}</svg>
            <ul class="donut-legend">{legend}</ul>
        </div>
    }
}
