//! Per-dish results chart: 6x6 grid, filled density contours, mean
//! marker and the session's own placement.

use leptos::prelude::*;

use crate::density::{self, ScreenPoint};
use crate::models::DensityPoint;

const GRID_STEPS: usize = 6;
const MARGIN: f64 = 26.0;
const BANDWIDTH: f64 = 15.0;

#[component]
pub fn DensityChart(
    #[prop(default = 180.0)] width: f64,
    #[prop(default = 180.0)] height: f64,
    points: Vec<DensityPoint>,
    average: Option<(f64, f64)>,
    user_vote: Option<(f64, f64)>,
) -> impl IntoView {
    let inner_left = MARGIN;
    let inner_right = width - MARGIN;
    let inner_top = MARGIN;
    let inner_bottom = height - MARGIN;
    let inner_width = inner_right - inner_left;
    let inner_height = inner_bottom - inner_top;

    // Normalized [0,1] to chart px, y flipped.
    let xs = move |x: f64| inner_left + x * inner_width;
    let ys = move |y: f64| inner_bottom - y * inner_height;

    let screen_points: Vec<ScreenPoint> = points
        .iter()
        .map(|p| ScreenPoint {
            x: xs(p.x),
            y: ys(p.y),
            weight: p.count as f64,
        })
        .collect();

    let bands = density::contour_bands(&screen_points, width, height, BANDWIDTH);
    let max_value = density::max_band_value(&bands);

    let fill_for = move |value: f64| {
        if max_value <= 0.0 {
            return "rgba(236,72,153,0.15)".to_string();
        }
        let alpha = 0.18 + (value / max_value) * 0.35;
        format!("rgba(236,72,153,{alpha:.2})")
    };

    let center_index = (GRID_STEPS - 1) / 2;
    let grid_lines = (0..GRID_STEPS - 1)
        .map(|i| {
            let frac = (i + 1) as f64 / GRID_STEPS as f64;
            let x = inner_left + frac * inner_width;
            let y = inner_top + frac * inner_height;
            let stroke = if i == center_index {
                "#111827"
            } else {
                "rgba(0,0,0,0.18)"
            };
            let stroke_width = if i == center_index { "2" } else { "1" };

            view! {
                <line
                    x1=x.to_string()
                    y1=inner_top.to_string()
                    x2=x.to_string()
                    y2=inner_bottom.to_string()
                    stroke=stroke
                    stroke-width=stroke_width
                />
                <line
                    x1=inner_left.to_string()
                    y1=y.to_string()
                    x2=inner_right.to_string()
                    y2=y.to_string()
                    stroke=stroke
                    stroke-width=stroke_width
                />
            }
        })
        .collect_view();

    let band_paths = bands
        .into_iter()
        .map(|band| {
            let fill = fill_for(band.value);
            view! {
                <path
                    d=band.path
                    fill=fill
                    stroke="rgba(136,19,55,0.6)"
                    stroke-width="0.8"
                />
            }
        })
        .collect_view();

    view! {
        <svg width=width.to_string() height=height.to_string()>
            <rect
                x="0"
                y="0"
                width=width.to_string()
                height=height.to_string()
                fill="#f9fafb"
                stroke="#e5e7eb"
            />

            {grid_lines}
            <g>{band_paths}</g>

            {average.map(|(x, y)| view! {
                <circle cx=xs(x).to_string() cy=ys(y).to_string() r="5" fill="#000"></circle>
            })}

            {user_vote.map(|(x, y)| view! {
                <circle
                    cx=xs(x).to_string()
                    cy=ys(y).to_string()
                    r="4"
                    fill="#000"
                    stroke="#fff"
                    stroke-width="1"
                ></circle>
            })}

            <text
                x=((inner_left + inner_right) / 2.0).to_string()
                y=(inner_top - 8.0).to_string()
                text-anchor="middle"
                font-size="9"
                font-weight="600"
                fill="#111827"
            >
                "Delicious"
            </text>
            <text
                x=((inner_left + inner_right) / 2.0).to_string()
                y=(inner_bottom + 12.0).to_string()
                text-anchor="middle"
                font-size="9"
                font-weight="600"
                fill="#111827"
            >
                "Meh"
            </text>
            <text
                x=(inner_left - 4.0).to_string()
                y=((inner_top + inner_bottom) / 2.0).to_string()
                text-anchor="end"
                font-size="8.5"
                font-weight="600"
                fill="#111827"
            >
                "Cheap"
            </text>
            <text
                x=(inner_right + 4.0).to_string()
                y=((inner_top + inner_bottom) / 2.0).to_string()
                text-anchor="start"
                font-size="9"
                font-weight="600"
                fill="#111827"
            >
                "Pricey"
            </text>
        </svg>
    }
}
