//! Results presentation: a plane of markers (own placements or the
//! community mean) plus one density chart per dish.

use leptos::prelude::*;

use crate::buffer::VoteBuffer;
use crate::components::{ChartBoard, DensityChart, ResultMarker};
use crate::models::{DensityPoint, Item, ItemAverage};

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Mine,
    Average,
}

#[component]
pub fn ResultsView(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] averages: Signal<Vec<ItemAverage>>,
    #[prop(into)] density: Signal<Vec<DensityPoint>>,
    #[prop(into)] buffer: Signal<VoteBuffer>,
) -> impl IntoView {
    let (view_mode, set_view_mode) = signal(ViewMode::Mine);

    let toggle_style = move |mode: ViewMode| {
        let active = view_mode.get() == mode;
        format!(
            "padding:6px 14px;margin:0 4px;border-radius:6px;border:1px solid #1d4ed8;\
             cursor:pointer;background:{};color:{};",
            if active { "#1d4ed8" } else { "#fff" },
            if active { "#fff" } else { "#1d4ed8" },
        )
    };

    let markers = move || match view_mode.get() {
        ViewMode::Mine => {
            let catalog = items.get();
            let placements = buffer.get();
            placements
                .iter()
                .filter_map(|(id, pos)| {
                    let item = catalog.iter().find(|item| item.id == id)?;
                    Some(
                        view! {
                            <ResultMarker
                                name=item.name.clone()
                                image_ref=item.image_ref.clone()
                                x=pos.x
                                y=pos.y
                            />
                        }
                        .into_any(),
                    )
                })
                .collect_view()
        }
        // Dishes without votes have no mean and are skipped.
        ViewMode::Average => averages
            .get()
            .into_iter()
            .filter_map(|avg| {
                let (x, y) = (avg.avg_x?, avg.avg_y?);
                Some(
                    view! {
                        <ResultMarker name=avg.name.clone() image_ref=avg.image_ref.clone() x=x y=y/>
                    }
                    .into_any(),
                )
            })
            .collect_view(),
    };

    let charts = move || {
        let all_density = density.get();
        let all_averages = averages.get();
        let placements = buffer.get();

        items
            .get()
            .into_iter()
            .map(|item| {
                let points: Vec<DensityPoint> = all_density
                    .iter()
                    .filter(|p| p.item_id == item.id)
                    .cloned()
                    .collect();
                let average = all_averages
                    .iter()
                    .find(|a| a.item_id == item.id)
                    .and_then(|a| Some((a.avg_x?, a.avg_y?)));
                let user_vote = placements.get(item.id).map(|pos| (pos.x, pos.y));

                view! {
                    <div style="display:inline-block;margin:8px;text-align:center;">
                        <DensityChart points=points average=average user_vote=user_vote/>
                        <div style="font-size:12px;margin-top:4px;">{item.name.clone()}</div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section style="margin-top:32px;">
            <h2>"Results"</h2>

            <div style="text-align:center;margin-bottom:40px;">
                <button
                    style=move || toggle_style(ViewMode::Mine)
                    on:click=move |_| set_view_mode.set(ViewMode::Mine)
                >
                    "My placements"
                </button>
                <button
                    style=move || toggle_style(ViewMode::Average)
                    on:click=move |_| set_view_mode.set(ViewMode::Average)
                >
                    "Community average"
                </button>
            </div>

            <ChartBoard id="results-board">{markers}</ChartBoard>

            <div style="margin-top:40px;text-align:center;">{charts}</div>
        </section>
    }
}
