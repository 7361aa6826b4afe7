//! A dish marker: wobbles in the tray, follows the pointer while
//! dragged, and stays wherever it was dropped.

use leptos::prelude::*;
use web_sys::{MouseEvent, TouchEvent};

use crate::drag::{self, DRAG_AREA_ID, DragSignals};
use crate::geometry;
use crate::models::Item;

#[component]
pub fn DraggableDish(
    item: Item,
    /// Normalized tray slot in [0,1] along the drag area width.
    initial_x: f64,
    drag: DragSignals,
    /// Whether this dish has a buffered placement.
    #[prop(into)]
    placed: Signal<bool>,
) -> impl IntoView {
    let id = item.id;
    let name = item.name.clone();
    let label = item.name.clone();
    let image_ref = item.image_ref.clone();

    // Park the marker in its tray slot once the area has been laid
    // out; placed markers already carry a position.
    Effect::new(move |_| {
        if drag.positions_read.get().contains_key(&id) {
            return;
        }
        if let Some(area) = drag::element_rect(DRAG_AREA_ID) {
            let pos = geometry::tray_position(area.width, initial_x);
            drag.positions_write.update(|positions| {
                positions.entry(id).or_insert(pos);
            });
        }
    });

    let on_mousedown = move |ev: MouseEvent| {
        ev.prevent_default();
        drag::start_drag(drag, id, ev.client_x() as f64, ev.client_y() as f64);
    };

    let on_touchstart = move |ev: TouchEvent| {
        ev.prevent_default();
        if let Some(touch) = ev.touches().get(0) {
            drag::start_drag(drag, id, touch.client_x() as f64, touch.client_y() as f64);
        }
    };

    let outer_style = move || {
        let (x, y) = drag
            .positions_read
            .get()
            .get(&id)
            .copied()
            .unwrap_or((0.0, geometry::TRAY_Y));
        let dragging = drag.active_read.get() == Some(id);
        let wobble = if !placed.get() && !dragging {
            "dish-wobble 0.55s ease-in-out infinite alternate"
        } else {
            "none"
        };

        format!(
            "position:absolute;left:{x}px;top:{y}px;transform:translate(-50%,-50%);\
             width:56px;height:56px;cursor:{};touch-action:none;z-index:{};\
             display:flex;align-items:center;justify-content:center;animation:{wobble};",
            if dragging { "grabbing" } else { "grab" },
            if dragging { 20 } else { 10 },
        )
    };

    view! {
        <div on:mousedown=on_mousedown on:touchstart=on_touchstart style=outer_style>
            <div style="width:48px;height:48px;border-radius:50%;overflow:hidden;border:2px solid #1d4ed8;background:#fff;box-shadow:0 3px 8px rgba(0,0,0,0.2);display:flex;align-items:center;justify-content:center;">
                {match image_ref {
                    Some(src) => view! {
                        <img src=src alt=name.clone() style="width:100%;height:100%;object-fit:cover;"/>
                    }
                    .into_any(),
                    None => view! {
                        <span style="font-size:11px;padding:0 4px;text-align:center;">
                            {name.clone()}
                        </span>
                    }
                    .into_any(),
                }}
            </div>

            // Name tag while still in the tray
            <Show when=move || !placed.get()>
                <div style="position:absolute;top:56px;left:50%;transform:translateX(-50%);font-size:10px;text-align:center;max-width:80px;color:#111827;">
                    {label.clone()}
                </div>
            </Show>
        </div>
    }
}
