//! The interactive surface: tray row, voting plane, and the pointer
//! plumbing shared by all dish markers.

use leptos::prelude::*;
use web_sys::{MouseEvent, TouchEvent};

use crate::buffer::VoteBuffer;
use crate::components::{ChartBoard, DraggableDish};
use crate::drag::{self, DRAG_AREA_ID, DragSignals};
use crate::geometry;
use crate::models::Item;

#[component]
pub fn PlacementArea(
    #[prop(into)] items: Signal<Vec<Item>>,
    drag: DragSignals,
    #[prop(into)] buffer: Signal<VoteBuffer>,
    set_buffer: WriteSignal<VoteBuffer>,
) -> impl IntoView {
    let on_mousemove = move |ev: MouseEvent| {
        drag::track_pointer(drag, ev.client_x() as f64, ev.client_y() as f64);
    };

    let on_mouseup = move |ev: MouseEvent| {
        if let Some((id, x, y)) = drag::finish_drag(drag, ev.client_x() as f64, ev.client_y() as f64)
        {
            set_buffer.update(|buffer| buffer.place(id, x, y));
        }
    };

    let on_touchmove = move |ev: TouchEvent| {
        if drag.active_read.get_untracked().is_some() {
            ev.prevent_default();
        }
        if let Some(touch) = ev.touches().get(0) {
            drag::track_pointer(drag, touch.client_x() as f64, touch.client_y() as f64);
        }
    };

    let on_touchend = move |ev: TouchEvent| {
        if let Some(touch) = ev.changed_touches().get(0) {
            if let Some((id, x, y)) =
                drag::finish_drag(drag, touch.client_x() as f64, touch.client_y() as f64)
            {
                set_buffer.update(|buffer| buffer.place(id, x, y));
            }
        } else {
            drag::cancel_drag(drag);
        }
    };

    view! {
        <div
            id=DRAG_AREA_ID
            style="position:relative;width:560px;margin:0 auto;padding-top:90px;"
            on:mousemove=on_mousemove
            on:mouseup=on_mouseup
            on:mouseleave=move |_| drag::cancel_drag(drag)
            on:touchmove=on_touchmove
            on:touchend=on_touchend
            on:touchcancel=move |_| drag::cancel_drag(drag)
        >
            <ChartBoard/>

            {move || {
                let list = items.get();
                let total = list.len();
                list.into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let id = item.id;
                        let placed = Signal::derive(move || buffer.get().contains(id));
                        view! {
                            <DraggableDish
                                item=item
                                initial_x=geometry::tray_slot(index, total)
                                drag=drag
                                placed=placed
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
