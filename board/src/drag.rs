//! Drag coordination for the placement surface.
//!
//! One dish can be in flight at a time. The signals here are shared
//! between the per-dish markers (which start a drag) and the
//! surrounding drag area (which tracks movement and decides on
//! release whether a placement happened). Marker positions are kept
//! in pixels relative to the drag area.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::geometry::{self, Rect};

pub const DRAG_AREA_ID: &str = "drag-area";
pub const CHART_BOARD_ID: &str = "chart-board";

#[derive(Clone, Copy)]
pub struct DragSignals {
    pub active_read: ReadSignal<Option<i64>>,
    pub active_write: WriteSignal<Option<i64>>,
    pub positions_read: ReadSignal<HashMap<i64, (f64, f64)>>,
    pub positions_write: WriteSignal<HashMap<i64, (f64, f64)>>,
}

pub fn create_drag_signals() -> DragSignals {
    let (active_read, active_write) = signal(None::<i64>);
    let (positions_read, positions_write) = signal(HashMap::new());

    DragSignals {
        active_read,
        active_write,
        positions_read,
        positions_write,
    }
}

/// Bounding rectangle of a DOM element, in client coordinates.
pub fn element_rect(id: &str) -> Option<Rect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();

    Some(Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

pub fn start_drag(drag: DragSignals, item_id: i64, client_x: f64, client_y: f64) {
    drag.active_write.set(Some(item_id));
    track_pointer(drag, client_x, client_y);
}

/// Follow the pointer while a drag is in flight, clamped to the drag
/// area so the marker cannot escape the surface.
pub fn track_pointer(drag: DragSignals, client_x: f64, client_y: f64) {
    let Some(item_id) = drag.active_read.get_untracked() else {
        return;
    };

    if let Some(area) = element_rect(DRAG_AREA_ID) {
        let pos = geometry::clamp_to_area(area, client_x, client_y);
        drag.positions_write.update(|positions| {
            positions.insert(item_id, pos);
        });
    }
}

/// End the drag. Returns `Some((item_id, x, y))` with normalized
/// plane coordinates when the release happened inside the board;
/// `None` otherwise — the marker stays where it was dropped and no
/// vote is recorded.
pub fn finish_drag(drag: DragSignals, client_x: f64, client_y: f64) -> Option<(i64, f64, f64)> {
    let item_id = drag.active_read.get_untracked()?;
    drag.active_write.set(None);

    let plane = element_rect(CHART_BOARD_ID)?;
    let (x, y) = geometry::normalize_release(plane, client_x, client_y)?;

    Some((item_id, x, y))
}

/// Abandon an in-flight drag (pointer left the surface).
pub fn cancel_drag(drag: DragSignals) {
    drag.active_write.set(None);
}
