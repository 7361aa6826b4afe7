//! Coordinate arithmetic for the placement surface.
//!
//! Screen space runs top-down; the vote plane runs bottom-up. Every
//! conversion between the two happens here so the components only
//! deal in whole rectangles and normalized pairs.

/// Vertical offset of the tray row inside the drag area, px.
pub const TRAY_Y: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x <= self.right()
            && client_y >= self.top
            && client_y <= self.bottom()
    }
}

pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Pointer position relative to the drag area, clamped to its bounds.
/// Used while a drag is in flight so the marker never escapes the
/// surface.
pub fn clamp_to_area(area: Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    let raw_x = client_x - area.left;
    let raw_y = client_y - area.top;

    (
        raw_x.clamp(0.0, area.width),
        raw_y.clamp(0.0, area.height),
    )
}

/// Release point to normalized plane coordinates. `None` when the
/// pointer was let go outside the plane: the marker stays put and no
/// vote is recorded. Inside, the y axis is inverted so screen-down
/// means a low value (origin bottom-left).
pub fn normalize_release(plane: Rect, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
    if !plane.contains(client_x, client_y) {
        return None;
    }

    let nx = (client_x - plane.left) / plane.width;
    let ny = 1.0 - (client_y - plane.top) / plane.height;

    Some((clamp01(nx), clamp01(ny)))
}

/// Normalized plane coordinates back to a pixel position inside the
/// plane rectangle, for re-rendering an already placed marker.
pub fn plane_to_px(plane_width: f64, plane_height: f64, x: f64, y: f64) -> (f64, f64) {
    (x * plane_width, (1.0 - y) * plane_height)
}

/// Resting spot for an unplaced marker: one row above the plane,
/// spread along the tray by its normalized slot.
pub fn tray_position(area_width: f64, initial_x: f64) -> (f64, f64) {
    (initial_x * area_width, TRAY_Y)
}

/// Evenly spaced tray slot for the `index`-th of `total` items.
pub fn tray_slot(index: usize, total: usize) -> f64 {
    (index as f64 + 1.0) / (total as f64 + 1.0)
}
