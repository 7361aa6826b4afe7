//! Board client entry point.

mod api;
mod app;
mod buffer;
mod components;
mod density;
mod drag;
mod geometry;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
