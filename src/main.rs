//! Vibe Showcase Frontend Entry Point

mod bindings;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::Level;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    let _ = console_log::init_with_level(level);
    mount_to_body(App);
}
