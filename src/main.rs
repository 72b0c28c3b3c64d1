//! Checklist Frontend Entry Point

mod app;
mod components;
mod constants;
mod context;
mod controller;
mod error;
mod list;
mod logging;
mod models;
mod projection;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(constants::LOG_LEVEL);
    mount_to_body(App);
}
