//! Boboy Site Entry Point

mod app;
mod catalog;
mod components;
mod data;
mod format;
mod i18n;
mod models;
mod query;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}
