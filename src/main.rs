//! Drawing Admin Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod drawing_no;
mod filter;
mod models;
mod notice;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
