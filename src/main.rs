#![allow(warnings)]
//! Anime Ledger Frontend Entry Point

mod app;
mod components;
mod context;
mod error;
mod ledger;
mod models;
mod render;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("logger already set: {}", err).into());
    }
    mount_to_body(App);
}
