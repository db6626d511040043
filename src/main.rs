#![allow(warnings)]
//! StudyFlow Frontend Entry Point

mod api;
mod app;
mod board;
mod chat;
mod components;
mod config;
mod context;
mod files;
mod models;
mod pages;
mod progress;
mod session;
mod sorting;
mod store;
mod timer;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
