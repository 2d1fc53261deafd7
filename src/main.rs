#![allow(warnings)]
//! Permission Tree Frontend Entry Point

mod app;
mod components;
mod context;
mod data;
mod database;
mod models;
mod selection;
mod subject;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
