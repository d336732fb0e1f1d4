#![recursion_limit = "512"]

pub mod components;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use wasm_bindgen::prelude::*;

use components::app::App;

// Use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("mesto client starting");
    yew::start_app::<App>();
    Ok(())
}
