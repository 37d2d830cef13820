//! Fixed-size uniform grid ("spatial hash") for broad-phase collision
//! detection between 2D axis-aligned boxes, with a WebAssembly front end.

use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod logging;
pub mod spatial_hash;

pub use bindings::BroadPhase;
pub use config::GridConfig;
pub use coord::{CellCoord, CellRange, Point};
pub use error::SpatialHashError;
pub use spatial_hash::SpatialHash;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init(constants::DEFAULT_LOG_LEVEL)?;
    Ok(())
}

#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    logging::init(level)?;
    Ok(())
}
