use js_sys::Uint32Array;
use wasm_bindgen::prelude::*;

use crate::config::GridConfig;
use crate::constants::DEFAULT_QUERY_RADIUS;
use crate::coord::Point;
use crate::error::SpatialHashError;
use crate::spatial_hash::SpatialHash;

impl From<SpatialHashError> for JsValue {
    fn from(err: SpatialHashError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

// --- THE BROAD PHASE ---
// JS-facing grid keyed by plain numeric ids. Bounds are passed as
// (left, top, right, bottom) in world units.
#[wasm_bindgen]
pub struct BroadPhase {
    hash: SpatialHash<u32>,
}

#[wasm_bindgen]
impl BroadPhase {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<BroadPhase, JsValue> {
        let hash = SpatialHash::new(width, height, cell_size)?;
        Ok(BroadPhase { hash })
    }

    /// Accepts `{ width, height, cellSize }`; missing fields use the defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config: JsValue) -> Result<BroadPhase, JsValue> {
        let config: GridConfig = if config.is_undefined() || config.is_null() {
            GridConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let hash = SpatialHash::from_config(&config)?;
        Ok(BroadPhase { hash })
    }

    pub fn width(&self) -> u32 { self.hash.width() }
    pub fn height(&self) -> u32 { self.hash.height() }
    #[wasm_bindgen(js_name = cellSize)]
    pub fn cell_size(&self) -> u32 { self.hash.cell_size() }
    pub fn len(&self) -> usize { self.hash.len() }
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool { self.hash.is_empty() }
    pub fn contains(&self, id: u32) -> bool { self.hash.contains(id) }

    pub fn insert(&mut self, id: u32, left: f64, top: f64, right: f64, bottom: f64) {
        self.hash.insert(id, Point::new(left, top), Point::new(right, bottom));
    }

    pub fn remove(&mut self, id: u32) -> bool {
        self.hash.remove(id)
    }

    pub fn update(&mut self, id: u32, left: f64, top: f64, right: f64, bottom: f64) -> bool {
        self.hash.update(id, Point::new(left, top), Point::new(right, bottom))
    }

    /// Returns a fresh copy of the nearby ids, so the array outlives later
    /// queries. `radius` defaults to one cell.
    #[wasm_bindgen(js_name = findNearbyColliders)]
    pub fn find_nearby_colliders(&mut self, id: u32, radius: Option<u32>) -> Uint32Array {
        let radius = radius.unwrap_or(DEFAULT_QUERY_RADIUS);
        Uint32Array::from(self.hash.find_nearby_colliders(id, radius))
    }

    /// `{ start: { x, y }, end: { x, y } }`, or `undefined` when `id` is absent.
    #[wasm_bindgen(js_name = registeredBounds)]
    pub fn registered_bounds(&self, id: u32) -> Result<JsValue, JsValue> {
        match self.hash.registered_bounds(id) {
            Some(bounds) => Ok(serde_wasm_bindgen::to_value(&bounds)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = cellOf)]
    pub fn cell_of(&self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let cell = self.hash.cell_of(Point::new(x, y));
        Ok(serde_wasm_bindgen::to_value(&cell)?)
    }

    pub fn clear(&mut self) {
        self.hash.clear();
    }
}
