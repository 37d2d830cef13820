use serde::Deserialize;

use crate::constants::{DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

/// Construction parameters for a [`SpatialHash`](crate::SpatialHash).
///
/// `width` and `height` count cells, not world units. Missing fields fall
/// back to the values in [`constants`](crate::constants).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl GridConfig {
    /// Side length of the covered world along each axis.
    pub fn world_extent(&self) -> (u64, u64) {
        (
            u64::from(self.width) * u64::from(self.cell_size),
            u64::from(self.height) * u64::from(self.cell_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config: GridConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn camel_case_fields() {
        let config: GridConfig =
            serde_json::from_str(r#"{ "width": 10, "height": 12, "cellSize": 16 }"#).unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 12);
        assert_eq!(config.cell_size, 16);
        assert_eq!(config.world_extent(), (160, 192));
    }

    #[test]
    fn partial_object_keeps_other_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{ "cellSize": 8 }"#).unwrap();
        assert_eq!(config.cell_size, 8);
        assert_eq!(config.width, DEFAULT_GRID_WIDTH);
        assert_eq!(config.height, DEFAULT_GRID_HEIGHT);
    }
}
