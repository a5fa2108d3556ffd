//! Warehouse configuration edited through the setup panel.

use serde::{Deserialize, Serialize};

const CONFIG_STORAGE_KEY: &str = "wo_config";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseConfig {
    /// Floor width in cells.
    pub width: u32,
    /// Floor length in cells.
    pub length: u32,
    /// Aisle width in cells.
    pub aisle_width: u32,
    /// Simulation playback speed (ticks per second).
    pub sim_speed: u32,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            width: 20,
            length: 30,
            aisle_width: 2,
            sim_speed: 5,
        }
    }
}

impl WarehouseConfig {
    pub fn floor_cells(&self) -> i64 {
        i64::from(self.width) * i64::from(self.length)
    }

    /// Rack cells left after carving one aisle per rack row. Display figure
    /// only; the real layout comes from the optimiser backend.
    pub fn storage_slots(&self) -> i64 {
        let rows_per_band = i64::from(self.aisle_width) + 1;
        let aisle_rows = i64::from(self.length) / rows_per_band;
        self.floor_cells() - aisle_rows * i64::from(self.width)
    }

    /// Restore the last saved configuration, if the store has one.
    pub fn load() -> Option<Self> {
        let store = web_sys::window()?.local_storage().ok()??;
        let raw = store.get_item(CONFIG_STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    /// Persist to local storage; silently does nothing when storage is
    /// unavailable.
    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(raw) = serde_json::to_string(self) {
                    let _ = store.set_item(CONFIG_STORAGE_KEY, &raw);
                }
            }
        }
    }
}
