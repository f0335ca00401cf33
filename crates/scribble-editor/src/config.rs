//! Board configuration.
//!
//! Loaded from JSON by the host. Every field is optional:
//!
//! ```json
//! {
//!   "width": 800,
//!   "height": 600,
//!   "tools": [
//!     { "type": "BRUSH", "color": "#1e90ff", "size": 2, "pressureSensitivity": 40, "triggerKey": "KeyP" },
//!     { "type": "ERASER", "triggerKey": "KeyE" }
//!   ]
//! }
//! ```

use crate::tools::{Tool, ToolBox};
use scribble_core::Result;
use scribble_render::RasterRenderer;
use serde::{Deserialize, Serialize};

const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    /// Canvas width in CSS pixels.
    pub width: u32,
    /// Canvas height in CSS pixels.
    pub height: u32,
    pub tools: Vec<Tool>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tools: ToolBox::default().tools().to_vec(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(text)?;
        log::debug!(
            "config: {}x{} board, {} tools",
            config.width,
            config.height,
            config.tools.len()
        );
        Ok(config)
    }

    pub fn tool_box(&self) -> ToolBox {
        ToolBox::new(self.tools.clone())
    }

    /// Headless surfaces sized to the board.
    pub fn raster_renderer(&self) -> RasterRenderer {
        RasterRenderer::new(self.width, self.height)
    }
}
