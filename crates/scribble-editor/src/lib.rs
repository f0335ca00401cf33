pub mod config;
pub mod controller;
pub mod erase;
pub mod input;
pub mod shortcuts;
pub mod tools;

pub use config::BoardConfig;
pub use controller::{CanvasController, Effect};
pub use erase::{Erased, erase_at};
pub use input::{InputEvent, KeyEvent};
pub use tools::{Tool, ToolBox, ToolKind};
