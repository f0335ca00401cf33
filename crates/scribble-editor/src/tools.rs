//! Tool definitions and the tool box.
//!
//! The tool box is plain state owned by the controller. A gesture copies
//! the selected tool at pointer-down and uses that copy until it ends, so
//! switching tools mid-gesture only affects the next gesture.

use crate::input::KeyEvent;
use crate::shortcuts::KeyCombo;
use scribble_core::Color;
use serde::{Deserialize, Serialize};

/// What a gesture does with the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ToolKind {
    Brush,
    Eraser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(rename = "type")]
    pub kind: ToolKind,
    /// Paint color; erasers leave it empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Base stroke radius in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    /// Pixels of radius added at full pressure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_sensitivity: Option<f32>,
    /// Shortcut that selects this tool, e.g. `"KeyP"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_key: Option<String>,
}

impl Tool {
    pub fn brush(color: Color, size: f32, pressure_sensitivity: f32) -> Self {
        Self {
            kind: ToolKind::Brush,
            color: Some(color),
            size: Some(size),
            pressure_sensitivity: Some(pressure_sensitivity),
            trigger_key: None,
        }
    }

    pub fn eraser() -> Self {
        Self {
            kind: ToolKind::Eraser,
            color: None,
            size: None,
            pressure_sensitivity: None,
            trigger_key: None,
        }
    }

    pub fn with_trigger_key(mut self, key: &str) -> Self {
        self.trigger_key = Some(key.to_string());
        self
    }

    /// Stroke radius for a raw pointer pressure in `0.0..=1.0`.
    /// Missing `size` / `pressure_sensitivity` count as 1.
    pub fn radius_for(&self, pressure: f32) -> f32 {
        pressure * self.pressure_sensitivity.unwrap_or(1.0) + self.size.unwrap_or(1.0)
    }

    /// Whether `event` triggers this tool. Tools with an unparsable trigger
    /// key never match.
    pub fn is_triggered_by(&self, event: &KeyEvent) -> bool {
        let Some(trigger) = &self.trigger_key else {
            return false;
        };
        match KeyCombo::parse(trigger) {
            Ok(combo) => combo.matches(event),
            Err(err) => {
                log::warn!("tools: ignoring trigger key: {err}");
                false
            }
        }
    }
}

/// Every available tool plus the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolBox {
    tools: Vec<Tool>,
    selected: usize,
}

impl Default for ToolBox {
    /// Black pressure brush on `P`, eraser on `E`.
    fn default() -> Self {
        Self::new(vec![
            Tool::brush(Color::BLACK, 1.0, 50.0).with_trigger_key("KeyP"),
            Tool::eraser().with_trigger_key("KeyE"),
        ])
    }
}

impl ToolBox {
    /// Build a tool box selecting the first tool. An empty list falls back
    /// to the defaults.
    pub fn new(tools: Vec<Tool>) -> Self {
        if tools.is_empty() {
            return Self::default();
        }
        Self { tools, selected: 0 }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_tool(&self) -> &Tool {
        &self.tools[self.selected]
    }

    /// Select by index. Out-of-range indices are ignored; returns whether
    /// the selection applied.
    pub fn select(&mut self, idx: usize) -> bool {
        if idx >= self.tools.len() {
            log::warn!("tools: no tool at index {idx}");
            return false;
        }
        self.selected = idx;
        true
    }

    /// Select the first tool whose trigger key matches `event`.
    pub fn select_by_key(&mut self, event: &KeyEvent) -> Option<usize> {
        let idx = self.tools.iter().position(|t| t.is_triggered_by(event))?;
        self.selected = idx;
        log::debug!("tools: selected {:?} via {}", self.tools[idx].kind, event.code);
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_tool_box() {
        let tb = ToolBox::default();
        assert_eq!(tb.tools().len(), 2);
        assert_eq!(tb.selected_tool().kind, ToolKind::Brush);
        assert_eq!(tb.selected_tool().color, Some(Color::BLACK));
        assert_eq!(tb.tools()[1].kind, ToolKind::Eraser);
    }

    #[test]
    fn radius_from_pressure() {
        let brush = Tool::brush(Color::BLACK, 1.0, 50.0);
        assert_eq!(brush.radius_for(0.0), 1.0);
        assert_eq!(brush.radius_for(0.5), 26.0);

        let bare = Tool::eraser();
        assert_eq!(bare.radius_for(0.5), 1.5);
    }

    #[test]
    fn select_by_trigger_key() {
        let mut tb = ToolBox::default();
        assert_eq!(tb.select_by_key(&KeyEvent::plain("KeyE")), Some(1));
        assert_eq!(tb.selected_tool().kind, ToolKind::Eraser);

        // Unbound key leaves the selection alone.
        assert_eq!(tb.select_by_key(&KeyEvent::plain("KeyQ")), None);
        assert_eq!(tb.selected_index(), 1);

        assert_eq!(tb.select_by_key(&KeyEvent::plain("KeyP")), Some(0));
    }

    #[test]
    fn trigger_respects_modifiers() {
        let mut tb = ToolBox::new(vec![
            Tool::brush(Color::BLACK, 2.0, 10.0),
            Tool::eraser().with_trigger_key("Shift+KeyE"),
        ]);
        assert_eq!(tb.select_by_key(&KeyEvent::plain("KeyE")), None);
        let shifted = KeyEvent {
            shift: true,
            ..KeyEvent::plain("KeyE")
        };
        assert_eq!(tb.select_by_key(&shifted), Some(1));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut tb = ToolBox::default();
        assert!(!tb.select(5));
        assert_eq!(tb.selected_index(), 0);
        assert!(tb.select(1));
    }

    #[test]
    fn empty_list_falls_back_to_defaults() {
        assert_eq!(ToolBox::new(Vec::new()), ToolBox::default());
    }

    #[test]
    fn tool_json_shape() {
        let tool: Tool = serde_json::from_str(
            r##"{"type":"BRUSH","color":"#ff0000","size":2,"pressureSensitivity":30,"triggerKey":"KeyB"}"##,
        )
        .unwrap();
        assert_eq!(
            tool,
            Tool::brush(Color::rgb(255, 0, 0), 2.0, 30.0).with_trigger_key("KeyB")
        );

        let eraser: Tool = serde_json::from_str(r#"{"type":"ERASER"}"#).unwrap();
        assert_eq!(eraser, Tool::eraser());
    }
}
