//! Gesture controller: turns pointer and key events into drawing, erasing,
//! and tool switching.
//!
//! A gesture runs from pointer-down to pointer-up or pointer-leave. Its
//! mode (brush or eraser) and tool settings are copied from the tool box at
//! pointer-down and held until the gesture ends.
//!
//! The controller owns the stroke store and the renderer, so every event is
//! applied through `&mut self` and runs to completion before the next one.

use crate::config::BoardConfig;
use crate::erase::{Erased, erase_at};
use crate::input::{InputEvent, KeyEvent};
use crate::tools::{Tool, ToolBox, ToolKind};
use scribble_core::{
    Error, HitColor, Point, Result, Segment, StrokeBuilder, StrokeStore, StrokeStyle, StyledPoint,
    Vec2,
};
use scribble_render::{RasterRenderer, Renderer};

/// What handling one event did.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// A brush sample was painted on the surfaces.
    Painted,
    /// A brush gesture ended and its stroke was stored.
    StrokeAdded(HitColor),
    /// A stroke was erased.
    Erased(Erased),
    /// A trigger key selected the tool at this index.
    ToolSelected(usize),
}

pub struct CanvasController<R: Renderer> {
    store: StrokeStore,
    builder: StrokeBuilder,
    renderer: R,
    tools: ToolBox,
    /// Tool copied at pointer-down; `None` between gestures.
    gesture: Option<Tool>,
}

impl<R: Renderer> CanvasController<R> {
    pub fn new(renderer: R, tools: ToolBox) -> Self {
        Self {
            store: StrokeStore::new(),
            builder: StrokeBuilder::new(),
            renderer,
            tools,
            gesture: None,
        }
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn tools(&self) -> &ToolBox {
        &self.tools
    }

    /// Mutable tool box. Changes apply from the next gesture on.
    pub fn tools_mut(&mut self) -> &mut ToolBox {
        &mut self.tools
    }

    /// The tool driving the current gesture.
    pub fn gesture_tool(&self) -> Option<&Tool> {
        self.gesture.as_ref()
    }

    pub fn handle(&mut self, event: &InputEvent) -> Result<Effect> {
        match event {
            InputEvent::PointerDown { x, y, pressure } => self.pointer_down(*x, *y, *pressure),
            InputEvent::PointerMove { x, y, pressure } => self.pointer_move(*x, *y, *pressure),
            InputEvent::PointerUp { x, y, pressure }
            | InputEvent::PointerLeave { x, y, pressure } => self.pointer_end(*x, *y, *pressure),
            InputEvent::Key(key) => Ok(self.key_up(key)),
        }
    }

    /// Start a gesture. A gesture still running (its pointer-up was lost)
    /// is ended first, so an unfinished brush stroke is stored rather than
    /// left on the surfaces without a store entry.
    pub fn pointer_down(&mut self, x: f32, y: f32, pressure: f32) -> Result<Effect> {
        if self.gesture.is_some() {
            log::debug!("controller: pointer down during a gesture, ending it");
            self.end_gesture()?;
        }
        let tool = self.tools.selected_tool().clone();
        let point = Point::new(x, y, tool.radius_for(pressure));

        let effect = match tool.kind {
            ToolKind::Eraser => self.erase(point)?,
            ToolKind::Brush => {
                let color = tool.color.ok_or(Error::MissingToolColor)?;
                let style = StrokeStyle {
                    color,
                    hit_color: self.store.gen_hit_color(),
                };
                let start = StyledPoint::new(point, style);
                self.builder.stroke_start(start);
                self.renderer.stroke_start(&start);
                Effect::Painted
            }
        };
        self.gesture = Some(tool);
        Ok(effect)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, pressure: f32) -> Result<Effect> {
        let Some(tool) = &self.gesture else {
            return Ok(Effect::None);
        };
        let kind = tool.kind;
        let point = Point::new(x, y, tool.radius_for(pressure));
        match kind {
            ToolKind::Eraser => self.erase(point),
            ToolKind::Brush => {
                let (from, style) = self.builder.stroke_continue(point)?;
                self.renderer.stroke_continue(&Segment {
                    from,
                    to: point,
                    style,
                });
                Ok(Effect::Painted)
            }
        }
    }

    /// Pointer up or leave. A brush gesture records the final sample, then
    /// stores the finished stroke.
    pub fn pointer_end(&mut self, x: f32, y: f32, pressure: f32) -> Result<Effect> {
        if self.gesture.as_ref().map(|t| t.kind) == Some(ToolKind::Brush) {
            self.pointer_move(x, y, pressure)?;
        }
        self.end_gesture()
    }

    /// Close the running gesture with the samples it already has.
    fn end_gesture(&mut self) -> Result<Effect> {
        let Some(tool) = self.gesture.take() else {
            return Ok(Effect::None);
        };
        match tool.kind {
            ToolKind::Eraser => Ok(Effect::None),
            ToolKind::Brush => {
                let stroke = self.builder.stroke_complete()?;
                let key = stroke.hit_color();
                self.store.add(stroke)?;
                Ok(Effect::StrokeAdded(key))
            }
        }
    }

    /// Select a tool by trigger key. The running gesture keeps its tool.
    pub fn key_up(&mut self, key: &KeyEvent) -> Effect {
        match self.tools.select_by_key(key) {
            Some(idx) => Effect::ToolSelected(idx),
            None => Effect::None,
        }
    }

    fn erase(&mut self, point: Point) -> Result<Effect> {
        let erased = erase_at(&mut self.store, &mut self.renderer, point.position())?;
        Ok(erased.map_or(Effect::None, Effect::Erased))
    }

    /// Erase the stroke under `position` regardless of the selected tool.
    pub fn erase_at(&mut self, position: Vec2) -> Result<Option<Erased>> {
        erase_at(&mut self.store, &mut self.renderer, position)
    }
}

impl CanvasController<RasterRenderer> {
    /// Controller over headless surfaces sized to the board.
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.raster_renderer(), config.tool_box())
    }
}
