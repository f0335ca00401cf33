//! Shared fixtures for scribble-editor integration tests.

#![allow(dead_code)]

use scribble_core::{
    Aabb, Color, HitColor, Point, Segment, Stroke, StrokeBuilder, StrokeStore, StrokeStyle,
    StyledPoint, Vec2,
};
use scribble_render::{RasterRenderer, Renderer};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Raster renderer that also records clears and full-stroke replays.
pub struct Recording {
    pub inner: RasterRenderer,
    pub cleared: Vec<Aabb>,
    pub replayed: Vec<HitColor>,
}

impl Recording {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: RasterRenderer::new(width, height),
            cleared: Vec::new(),
            replayed: Vec::new(),
        }
    }
}

impl Renderer for Recording {
    fn hit_color_at(&self, position: Vec2) -> Option<HitColor> {
        self.inner.hit_color_at(position)
    }

    fn clear_rect(&mut self, rect: Aabb) {
        self.cleared.push(rect);
        self.inner.clear_rect(rect);
    }

    fn stroke_start(&mut self, point: &StyledPoint) {
        self.inner.stroke_start(point);
    }

    fn stroke_continue(&mut self, segment: &Segment) {
        self.inner.stroke_continue(segment);
    }

    fn stroke_render(&mut self, stroke: &Stroke) {
        self.replayed.push(stroke.hit_color());
        self.inner.stroke_render(stroke);
    }
}

/// Build a stroke sample by sample, painting it incrementally the way a
/// live brush gesture would.
pub fn draw<R: Renderer>(renderer: &mut R, hit: &str, points: &[(f32, f32, f32)]) -> Stroke {
    let style = StrokeStyle {
        color: Color::BLACK,
        hit_color: hit.parse().expect("hit color literal"),
    };
    let mut builder = StrokeBuilder::new();
    let (x, y, r) = points[0];
    let start = StyledPoint::new(Point::new(x, y, r), style);
    builder.stroke_start(start);
    renderer.stroke_start(&start);
    for &(x, y, r) in &points[1..] {
        let to = Point::new(x, y, r);
        let (from, style) = builder.stroke_continue(to).unwrap();
        renderer.stroke_continue(&Segment { from, to, style });
    }
    builder.stroke_complete().unwrap()
}

pub fn draw_and_store<R: Renderer>(
    store: &mut StrokeStore,
    renderer: &mut R,
    hit: &str,
    points: &[(f32, f32, f32)],
) -> HitColor {
    let stroke = draw(renderer, hit, points);
    let key = stroke.hit_color();
    store.add(stroke).unwrap();
    key
}
